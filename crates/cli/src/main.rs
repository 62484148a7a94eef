use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

/// Roster - build-time instance collection
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Generates instance collections from an exported declaration graph")]
#[command(version)]
struct Cli {
    /// Path to the workspace root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run discovery and generation over an exported declaration graph
    Generate {
        /// Declaration graph exported by the host build (JSON)
        #[arg(long)]
        graph: PathBuf,
        /// Output directory for generated source
        /// (defaults to <workspace>/build/generated/roster)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Collector configuration file (defaults to <workspace>/roster.yml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Manage the qualifier cache
    Cache {
        #[command(subcommand)]
        cache_command: CacheCommands,
    },
}

#[derive(Subcommand)]
enum CacheCommands {
    /// Show the cached qualified names
    Show,
    /// Delete the cache file
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { graph, out, config } => {
            commands::generate::execute(&cli.workspace, &graph, out, config)
        }
        Commands::Cache { cache_command } => match cache_command {
            CacheCommands::Show => commands::cache::show(&cli.workspace),
            CacheCommands::Clear => commands::cache::clear(&cli.workspace),
        },
    }
}
