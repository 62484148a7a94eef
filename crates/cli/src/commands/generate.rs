use anyhow::{Context, Result};
use colored::*;
use roster_core::sink::FsSink;
use roster_core::InstanceCollector;
use roster_protocol::DeclarationGraph;
use std::fs;
use std::path::{Path, PathBuf};

pub fn execute(
    workspace: &Path,
    graph_path: &Path,
    out: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = super::load_config(workspace, config_path)?;
    let out_dir = out.unwrap_or_else(|| super::default_generated_root(workspace));

    let graph_json = fs::read_to_string(graph_path)
        .with_context(|| format!("failed to read declaration graph {}", graph_path.display()))?;
    let graph = DeclarationGraph::from_json(&graph_json)?;

    let options = config.into_option_map();
    let Some(mut collector) = InstanceCollector::from_options(&options) else {
        println!(
            "{}",
            "Nothing to do: package-name and super-type are not configured".dimmed()
        );
        return Ok(());
    };

    let mut sink = FsSink::new(out_dir);
    let summary = collector.process(&graph, &mut sink)?;

    if summary.is_empty() {
        println!("{}", "No collections generated".dimmed());
        return Ok(());
    }

    println!("{}", "Generated collections".bold().underline());
    for (label, variable) in [
        ("internal", &summary.internal_variable),
        ("external", &summary.external_variable),
        ("combined", &summary.combined_variable),
    ] {
        if let Some(variable) = variable {
            println!("  {} {}", variable.cyan(), format!("[{label}]").dimmed());
        }
    }

    let manifest = sink.write_association_manifest()?;
    let association_count: usize = sink.associations().values().map(Vec::len).sum();
    println!(
        "{}",
        format!(
            "{} source association(s) recorded in {}",
            association_count,
            manifest.display()
        )
        .dimmed()
    );

    Ok(())
}
