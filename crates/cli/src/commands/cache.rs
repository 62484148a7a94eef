use anyhow::{Context, Result};
use colored::*;
use roster_core::cache::QualifierCache;
use std::fs;
use std::path::Path;

pub fn show(workspace: &Path) -> Result<()> {
    let cache = QualifierCache::at(super::resolve_cache_path(workspace)?);
    if !cache.path().exists() {
        println!("{}", "No cache file".dimmed());
        return Ok(());
    }

    let names = cache.load()?;
    if names.is_empty() {
        println!("{}", "Cache is empty".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!("Cached qualifiers ({})", cache.path().display())
            .bold()
            .underline()
    );
    for name in names {
        println!("  {}", name.cyan());
    }
    Ok(())
}

pub fn clear(workspace: &Path) -> Result<()> {
    let path = super::resolve_cache_path(workspace)?;
    if path.exists() {
        fs::remove_file(&path)
            .with_context(|| format!("failed to remove {}", path.display()))?;
        println!("Removed {}", path.display());
    } else {
        println!("{}", "No cache file to remove".dimmed());
    }
    Ok(())
}
