use anyhow::{Context, Result};
use roster_core::cache::QualifierCache;
use roster_core::config::{parse_collector_config, CollectorConfig};
use std::fs;
use std::path::{Path, PathBuf};

pub mod cache;
pub mod generate;

/// Load the collector configuration, tolerating a missing file: an absent
/// config simply means nothing is requested.
pub(crate) fn load_config(workspace: &Path, explicit: Option<PathBuf>) -> Result<CollectorConfig> {
    let path = explicit.unwrap_or_else(|| workspace.join("roster.yml"));
    if !path.exists() {
        return Ok(CollectorConfig::default());
    }
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_collector_config(&contents)
        .map_err(|e| anyhow::anyhow!("failed to parse config {}: {}", path.display(), e))
}

pub(crate) fn default_generated_root(workspace: &Path) -> PathBuf {
    workspace.join("build").join("generated").join("roster")
}

/// The cache location the engine would use: the configured `cache-path`,
/// or the one inferred from the default generated root.
pub(crate) fn resolve_cache_path(workspace: &Path) -> Result<PathBuf> {
    let config = load_config(workspace, None)?;
    if let Some(path) = config.cache_path {
        return Ok(path);
    }
    QualifierCache::locate_beside(&default_generated_root(workspace))
        .context("cannot determine the cache location; set cache-path in roster.yml")
}
