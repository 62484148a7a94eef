//! Filesystem code sink.

use crate::types::RosterResult;
use roster_protocol::CodeSink;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes generated files under a root directory, mirroring the package
/// name as a directory path, and records file-to-input associations on
/// behalf of hosts that consume invalidation data out of process.
#[derive(Debug)]
pub struct FsSink {
    root: PathBuf,
    associations: BTreeMap<String, Vec<PathBuf>>,
}

impl FsSink {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            associations: BTreeMap::new(),
        }
    }

    /// Associations recorded so far, keyed by `package.variable`.
    #[must_use]
    pub fn associations(&self) -> &BTreeMap<String, Vec<PathBuf>> {
        &self.associations
    }

    /// Persist the recorded associations as `associations.json` at the
    /// sink root.
    pub fn write_association_manifest(&self) -> RosterResult<PathBuf> {
        let manifest_path = self.root.join("associations.json");
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(&self.associations)?;
        fs::write(&manifest_path, json)?;
        Ok(manifest_path)
    }

    fn file_path(&self, package: &str, name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in package.split('.').filter(|segment| !segment.is_empty()) {
            path.push(segment);
        }
        path.join(format!("{name}.kt"))
    }
}

impl CodeSink for FsSink {
    fn create_file(&mut self, package: &str, name: &str, contents: &str) -> io::Result<()> {
        let path = self.file_path(package, name);
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("generated file already exists: {}", path.display()),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)
    }

    fn associate(&mut self, sources: &[PathBuf], package: &str, name: &str) -> io::Result<()> {
        let entry = self
            .associations
            .entry(format!("{package}.{name}"))
            .or_default();
        for source in sources {
            if !entry.contains(source) {
                entry.push(source.clone());
            }
        }
        Ok(())
    }

    fn generated_root(&self) -> &Path {
        &self.root
    }
}
