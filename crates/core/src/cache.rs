//! Persistent qualifier cache.
//!
//! Incremental compilation only re-presents the files that changed;
//! without a durable record of earlier discoveries, a rebuild touching one
//! unrelated file would lose every previously-found instance. The cache
//! file holds one fully-qualified name per line and lives outside the
//! generated-output tree, so cleaning generated artifacts does not clean
//! the cache.

use crate::types::RosterResult;
use roster_protocol::{Declaration, DeclarationResolver};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// File name used when the cache location is inferred rather than
/// configured.
pub const CACHE_FILE_NAME: &str = "instances-cache.txt";

/// The durable record of previously-discovered qualified names.
#[derive(Debug, Clone)]
pub struct QualifierCache {
    path: PathBuf,
}

impl QualifierCache {
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Derive a durable location from the ephemeral generated root:
    /// truncate the path at the first component named `generated` and
    /// append [`CACHE_FILE_NAME`]. Returns `None` when the root carries no
    /// such marker; callers should then require an explicit `cache-path`.
    #[must_use]
    pub fn locate_beside(generated_root: &Path) -> Option<PathBuf> {
        let mut durable = PathBuf::new();
        let mut found = false;
        for component in generated_root.components() {
            if matches!(component, Component::Normal(name) if name == "generated") {
                found = true;
                break;
            }
            durable.push(component.as_os_str());
        }
        found.then(|| durable.join(CACHE_FILE_NAME))
    }

    /// Read the cached names. A missing file is created empty and yields
    /// the empty set.
    pub fn load(&self) -> RosterResult<Vec<String>> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, "")?;
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// Restore still-resolvable cached names into `candidates`, after the
    /// freshly-discovered entries and in cache order. Names that no longer
    /// resolve are dropped silently.
    pub fn reconcile(
        &self,
        candidates: &mut Vec<Declaration>,
        resolver: &dyn DeclarationResolver,
    ) -> RosterResult<()> {
        let mut present: HashSet<String> = candidates
            .iter()
            .map(|declaration| declaration.qualified_name.clone())
            .collect();
        for name in self.load()? {
            if !present.insert(name.clone()) {
                continue;
            }
            if let Some(declaration) = resolver.find_declaration(&name) {
                candidates.push(declaration.clone());
            }
        }
        Ok(())
    }

    /// Overwrite the cache with exactly `names`, one per line.
    pub fn save(&self, names: &[String]) -> RosterResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, names.join("\n"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_protocol::{DeclarationGraph, DeclarationKind, SourceFile, Visibility};

    fn cache_in(dir: &Path) -> QualifierCache {
        QualifierCache::at(dir.join(CACHE_FILE_NAME))
    }

    fn class(name: &str) -> Declaration {
        Declaration {
            qualified_name: name.to_string(),
            kind: DeclarationKind::Class,
            visibility: Visibility::Public,
            is_abstract: false,
            supertypes: Vec::new(),
            containing_file: Some(PathBuf::from("src/Main.kt")),
            nested: Vec::new(),
        }
    }

    fn resolver_with(names: &[&str]) -> DeclarationGraph {
        DeclarationGraph {
            files: vec![SourceFile {
                path: PathBuf::from("src/Main.kt"),
                declarations: names.iter().map(|name| class(name)).collect(),
            }],
            binary_declarations: Vec::new(),
        }
    }

    #[test]
    fn missing_file_is_created_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(dir.path());

        assert!(cache.load().unwrap().is_empty());
        assert!(cache.path().exists());
    }

    #[test]
    fn save_overwrites_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(dir.path());

        cache
            .save(&["com.app.Foo".to_string(), "com.app.Bar".to_string()])
            .unwrap();
        assert_eq!(
            fs::read_to_string(cache.path()).unwrap(),
            "com.app.Foo\ncom.app.Bar"
        );

        cache.save(&["com.app.Foo".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(cache.path()).unwrap(), "com.app.Foo");
        assert_eq!(cache.load().unwrap(), vec!["com.app.Foo".to_string()]);
    }

    #[test]
    fn reconcile_restores_resolvable_and_drops_stale() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(dir.path());
        cache
            .save(&[
                "com.app.Cached".to_string(),
                "com.app.Deleted".to_string(),
            ])
            .unwrap();

        let resolver = resolver_with(&["com.app.Cached", "com.app.Fresh"]);
        let mut candidates = vec![class("com.app.Fresh")];
        cache.reconcile(&mut candidates, &resolver).unwrap();

        let names: Vec<&str> = candidates
            .iter()
            .map(|declaration| declaration.qualified_name.as_str())
            .collect();
        assert_eq!(names, vec!["com.app.Fresh", "com.app.Cached"]);
    }

    #[test]
    fn reconcile_skips_names_already_discovered_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(dir.path());
        fs::write(
            cache.path(),
            "com.app.Fresh\ncom.app.Cached\ncom.app.Cached\n",
        )
        .unwrap();

        let resolver = resolver_with(&["com.app.Fresh", "com.app.Cached"]);
        let mut candidates = vec![class("com.app.Fresh")];
        cache.reconcile(&mut candidates, &resolver).unwrap();

        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn location_is_inferred_from_the_generated_marker() {
        assert_eq!(
            QualifierCache::locate_beside(Path::new("proj/build/generated/roster/com")),
            Some(PathBuf::from("proj/build").join(CACHE_FILE_NAME))
        );
        assert_eq!(
            QualifierCache::locate_beside(Path::new("proj/out/roster")),
            None
        );
    }
}
