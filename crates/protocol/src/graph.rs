//! In-memory declaration graph.
//!
//! [`DeclarationGraph`] is the interchange form of the resolver: hosts
//! export their declaration tree (for example as JSON via a compiler
//! plugin) and the collector replays it. Tests build graphs directly.

use crate::traits::DeclarationResolver;
use crate::types::{Declaration, SourceFile};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// A complete, self-contained declaration world: source files under
/// compilation plus the top-level declarations of already-compiled
/// dependencies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclarationGraph {
    #[serde(default)]
    pub files: Vec<SourceFile>,

    /// Top-level declarations resolved out of binary dependencies. They
    /// carry no containing file.
    #[serde(default)]
    pub binary_declarations: Vec<Declaration>,
}

impl DeclarationGraph {
    /// Decode a graph from its JSON export.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("failed to parse declaration graph")
    }
}

fn find_in<'a>(declarations: &'a [Declaration], qualified_name: &str) -> Option<&'a Declaration> {
    for declaration in declarations {
        if declaration.qualified_name == qualified_name {
            return Some(declaration);
        }
        if let Some(found) = find_in(&declaration.nested, qualified_name) {
            return Some(found);
        }
    }
    None
}

impl DeclarationResolver for DeclarationGraph {
    fn source_files(&self) -> &[SourceFile] {
        &self.files
    }

    fn find_declaration(&self, qualified_name: &str) -> Option<&Declaration> {
        for file in &self.files {
            if let Some(found) = find_in(&file.declarations, qualified_name) {
                return Some(found);
            }
        }
        find_in(&self.binary_declarations, qualified_name)
    }

    fn declarations_in_package(&self, package: &str) -> Vec<&Declaration> {
        self.files
            .iter()
            .flat_map(|file| file.declarations.iter())
            .chain(self.binary_declarations.iter())
            .filter(|declaration| declaration.package_name() == package)
            .collect()
    }
}
