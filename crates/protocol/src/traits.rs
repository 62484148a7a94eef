//! Trait seams between the collector engine and the host build system.
//!
//! The engine never touches the host's symbol tables or output directories
//! directly; everything flows through these two traits:
//! - [`DeclarationResolver`] - the host's view of the declaration world
//! - [`CodeSink`] - where generated source is persisted

use crate::types::{Declaration, SourceFile};
use std::io;
use std::path::{Path, PathBuf};

/// The host's view of the declaration world for one build invocation.
///
/// Incremental hosts may present only the source files that changed since
/// the last build through [`source_files`](Self::source_files), but
/// [`find_declaration`](Self::find_declaration) must still resolve names
/// across everything the compiler can currently see, including binary
/// dependencies. The collector's persistent cache relies on that asymmetry
/// to restore candidates whose files were not re-presented.
pub trait DeclarationResolver {
    /// The source files presented for this invocation.
    fn source_files(&self) -> &[SourceFile];

    /// Resolve a fully-qualified name anywhere in the current world view,
    /// including nested declarations and binary dependencies. Returns
    /// `None` for names that no longer exist.
    fn find_declaration(&self, qualified_name: &str) -> Option<&Declaration>;

    /// Top-level declarations in `package`, from both source and binary
    /// dependencies.
    fn declarations_in_package(&self, package: &str) -> Vec<&Declaration>;
}

/// Persists generated source files and records the host's incremental
/// bookkeeping.
pub trait CodeSink {
    /// Persist one generated source file in `package` under the name
    /// `name`. Creating the same `package`/`name` pair twice within one
    /// build is an error; the engine's invocation guard exists to keep a
    /// multi-round host from attempting it.
    fn create_file(&mut self, package: &str, name: &str, contents: &str) -> io::Result<()>;

    /// Declare that the file generated as `name` must be regenerated
    /// whenever any of `sources` change. Hosts without incremental
    /// invalidation can ignore this.
    fn associate(&mut self, _sources: &[PathBuf], _package: &str, _name: &str) -> io::Result<()> {
        Ok(())
    }

    /// Root of the ephemeral generated-output tree. Used to infer a durable
    /// cache location when none is configured explicitly.
    fn generated_root(&self) -> &Path;
}
