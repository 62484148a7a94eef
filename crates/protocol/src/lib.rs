//! Protocol definitions between the roster collector engine and its host
//! build system.
//!
//! The engine in `roster_core` discovers concrete implementations of a
//! marker type and emits generated source declaring collections of them.
//! It reaches the host exclusively through this crate:
//!
//! - [`DeclarationResolver`] supplies the declaration world (source files,
//!   name resolution, per-package lookup)
//! - [`CodeSink`] persists generated files and records incremental
//!   file-to-input associations
//! - [`DeclarationGraph`] is a serde-backed resolver implementation hosts
//!   can export as JSON and replay out of process

pub mod graph;
pub mod traits;
pub mod types;

pub use graph::DeclarationGraph;
pub use traits::{CodeSink, DeclarationResolver};
pub use types::{Declaration, DeclarationKind, SourceFile, Visibility};
