//! Roster core library
//!
//! This is the core library for the roster instance collector. It
//! discovers, at build time, every concrete type implementing a configured
//! marker type and emits generated source declaring collections of those
//! instances, so application code can enumerate plugin-like
//! implementations without a manual registry.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`engine`] - The entry point: orchestration and the invocation guard
//! - [`walker`] - Declaration-graph traversal over the presented files
//! - [`eligibility`] - The collectible-declaration filter
//! - [`cache`] - The persistent qualifier cache that keeps incremental
//!   runs complete
//! - [`internal`], [`external`], [`combined`] - The three collection
//!   emitters
//! - [`codegen`] - Rendering of generated collection files
//! - [`sink`] - A filesystem implementation of the code sink
//! - [`options`], [`config`] - Option-map parsing and the YAML config model
//! - [`results`] - Result types for collector runs
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The primary entry point is the [`InstanceCollector`], constructed from
//! the host's option map and run against a resolver and a sink:
//!
//! ```rust,no_run
//! use roster_core::sink::FsSink;
//! use roster_core::InstanceCollector;
//! use roster_protocol::DeclarationGraph;
//! use std::collections::HashMap;
//!
//! # fn example(options: HashMap<String, String>) -> roster_core::RosterResult<()> {
//! let graph = DeclarationGraph::default();
//! let mut sink = FsSink::new("build/generated/roster".into());
//! if let Some(mut collector) = InstanceCollector::from_options(&options) {
//!     let summary = collector.process(&graph, &mut sink)?;
//!     println!("generated: {:?}", summary);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod codegen;
pub mod combined;
pub mod config;
pub mod eligibility;
pub mod engine;
pub mod external;
pub mod internal;
pub mod options;
pub mod results;
pub mod sink;
pub mod types;
pub mod walker;

// Re-export the main types for easier usage
pub use engine::InstanceCollector;
pub use options::CollectorOptions;
pub use results::RunSummary;
pub use types::{RosterError, RosterResult};
