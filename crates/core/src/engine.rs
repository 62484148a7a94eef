//! Engine orchestration.
//!
//! [`InstanceCollector`] wires the walker, the eligibility filter, the
//! qualifier cache, and the three emitters into the single entry point a
//! host calls once per build invocation.

use crate::cache::QualifierCache;
use crate::combined::emit_combined;
use crate::external::collect_external;
use crate::internal::collect_internal;
use crate::options::CollectorOptions;
use crate::results::RunSummary;
use crate::types::{RosterError, RosterResult};
use roster_protocol::{CodeSink, DeclarationResolver};
use std::collections::HashMap;
use std::path::PathBuf;

/// Keeps the pipeline from running more than once per constructed engine,
/// however many rounds the host drives. An instance field, not process
/// state: a fresh engine per build invocation starts fresh.
#[derive(Debug, Default)]
struct PassGuard {
    ran: bool,
}

impl PassGuard {
    /// True exactly once per engine lifetime.
    fn should_run(&mut self) -> bool {
        if self.ran {
            return false;
        }
        self.ran = true;
        true
    }
}

/// The discovery-and-generation engine.
///
/// Construct one per build invocation; repeated
/// [`process`](Self::process) calls after the first return an empty
/// summary without touching the sink. The work is not round-sensitive,
/// and a second emission of the same output path would be an error.
#[derive(Debug)]
pub struct InstanceCollector {
    options: CollectorOptions,
    guard: PassGuard,
}

impl InstanceCollector {
    #[must_use]
    pub fn new(options: CollectorOptions) -> Self {
        Self {
            options,
            guard: PassGuard::default(),
        }
    }

    /// Build an engine from the host's option map. `None` when the
    /// required options are absent; hosts treat that as "nothing
    /// requested", not an error.
    #[must_use]
    pub fn from_options(options: &HashMap<String, String>) -> Option<Self> {
        CollectorOptions::from_map(options).map(Self::new)
    }

    #[must_use]
    pub fn options(&self) -> &CollectorOptions {
        &self.options
    }

    /// Run discovery and generation against the host's resolver and sink.
    ///
    /// Expected degradations (unresolvable marker, empty sets) surface as
    /// `None` entries in the summary; only I/O failures are errors.
    pub fn process(
        &mut self,
        resolver: &dyn DeclarationResolver,
        sink: &mut dyn CodeSink,
    ) -> RosterResult<RunSummary> {
        if !self.guard.should_run() {
            return Ok(RunSummary::default());
        }

        let internal_variable = match self.options.internal_variable_name() {
            Some(variable_name) => {
                let cache = QualifierCache::at(self.cache_path(sink)?);
                collect_internal(
                    resolver,
                    sink,
                    &cache,
                    &self.options.package_name,
                    &variable_name,
                    &self.options.super_type,
                )?
            }
            None => None,
        };

        let external_variable = match self.options.external_variable_name() {
            Some(variable_name) => collect_external(
                resolver,
                sink,
                &self.options.package_name,
                &variable_name,
                &self.options.super_type,
                self.options.external_emits_even_if_empty(),
            )?,
            None => None,
        };

        let combined_variable = match &self.options.collect_all_instances_to {
            Some(variable_name) => Some(emit_combined(
                sink,
                &self.options.package_name,
                variable_name,
                &self.options.super_type,
                internal_variable.as_deref(),
                external_variable.as_deref(),
            )?),
            None => None,
        };

        Ok(RunSummary {
            internal_variable,
            external_variable,
            combined_variable,
        })
    }

    /// The durable cache location: the configured path, or one inferred
    /// from the generated root when it carries the marker component.
    fn cache_path(&self, sink: &dyn CodeSink) -> RosterResult<PathBuf> {
        if let Some(path) = &self.options.cache_path {
            return Ok(path.clone());
        }
        QualifierCache::locate_beside(sink.generated_root()).ok_or_else(|| {
            RosterError::Config(
                "cannot infer a durable cache location from the generated root; set cache-path"
                    .to_string(),
            )
        })
    }
}
