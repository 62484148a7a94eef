//! Engine options.
//!
//! Hosts hand the engine a flat map of option name to string value. This
//! module parses that map into [`CollectorOptions`] and derives the
//! generated variable names from it.

use std::collections::HashMap;
use std::path::PathBuf;

/// Suffix shared by every generated internal-collection variable. The
/// external aggregator recognizes upstream contributions by this suffix.
pub const INTERNAL_VARIABLE_SUFFIX: &str = "InternalInstances";

/// Suffix appended to `collect-all-instances-to` when no explicit external
/// variable name was configured.
pub const EXTERNAL_VARIABLE_SUFFIX: &str = "ExternalInstances";

pub const OPTION_PACKAGE_NAME: &str = "package-name";
pub const OPTION_SUPER_TYPE: &str = "super-type";
pub const OPTION_PROJECT_ID: &str = "project-id";
pub const OPTION_COLLECT_EXTERNAL: &str = "collect-external-instances-to";
pub const OPTION_COLLECT_ALL: &str = "collect-all-instances-to";
pub const OPTION_CACHE_PATH: &str = "cache-path";

/// Parsed engine options. Immutable for the run.
#[derive(Debug, Clone)]
pub struct CollectorOptions {
    /// Package the generated collections are declared in, and the package
    /// scanned for upstream contributions.
    pub package_name: String,
    /// Fully-qualified name of the marker type instances must implement.
    pub super_type: String,
    /// Enables the internal collection; the variable name is derived from
    /// this identifier.
    pub project_id: Option<String>,
    /// Explicit external variable name; presence forces emission even when
    /// no upstream contributions were found.
    pub collect_external_instances_to: Option<String>,
    /// Combined variable name; also implies an external collection when no
    /// explicit one was configured.
    pub collect_all_instances_to: Option<String>,
    /// Explicit durable cache file location, preferred over inferring one
    /// from the generated-output tree.
    pub cache_path: Option<PathBuf>,
}

impl CollectorOptions {
    /// Parse the host's option map. Returns `None` when `package-name` or
    /// `super-type` is missing; the engine treats that as a deliberate
    /// no-op, not an error.
    #[must_use]
    pub fn from_map(options: &HashMap<String, String>) -> Option<Self> {
        let package_name = options.get(OPTION_PACKAGE_NAME)?.clone();
        let super_type = options.get(OPTION_SUPER_TYPE)?.clone();
        Some(Self {
            package_name,
            super_type,
            project_id: options.get(OPTION_PROJECT_ID).cloned(),
            collect_external_instances_to: options.get(OPTION_COLLECT_EXTERNAL).cloned(),
            collect_all_instances_to: options.get(OPTION_COLLECT_ALL).cloned(),
            cache_path: options.get(OPTION_CACHE_PATH).map(PathBuf::from),
        })
    }

    /// Variable name for the internal collection, derived from
    /// `project-id`: `search-impl` becomes `searchImplInternalInstances`.
    #[must_use]
    pub fn internal_variable_name(&self) -> Option<String> {
        self.project_id.as_deref().map(derive_internal_variable_name)
    }

    /// Variable name for the external collection: the explicit option, or
    /// the name implied by `collect-all-instances-to`.
    #[must_use]
    pub fn external_variable_name(&self) -> Option<String> {
        if let Some(name) = &self.collect_external_instances_to {
            return Some(name.clone());
        }
        self.collect_all_instances_to
            .as_ref()
            .map(|name| format!("{name}{EXTERNAL_VARIABLE_SUFFIX}"))
    }

    /// An explicitly requested external collection is emitted even when
    /// empty; an implied one is not.
    #[must_use]
    pub fn external_emits_even_if_empty(&self) -> bool {
        self.collect_external_instances_to.is_some()
    }
}

/// `project-id` segments are split on `-` and `:`, lower-cased,
/// capitalized, concatenated, suffixed, and the first character lowered
/// again.
fn derive_internal_variable_name(project_id: &str) -> String {
    let camel: String = project_id.split(['-', ':']).map(capitalize).collect();
    lower_first(&format!("{camel}{INTERNAL_VARIABLE_SUFFIX}"))
}

fn capitalize(segment: &str) -> String {
    let lower = segment.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
