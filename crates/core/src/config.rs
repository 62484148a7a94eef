//! Collector configuration file model.
//!
//! Hosts that drive the engine through the CLI describe their options in a
//! `roster.yml` file whose keys match the engine's option names exactly.
//! The file lowers into the option map; the engine only ever sees the map.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::options::{
    OPTION_CACHE_PATH, OPTION_COLLECT_ALL, OPTION_COLLECT_EXTERNAL, OPTION_PACKAGE_NAME,
    OPTION_PROJECT_ID, OPTION_SUPER_TYPE,
};
use crate::types::RosterResult;

#[derive(Deserialize, Serialize, JsonSchema, Clone, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CollectorConfig {
    /// Package the generated collections are declared in.
    pub package_name: Option<String>,
    /// Fully-qualified marker type name.
    pub super_type: Option<String>,
    /// Enables the internal collection; the generated variable name is
    /// derived from this identifier.
    pub project_id: Option<String>,
    /// External collection variable name; forces emission even when empty.
    pub collect_external_instances_to: Option<String>,
    /// Combined collection variable name.
    pub collect_all_instances_to: Option<String>,
    /// Durable cache file location.
    pub cache_path: Option<PathBuf>,
}

pub fn parse_collector_config(yaml_str: &str) -> RosterResult<CollectorConfig> {
    let config: CollectorConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

impl CollectorConfig {
    /// Lower into the option map the engine consumes.
    #[must_use]
    pub fn into_option_map(self) -> HashMap<String, String> {
        let mut options = HashMap::new();
        let mut insert = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                options.insert(key.to_string(), value);
            }
        };
        insert(OPTION_PACKAGE_NAME, self.package_name);
        insert(OPTION_SUPER_TYPE, self.super_type);
        insert(OPTION_PROJECT_ID, self.project_id);
        insert(OPTION_COLLECT_EXTERNAL, self.collect_external_instances_to);
        insert(OPTION_COLLECT_ALL, self.collect_all_instances_to);
        insert(
            OPTION_CACHE_PATH,
            self.cache_path.map(|path| path.display().to_string()),
        );
        options
    }
}
