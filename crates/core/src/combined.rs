//! Combined collection emission.

use crate::codegen::{CollectionValue, GeneratedCollection};
use crate::types::RosterResult;
use roster_protocol::CodeSink;

/// Emit the one stable symbol application code references: the union of
/// whichever of the internal and external collections resolved, internal
/// first. Exactly one file is produced regardless of branch, so downstream
/// code can always reference the combined name.
pub fn emit_combined(
    sink: &mut dyn CodeSink,
    package_name: &str,
    variable_name: &str,
    super_type: &str,
    internal_variable: Option<&str>,
    external_variable: Option<&str>,
) -> RosterResult<String> {
    let resolved: Vec<String> = [internal_variable, external_variable]
        .into_iter()
        .flatten()
        .map(String::from)
        .collect();

    let value = if resolved.is_empty() {
        CollectionValue::Empty {
            marker_type: super_type.to_string(),
        }
    } else {
        CollectionValue::Union(resolved)
    };
    let collection = GeneratedCollection {
        package_name: package_name.to_string(),
        variable_name: variable_name.to_string(),
        value,
    };
    sink.create_file(package_name, variable_name, &collection.render())?;
    Ok(variable_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::FsSink;
    use std::fs;
    use std::path::Path;

    const MARKER: &str = "com.app.Feature";

    fn run(dir: &Path, internal: Option<&str>, external: Option<&str>) -> String {
        let mut sink = FsSink::new(dir.join("out"));
        let name = emit_combined(&mut sink, "com.app", "allInstances", MARKER, internal, external)
            .unwrap();
        assert_eq!(name, "allInstances");
        fs::read_to_string(dir.join("out/com/app/allInstances.kt")).unwrap()
    }

    #[test]
    fn unions_internal_before_external() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            run(
                dir.path(),
                Some("appInternalInstances"),
                Some("allInstancesExternalInstances")
            ),
            "package com.app\n\nval allInstances = appInternalInstances + allInstancesExternalInstances\n"
        );
    }

    #[test]
    fn a_single_resolved_collection_stands_alone() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            run(dir.path(), None, Some("externalInstances")),
            "package com.app\n\nval allInstances = externalInstances\n"
        );
    }

    #[test]
    fn neither_resolved_yields_the_explicit_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            run(dir.path(), None, None),
            "package com.app\n\nval allInstances = emptySetOf<com.app.Feature>()\n"
        );
    }
}
