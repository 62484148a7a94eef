//! External collection generation.
//!
//! Each upstream module publishes its internal collection under a variable
//! whose simple name carries [`INTERNAL_VARIABLE_SUFFIX`]; once compiled,
//! those variables surface as binary declarations in the target package.
//! Unioning them assembles a multi-module registry without any module
//! knowing about its siblings.

use crate::codegen::{CollectionValue, GeneratedCollection};
use crate::options::INTERNAL_VARIABLE_SUFFIX;
use crate::types::RosterResult;
use roster_protocol::{CodeSink, DeclarationResolver};

/// Union the internal collections contributed by upstream modules into one
/// generated file.
///
/// Returns `None` without writing when nothing matched and
/// `emit_even_if_empty` is false; otherwise the generated value is the
/// union, or the explicit empty set when the union is empty.
pub fn collect_external(
    resolver: &dyn DeclarationResolver,
    sink: &mut dyn CodeSink,
    package_name: &str,
    variable_name: &str,
    super_type: &str,
    emit_even_if_empty: bool,
) -> RosterResult<Option<String>> {
    let upstream: Vec<String> = resolver
        .declarations_in_package(package_name)
        .into_iter()
        .filter(|declaration| !declaration.has_source())
        .map(|declaration| declaration.simple_name().to_string())
        .filter(|name| name.ends_with(INTERNAL_VARIABLE_SUFFIX))
        .collect();

    if upstream.is_empty() && !emit_even_if_empty {
        return Ok(None);
    }

    let value = if upstream.is_empty() {
        CollectionValue::Empty {
            marker_type: super_type.to_string(),
        }
    } else {
        CollectionValue::Union(upstream)
    };
    let collection = GeneratedCollection {
        package_name: package_name.to_string(),
        variable_name: variable_name.to_string(),
        value,
    };
    sink.create_file(package_name, variable_name, &collection.render())?;
    Ok(Some(variable_name.to_string()))
}
