//! Collection eligibility.

use roster_protocol::{Declaration, DeclarationResolver, Visibility};
use std::collections::HashSet;

/// Whether `declaration` qualifies for collection: public, concrete,
/// class-like, and assignable to the marker type. Pure; no side effects.
#[must_use]
pub fn is_collectible(
    declaration: &Declaration,
    marker_type: &str,
    resolver: &dyn DeclarationResolver,
) -> bool {
    declaration.visibility == Visibility::Public
        && !declaration.is_abstract
        && declaration.kind.is_class_like()
        && implements_marker(declaration, marker_type, resolver)
}

/// Whether the marker type appears among the declaration's realized
/// supertypes, directly or transitively. Generic instantiations are
/// compared by erased name, so `Registry<String>` satisfies a
/// `Registry<T>` marker. Unresolvable links are non-matches, never errors;
/// incremental builds routinely show partially-resolved graphs.
#[must_use]
pub fn implements_marker(
    declaration: &Declaration,
    marker_type: &str,
    resolver: &dyn DeclarationResolver,
) -> bool {
    let marker = erase_type_arguments(marker_type);
    if erase_type_arguments(&declaration.qualified_name) == marker {
        return true;
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut pending: Vec<String> = declaration
        .supertypes
        .iter()
        .map(|name| erase_type_arguments(name).to_string())
        .collect();

    while let Some(name) = pending.pop() {
        if !seen.insert(name.clone()) {
            continue;
        }
        if name == marker {
            return true;
        }
        if let Some(supertype) = resolver.find_declaration(&name) {
            pending.extend(
                supertype
                    .supertypes
                    .iter()
                    .map(|transitive| erase_type_arguments(transitive).to_string()),
            );
        }
    }
    false
}

fn erase_type_arguments(name: &str) -> &str {
    name.split_once('<')
        .map_or(name, |(erased, _)| erased.trim_end())
}
