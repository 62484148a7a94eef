//! Internal collection generation.

use crate::cache::QualifierCache;
use crate::codegen::{CollectionValue, GeneratedCollection, MemberExpression};
use crate::eligibility::is_collectible;
use crate::types::RosterResult;
use crate::walker::visit_class_likes;
use roster_protocol::{CodeSink, Declaration, DeclarationResolver};
use std::collections::HashSet;
use std::path::PathBuf;

/// Collect every eligible declaration in the presented source files, merge
/// with the reconciled cache, and emit the internal collection.
///
/// Returns the variable name when a file was emitted; `None` when the
/// marker type did not resolve (the cache is left untouched) or when the
/// final candidate set was empty (nothing is emitted, but the cache is
/// still rewritten, so an empty-then-nonempty sequence of runs stays
/// consistent).
pub fn collect_internal(
    resolver: &dyn DeclarationResolver,
    sink: &mut dyn CodeSink,
    cache: &QualifierCache,
    package_name: &str,
    variable_name: &str,
    super_type: &str,
) -> RosterResult<Option<String>> {
    if resolver.find_declaration(super_type).is_none() {
        return Ok(None);
    }

    let mut candidates: Vec<Declaration> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    visit_class_likes(resolver.source_files(), |declaration| {
        if is_collectible(declaration, super_type, resolver)
            && seen.insert(declaration.qualified_name.clone())
        {
            candidates.push(declaration.clone());
        }
    });

    cache.reconcile(&mut candidates, resolver)?;

    let names: Vec<String> = candidates
        .iter()
        .map(|declaration| declaration.qualified_name.clone())
        .collect();

    if candidates.is_empty() {
        cache.save(&names)?;
        return Ok(None);
    }

    let collection = GeneratedCollection {
        package_name: package_name.to_string(),
        variable_name: variable_name.to_string(),
        value: CollectionValue::Literal {
            marker_type: super_type.to_string(),
            members: candidates.iter().map(MemberExpression::for_declaration).collect(),
        },
    };
    sink.create_file(package_name, variable_name, &collection.render())?;

    // Candidates restored out of binary dependencies have no file to
    // associate.
    let mut sources: Vec<PathBuf> = Vec::new();
    for declaration in &candidates {
        if let Some(file) = &declaration.containing_file {
            if !sources.contains(file) {
                sources.push(file.clone());
            }
        }
    }
    sink.associate(&sources, package_name, variable_name)?;

    cache.save(&names)?;
    Ok(Some(variable_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CACHE_FILE_NAME;
    use crate::sink::FsSink;
    use roster_protocol::{DeclarationGraph, DeclarationKind, SourceFile, Visibility};
    use std::fs;
    use std::path::Path;

    const MARKER: &str = "com.app.Feature";

    fn marker() -> Declaration {
        Declaration {
            qualified_name: MARKER.to_string(),
            kind: DeclarationKind::Interface,
            visibility: Visibility::Public,
            is_abstract: true,
            supertypes: Vec::new(),
            containing_file: Some(PathBuf::from("src/Feature.kt")),
            nested: Vec::new(),
        }
    }

    fn implementor(name: &str, file: &str) -> Declaration {
        Declaration {
            qualified_name: name.to_string(),
            kind: DeclarationKind::Class,
            visibility: Visibility::Public,
            is_abstract: false,
            supertypes: vec![MARKER.to_string()],
            containing_file: Some(PathBuf::from(file)),
            nested: Vec::new(),
        }
    }

    fn file(path: &str, declarations: Vec<Declaration>) -> SourceFile {
        SourceFile {
            path: PathBuf::from(path),
            declarations,
        }
    }

    fn run(graph: &DeclarationGraph, dir: &Path) -> (RosterResult<Option<String>>, FsSink) {
        let mut sink = FsSink::new(dir.join("out"));
        let cache = QualifierCache::at(dir.join(CACHE_FILE_NAME));
        let result = collect_internal(
            graph,
            &mut sink,
            &cache,
            "com.app",
            "appInternalInstances",
            MARKER,
        );
        (result, sink)
    }

    #[test]
    fn unresolvable_marker_skips_without_touching_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let graph = DeclarationGraph {
            files: vec![file("src/A.kt", vec![implementor("com.app.Foo", "src/A.kt")])],
            binary_declarations: Vec::new(),
        };

        let (result, _) = run(&graph, dir.path());
        assert_eq!(result.unwrap(), None);
        assert!(!dir.path().join(CACHE_FILE_NAME).exists());
    }

    #[test]
    fn empty_candidate_set_saves_cache_and_emits_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let graph = DeclarationGraph {
            files: vec![file("src/Feature.kt", vec![marker()])],
            binary_declarations: Vec::new(),
        };

        let (result, _) = run(&graph, dir.path());
        assert_eq!(result.unwrap(), None);
        assert!(!dir.path().join("out/com/app/appInternalInstances.kt").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join(CACHE_FILE_NAME)).unwrap(),
            ""
        );
    }

    #[test]
    fn emits_associates_and_caches_discovered_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let graph = DeclarationGraph {
            files: vec![
                file("src/Feature.kt", vec![marker()]),
                file(
                    "src/A.kt",
                    vec![
                        implementor("com.app.Foo", "src/A.kt"),
                        implementor("com.app.Baz", "src/A.kt"),
                    ],
                ),
                file("src/B.kt", vec![implementor("com.app.Bar", "src/B.kt")]),
            ],
            binary_declarations: Vec::new(),
        };

        let (result, sink) = run(&graph, dir.path());
        assert_eq!(result.unwrap().as_deref(), Some("appInternalInstances"));

        let generated = fs::read_to_string(
            dir.path().join("out/com/app/appInternalInstances.kt"),
        )
        .unwrap();
        assert!(generated.contains("com.app.Foo()"));
        assert!(generated.contains("com.app.Baz()"));
        assert!(generated.contains("com.app.Bar()"));

        assert_eq!(
            sink.associations()["com.app.appInternalInstances"],
            vec![PathBuf::from("src/A.kt"), PathBuf::from("src/B.kt")]
        );
        assert_eq!(
            fs::read_to_string(dir.path().join(CACHE_FILE_NAME)).unwrap(),
            "com.app.Foo\ncom.app.Baz\ncom.app.Bar"
        );
    }
}
