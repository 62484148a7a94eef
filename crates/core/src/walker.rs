//! Declaration graph traversal.

use roster_protocol::{Declaration, SourceFile};
use std::collections::HashSet;
use std::path::Path;

/// Visit every class-like declaration reachable from `files`.
///
/// Each file is visited exactly once, keyed by its path, so a host that
/// presents the same file twice in one invocation does not produce
/// duplicate callbacks. The callback fires for `Class` and `Singleton`
/// declarations at any nesting depth; container kinds are recursed into,
/// leaf kinds terminate the walk locally.
pub fn visit_class_likes<F>(files: &[SourceFile], mut on_class_like: F)
where
    F: FnMut(&Declaration),
{
    let mut visited: HashSet<&Path> = HashSet::new();
    for file in files {
        if !visited.insert(file.path.as_path()) {
            continue;
        }
        for declaration in &file.declarations {
            visit_declaration(declaration, &mut on_class_like);
        }
    }
}

fn visit_declaration<F>(declaration: &Declaration, on_class_like: &mut F)
where
    F: FnMut(&Declaration),
{
    if declaration.kind.is_class_like() {
        on_class_like(declaration);
    }
    if declaration.kind.is_type_container() {
        for nested in &declaration.nested {
            visit_declaration(nested, on_class_like);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_protocol::{DeclarationKind, Visibility};
    use std::path::PathBuf;

    fn declaration(name: &str, kind: DeclarationKind) -> Declaration {
        Declaration {
            qualified_name: name.to_string(),
            kind,
            visibility: Visibility::Public,
            is_abstract: false,
            supertypes: Vec::new(),
            containing_file: Some(PathBuf::from("src/Main.kt")),
            nested: Vec::new(),
        }
    }

    fn collect_names(files: &[SourceFile]) -> Vec<String> {
        let mut names = Vec::new();
        visit_class_likes(files, |found| names.push(found.qualified_name.clone()));
        names
    }

    #[test]
    fn visits_nested_classes_inside_containers() {
        let mut outer = declaration("com.app.Outer", DeclarationKind::Class);
        outer
            .nested
            .push(declaration("com.app.Outer.Inner", DeclarationKind::Class));
        let mut holder = declaration("com.app.Api", DeclarationKind::Interface);
        holder
            .nested
            .push(declaration("com.app.Api.Default", DeclarationKind::Singleton));

        let files = [SourceFile {
            path: PathBuf::from("src/Main.kt"),
            declarations: vec![outer, holder],
        }];

        assert_eq!(
            collect_names(&files),
            vec!["com.app.Outer", "com.app.Outer.Inner", "com.app.Api.Default"]
        );
    }

    #[test]
    fn leaf_kinds_terminate_the_walk() {
        let mut function = declaration("com.app.build", DeclarationKind::Function);
        // Local classes live below a leaf kind and are never collected.
        function
            .nested
            .push(declaration("com.app.build.Local", DeclarationKind::Class));

        let files = [SourceFile {
            path: PathBuf::from("src/Main.kt"),
            declarations: vec![
                function,
                declaration("com.app.title", DeclarationKind::Property),
                declaration("com.app.Alias", DeclarationKind::TypeAlias),
            ],
        }];

        assert!(collect_names(&files).is_empty());
    }

    #[test]
    fn duplicate_files_are_visited_once() {
        let file = SourceFile {
            path: PathBuf::from("src/Main.kt"),
            declarations: vec![declaration("com.app.Foo", DeclarationKind::Class)],
        };
        let files = [file.clone(), file];

        assert_eq!(collect_names(&files), vec!["com.app.Foo"]);
    }
}
