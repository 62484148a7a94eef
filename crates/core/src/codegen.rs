//! Rendering of generated collection files.
//!
//! Each output file declares `package <name>` followed by one top-level
//! immutable binding. A collection is always rendered in full or not at
//! all; there is no partial update.

use roster_protocol::{Declaration, DeclarationKind};

/// One member of a literal collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberExpression {
    qualified_name: String,
    kind: DeclarationKind,
}

impl MemberExpression {
    #[must_use]
    pub fn for_declaration(declaration: &Declaration) -> Self {
        Self {
            qualified_name: declaration.qualified_name.clone(),
            kind: declaration.kind,
        }
    }

    /// Classes are instantiated; singletons are referenced by name.
    fn render(&self) -> String {
        match self.kind {
            DeclarationKind::Class => format!("{}()", self.qualified_name),
            _ => self.qualified_name.clone(),
        }
    }
}

/// The value a generated collection binds to.
#[derive(Debug, Clone)]
pub enum CollectionValue {
    /// A literal set listing explicit member expressions.
    Literal {
        marker_type: String,
        members: Vec<MemberExpression>,
    },
    /// A union of named collections, rendered in the given order.
    Union(Vec<String>),
    /// The explicit empty set of the marker type.
    Empty { marker_type: String },
}

/// A generated source file declaring one collection variable.
#[derive(Debug, Clone)]
pub struct GeneratedCollection {
    pub package_name: String,
    pub variable_name: String,
    pub value: CollectionValue,
}

impl GeneratedCollection {
    /// Render the complete file contents. Byte-stable for identical
    /// inputs, which is what makes repeated runs idempotent.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "package {}\n\nval {} = {}\n",
            self.package_name,
            self.variable_name,
            self.render_value()
        )
    }

    fn render_value(&self) -> String {
        match &self.value {
            CollectionValue::Literal {
                marker_type,
                members,
            } => {
                let body = members
                    .iter()
                    .map(|member| format!("    {}", member.render()))
                    .collect::<Vec<_>>()
                    .join(",\n");
                format!("setOf<{marker_type}>(\n{body}\n)")
            }
            CollectionValue::Union(names) => names.join(" + "),
            CollectionValue::Empty { marker_type } => format!("emptySetOf<{marker_type}>()"),
        }
    }
}
