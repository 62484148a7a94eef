//! Core types for the roster host protocol.
//!
//! This module contains the data structures the collector engine reads from
//! the host build system:
//! - [`DeclarationKind`] - The tagged union of symbol kinds
//! - [`Visibility`] - Declared visibility of a symbol
//! - [`Declaration`] - One class-like or member symbol
//! - [`SourceFile`] - A source file and its top-level declarations

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The kind of a symbol in the declaration graph.
///
/// The collector only ever *collects* [`Class`](Self::Class) and
/// [`Singleton`](Self::Singleton) declarations. The remaining kinds exist so
/// hosts can export their full declaration tree unchanged; the walker treats
/// them as no-ops while still recursing into kinds that can contain nested
/// types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationKind {
    /// An instantiable class. Collected members of this kind are emitted
    /// with constructor-call syntax (`com.app.Foo()`).
    Class,
    /// A singleton value (e.g. a Kotlin `object`). Collected members of
    /// this kind are referenced by name, never instantiated.
    Singleton,
    /// An interface. Never collected, but may contain nested types.
    Interface,
    /// An annotation class.
    Annotation,
    /// A function declaration.
    Function,
    /// A property or top-level value declaration. Generated collection
    /// variables from upstream modules appear as binary declarations of
    /// this kind.
    Property,
    /// A type alias.
    TypeAlias,
}

impl DeclarationKind {
    /// Whether declarations of this kind are candidates for collection.
    #[must_use]
    pub const fn is_class_like(&self) -> bool {
        matches!(self, Self::Class | Self::Singleton)
    }

    /// Whether declarations of this kind can hold nested type declarations.
    #[must_use]
    pub const fn is_type_container(&self) -> bool {
        matches!(self, Self::Class | Self::Singleton | Self::Interface)
    }
}

/// Declared visibility of a symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

/// One symbol reported by the host's resolver.
///
/// Owned by the host; the engine only reads it and records derived facts
/// (qualified names in the cache, containing files in associations).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Declaration {
    /// Fully-qualified name, dot-separated (`com.app.features.SearchFeature`).
    pub qualified_name: String,

    /// Symbol kind; drives both collection and traversal.
    pub kind: DeclarationKind,

    /// Declared visibility. Defaults to public when a host omits it.
    #[serde(default)]
    pub visibility: Visibility,

    /// Whether the declaration is abstract. Abstract declarations are never
    /// collected.
    #[serde(default)]
    pub is_abstract: bool,

    /// Fully-qualified names of the direct supertypes, possibly carrying
    /// generic arguments (`com.app.Registry<String>`).
    #[serde(default)]
    pub supertypes: Vec<String>,

    /// Path of the source file currently being compiled that contains this
    /// declaration. `None` for declarations resolved out of already-compiled
    /// (binary) dependencies.
    #[serde(default)]
    pub containing_file: Option<PathBuf>,

    /// Declarations nested inside this one.
    #[serde(default)]
    pub nested: Vec<Declaration>,
}

impl Declaration {
    /// The last segment of the qualified name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }

    /// Everything before the last segment of the qualified name, or the
    /// empty string for an unqualified name.
    #[must_use]
    pub fn package_name(&self) -> &str {
        match self.qualified_name.rsplit_once('.') {
            Some((package, _)) => package,
            None => "",
        }
    }

    /// Whether the declaration originates from source being compiled in
    /// this invocation, as opposed to a binary dependency.
    #[must_use]
    pub fn has_source(&self) -> bool {
        self.containing_file.is_some()
    }
}

/// A source file presented to the collector, with its top-level
/// declarations.
///
/// The path doubles as the file's stable identity: the walker's visited set
/// and the generated-file associations are both keyed on it, so hosts should
/// export canonical paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: PathBuf,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}
