use serde::Deserialize;
use serde::Serialize;

/// A GraphQL
/// [type reference](https://spec.graphql.org/October2021/#sec-Type-References).
///
/// Wrappers nest arbitrarily (`[[String!]]!`), and the innermost type is
/// always `Named`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum TypeAnnotation {
    Named(String),
    List(Box<TypeAnnotation>),
    NonNull(Box<TypeAnnotation>),
}

impl Default for TypeAnnotation {
    fn default() -> Self {
        TypeAnnotation::Named(String::new())
    }
}

impl TypeAnnotation {
    pub fn named(name: impl Into<String>) -> Self {
        TypeAnnotation::Named(name.into())
    }

    /// The name of the innermost named type (`String` for `[[String!]]!`).
    pub fn name(&self) -> &str {
        match self {
            TypeAnnotation::Named(name) => name,
            TypeAnnotation::List(inner) | TypeAnnotation::NonNull(inner) => inner.name(),
        }
    }

    /// Whether the outermost wrapper is `!`.
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeAnnotation::NonNull(_))
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeAnnotation::Named(name) => f.write_str(name),
            TypeAnnotation::List(inner) => write!(f, "[{inner}]"),
            TypeAnnotation::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
