use serde::Deserialize;
use serde::Serialize;

/// A 1-based line/column pair identifying a point in GraphQL source text.
///
/// This is the user-facing position format attached to syntax errors, AST
/// nodes, and validation errors. Internally, lexers track 0-based
/// [`SourcePosition`](crate::SourcePosition)s and convert with
/// [`SourcePosition::to_location()`](crate::SourcePosition::to_location).
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
