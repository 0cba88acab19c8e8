use crate::Location;
use serde::Deserialize;
use serde::Serialize;

/// The single syntax error produced by a failed parse.
///
/// Parsing is first-error-wins: once a [`GraphQLParser`](crate::GraphQLParser)
/// records an error, every later parse step is a no-op, so a parse call never
/// reports more than one of these.
///
/// Serializes to the conventional GraphQL error shape:
/// `{"message": "...", "locations": [{"line": 1, "column": 6}]}`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLSyntaxError {
    message: String,
    locations: Vec<Location>,
}

impl GraphQLSyntaxError {
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            locations: vec![location],
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the locations this error points at (always exactly one for
    /// parser-produced errors).
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Formats this error on a single line, e.g.
    /// `1:6: Expected Name, found {`.
    pub fn format_oneline(&self) -> String {
        match self.locations.first() {
            Some(location) => format!("{location}: {}", self.message),
            None => self.message.clone(),
        }
    }
}
