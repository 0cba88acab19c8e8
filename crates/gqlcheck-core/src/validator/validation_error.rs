use gqlcheck_parser::Location;
use serde::Deserialize;
use serde::Serialize;

/// One problem found while validating a query document, tagged with the name
/// of the rule that reported it.
///
/// Serializes to the conventional GraphQL error shape plus the rule name:
/// `{"message": "...", "locations": [{"line": 1, "column": 3}], "rule": "..."}`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct ValidationError {
    pub message: String,
    pub locations: Vec<Location>,
    pub rule: String,
}

impl ValidationError {
    pub fn new(
        message: impl Into<String>,
        location: Location,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            locations: vec![location],
            rule: rule.into(),
        }
    }

    /// Formats this error on a single line, e.g.
    /// `2:5: Cannot query field "nope" on type "Query".`
    pub fn format_oneline(&self) -> String {
        match self.locations.first() {
            Some(location) => format!("{location}: {}", self.message),
            None => self.message.clone(),
        }
    }
}
