use crate::Schema;
use crate::validator::ValidationError;
use gqlcheck_parser::Location;
use gqlcheck_parser::ast::QueryDocument;

/// What a field visitor sees of the ongoing validation: the schema and
/// document under validation, and the error list it may append to.
#[derive(Debug)]
pub struct ValidationContext<'a> {
    schema: &'a Schema,
    document: &'a QueryDocument,
    current_rule: &'a str,
    errors: Vec<ValidationError>,
}

impl<'a> ValidationContext<'a> {
    pub(crate) fn new(schema: &'a Schema, document: &'a QueryDocument) -> Self {
        Self {
            schema,
            document,
            current_rule: "",
            errors: Vec::new(),
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn document(&self) -> &'a QueryDocument {
        self.document
    }

    /// Name of the rule whose visitor is currently running.
    pub fn rule(&self) -> &'a str {
        self.current_rule
    }

    /// Records an error on behalf of the current rule.
    pub fn report(&mut self, message: impl Into<String>, location: Location) {
        self.errors.push(ValidationError::new(message, location, self.current_rule));
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub(crate) fn set_rule(&mut self, rule: &'a str) {
        self.current_rule = rule;
    }

    pub(crate) fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}
