//! Various test utils.

use crate::SourcePosition;
use crate::ast::Definition;
use crate::ast::QueryDocument;
use crate::ast::SchemaDocument;
use crate::ast::Selection;
use crate::ast::Value;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;

/// Creates a mock token with the given kind, positioned at `col` on the
/// first line.
pub fn mock_token_at(kind: GraphQLTokenKind<'static>, col: usize) -> GraphQLToken<'static> {
    let pos = SourcePosition::new(0, col, col);
    GraphQLToken::new(kind, GraphQLTokenSpan::new(pos.clone(), pos))
}

/// Creates a mock token with the given kind and a zeroed span.
pub fn mock_token(kind: GraphQLTokenKind<'static>) -> GraphQLToken<'static> {
    mock_token_at(kind, 0)
}

pub fn mock_name_token(name: &str) -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::name_owned(name.to_string()))
}

/// A mock token source that produces tokens from a Vec.
///
/// Uses `'static` lifetime since mock tokens use owned strings.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<GraphQLToken<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<GraphQLToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = GraphQLToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Parses a schema document, panicking with the syntax error on failure.
pub(super) fn parse_schema_ok(source: &str) -> SchemaDocument {
    match crate::parse_schema(source) {
        Ok(doc) => doc,
        Err(err) => panic!("expected `{source}` to parse, got: {err}"),
    }
}

/// Parses a query document, panicking with the syntax error on failure.
pub(super) fn parse_query_ok(source: &str) -> QueryDocument {
    match crate::parse_query(source) {
        Ok(doc) => doc,
        Err(err) => panic!("expected `{source}` to parse, got: {err}"),
    }
}

/// Parses a schema document that must fail, returning `(message, line, col)`.
pub(super) fn schema_error(source: &str) -> (String, usize, usize) {
    match crate::parse_schema(source) {
        Ok(doc) => panic!("expected `{source}` to fail, got: {doc:?}"),
        Err(err) => {
            let location = err.locations()[0];
            (err.message().to_string(), location.line, location.column)
        },
    }
}

/// Parses a query document that must fail, returning `(message, line, col)`.
pub(super) fn query_error(source: &str) -> (String, usize, usize) {
    match crate::parse_query(source) {
        Ok(doc) => panic!("expected `{source}` to fail, got: {doc:?}"),
        Err(err) => {
            let location = err.locations()[0];
            (err.message().to_string(), location.line, location.column)
        },
    }
}

/// Returns the only definition of a single-definition schema document.
pub(super) fn single_definition(source: &str) -> Definition {
    let mut doc = parse_schema_ok(source);
    assert_eq!(doc.definitions.len(), 1, "expected one definition in `{source}`");
    doc.definitions.remove(0)
}

/// Returns the value of the first argument of the first field of the first
/// operation in `source`.
pub(super) fn first_argument_value(source: &str) -> Value {
    let doc = parse_query_ok(source);
    match &doc.operations[0].selection_set[0] {
        Selection::Field(field) => field.arguments[0].value.clone(),
        other => panic!("expected a field, got: {other:?}"),
    }
}
