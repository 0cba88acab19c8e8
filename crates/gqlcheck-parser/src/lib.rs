//! A GraphQL parsing library for schema (SDL) documents and query
//! (executable) documents.
//!
//! Parsing is driven by [`GraphQLParser`], a single-lookahead recursive
//! descent parser that is generic over any
//! [`GraphQLTokenSource`](token_source::GraphQLTokenSource). The default token
//! source, [`StrGraphQLTokenSource`](token_source::StrGraphQLTokenSource),
//! lexes directly from a `&str`.
//!
//! Parsing stops at the first syntax error: every parse call yields either a
//! complete document or exactly one [`GraphQLSyntaxError`].

pub mod ast;
mod graphql_parser;
mod graphql_string_parsing_error;
mod graphql_syntax_error;
mod location;
mod source_position;
pub mod token;
pub mod token_source;

pub use graphql_parser::GraphQLParser;
pub use graphql_parser::parse_query;
pub use graphql_parser::parse_schema;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_syntax_error::GraphQLSyntaxError;
pub use location::Location;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
