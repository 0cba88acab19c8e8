//! This module provides the core token types produced by GraphQL lexers and
//! consumed by the parser.

mod graphql_token;
mod graphql_token_kind;
mod graphql_token_span;

pub use graphql_token::GraphQLToken;
pub use graphql_token_kind::GraphQLTokenKind;
pub use graphql_token_span::GraphQLTokenSpan;

#[cfg(test)]
mod tests;
