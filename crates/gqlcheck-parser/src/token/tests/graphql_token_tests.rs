use crate::Location;
use crate::SourcePosition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;

fn token_at(kind: GraphQLTokenKind<'static>, line: usize, col: usize) -> GraphQLToken<'static> {
    let start = SourcePosition::new(line, col, 0);
    GraphQLToken::new(kind, GraphQLTokenSpan::new(start.clone(), start))
}

#[test]
fn location_is_one_based_start() {
    let token = token_at(GraphQLTokenKind::Bang, 4, 0);

    assert_eq!(token.location(), Location::new(5, 1));
}

#[test]
fn is_keyword_matches_exact_name_text() {
    let token = token_at(GraphQLTokenKind::name_borrowed("query"), 0, 0);

    assert!(token.is_keyword("query"));
    assert!(!token.is_keyword("Query"));
    assert!(!token.is_keyword("quer"));
}

/// Only `Name` tokens can be keywords, even if another token's text matches.
#[test]
fn is_keyword_ignores_non_name_tokens() {
    let token = token_at(GraphQLTokenKind::StringValue("\"query\"".into()), 0, 0);

    assert!(!token.is_keyword("query"));
    assert!(!token_at(GraphQLTokenKind::Eof, 0, 0).is_keyword(""));
}
