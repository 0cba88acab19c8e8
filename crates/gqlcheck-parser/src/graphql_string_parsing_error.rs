/// Why a string token's raw text could not be turned into its value.
///
/// Produced by
/// [`GraphQLTokenKind::parse_string_value()`](crate::token::GraphQLTokenKind::parse_string_value)
/// and surfaced by the parser as a syntax error at the string's token.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GraphQLStringParsingError {
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),

    /// The raw text lacks its closing quote(s).
    #[error("Unterminated string: missing closing quote")]
    UnterminatedString,
}
