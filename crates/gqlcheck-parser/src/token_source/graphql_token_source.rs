use crate::token::GraphQLToken;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// [`GraphQLToken`]).
///
/// This is the parser's only contract with a lexer: "read the next token".
/// [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource) is a
/// lexer over `&str`, but any iterator of tokens can drive a
/// [`GraphQLParser`](crate::GraphQLParser).
///
/// Lexers are responsible for:
/// - Skipping whitespace, commas, and comments
/// - Reporting positions for every token (see
///   [`SourcePosition`](crate::SourcePosition))
/// - Emitting [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error)
///   for lexer errors
/// - Emitting a final token with
///   [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof)
///
/// A source that simply stops yielding is treated as if it had produced
/// `Eof`.
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
