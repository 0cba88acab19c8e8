use crate::Location;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;

/// A GraphQL token with location (span) information.
///
/// Insignificant input (whitespace, commas, comments) never produces tokens;
/// lexers skip it before emitting the next significant token.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    /// The kind of token (including Error for lexer errors).
    pub kind: GraphQLTokenKind<'src>,

    /// The source location span of this token.
    pub span: GraphQLTokenSpan,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(kind: GraphQLTokenKind<'src>, span: GraphQLTokenSpan) -> Self {
        Self { kind, span }
    }

    /// The 1-based location of the first character of this token.
    pub fn location(&self) -> Location {
        self.span.start.to_location()
    }

    /// Returns `true` if this is a `Name` token whose text is exactly
    /// `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(&self.kind, GraphQLTokenKind::Name(name) if name == keyword)
    }
}
