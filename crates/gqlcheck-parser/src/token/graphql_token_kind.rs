use crate::GraphQLStringParsingError;
use std::borrow::Cow;

/// The kind of a GraphQL token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`) store only the raw
/// source text.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: `StrGraphQLTokenSource`
/// borrows string slices directly from the source text using
/// `Cow::Borrowed`, while other token sources may hand out `Cow::Owned`.
///
/// # Keywords
///
/// `true`, `false`, `null` and every grammar keyword (`type`, `query`, `on`,
/// ...) are plain `Name` tokens. The parser decides from context whether a
/// name acts as a keyword.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (e.g.
/// `IntValue("-123")`), not as separate minus and number tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// A GraphQL name/identifier.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including optional negative sign
    /// (e.g. `"-123"`, `"0"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, including optional negative sign
    /// (e.g. `"-1.23e-4"`, `"0.5"`).
    FloatValue(Cow<'src, str>),

    /// Raw source text of a string or block string literal, including quotes
    /// (e.g. `"\"hello\\nworld\""`, `"\"\"\"block\"\"\""`).
    ///
    /// Use `parse_string_value()` to get the cooked content.
    StringValue(Cow<'src, str>),

    /// End of input.
    Eof,

    /// A lexer error. The parser turns the first one it sees into its
    /// syntax error.
    Error {
        /// A human-readable error message.
        message: String,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    /// Create a `Name` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    /// Create a `Name` token from an owned `String`.
    #[inline]
    pub fn name_owned(s: String) -> Self {
        GraphQLTokenKind::Name(Cow::Owned(s))
    }

    /// Create an `Error` token kind.
    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
        }
    }

    /// Returns the source text of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Ampersand => Some("&"),
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Error { .. } => None,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns `true` if `self` and `other` are the same kind of token,
    /// ignoring any carried text.
    pub fn is_same_kind(&self, other: &GraphQLTokenKind<'_>) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// The name of this token's kind, as used in "Expected ..." messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            GraphQLTokenKind::Name(_) => "Name",
            GraphQLTokenKind::IntValue(_) => "Int",
            GraphQLTokenKind::FloatValue(_) => "Float",
            GraphQLTokenKind::StringValue(raw) if is_block_string(raw) => "BlockString",
            GraphQLTokenKind::StringValue(_) => "String",
            GraphQLTokenKind::Eof => "<EOF>",
            GraphQLTokenKind::Error { .. } => "<error>",
            punctuator => punctuator.as_punctuator_str().unwrap_or("<unknown>"),
        }
    }

    /// A description of this specific token, as used in "found ..." and
    /// "Unexpected ..." messages (e.g. `Name "foo"`, `{`, `<EOF>`).
    pub fn describe(&self) -> String {
        match self {
            GraphQLTokenKind::Name(text)
            | GraphQLTokenKind::IntValue(text)
            | GraphQLTokenKind::FloatValue(text) => {
                format!("{} \"{text}\"", self.kind_name())
            },
            GraphQLTokenKind::StringValue(_) => self.kind_name().to_string(),
            GraphQLTokenKind::Error { message } => message.clone(),
            other => other.kind_name().to_string(),
        }
    }

    /// Returns `true` for a `StringValue` written with triple quotes.
    pub fn is_block_string(&self) -> bool {
        matches!(self, GraphQLTokenKind::StringValue(raw) if is_block_string(raw))
    }

    /// Parse a `StringValue`'s raw text to unescaped content.
    ///
    /// - For single-line strings (`"..."`): processes `\n`, `\r`, `\t`, `\\`,
    ///   `\"`, `\/`, `\b`, `\f`, `\uXXXX` (fixed 4-digit), and `\u{X...}`
    ///   (variable length).
    /// - For block strings (`"""..."""`): applies the indentation stripping
    ///   algorithm, then processes the `\"""` escape only.
    ///
    /// Returns `None` if this is not a `StringValue`.
    pub fn parse_string_value(&self) -> Option<Result<String, GraphQLStringParsingError>> {
        match self {
            GraphQLTokenKind::StringValue(raw) if is_block_string(raw) => {
                Some(parse_block_string(raw))
            },
            GraphQLTokenKind::StringValue(raw) => Some(parse_single_line_string(raw)),
            _ => None,
        }
    }
}

fn is_block_string(raw: &str) -> bool {
    raw.starts_with("\"\"\"")
}

fn parse_single_line_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(GraphQLStringParsingError::UnterminatedString);
    }
    let content = &raw[1..raw.len() - 1];

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => result.push(parse_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    format!("\\{other}"),
                ));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }

    Ok(result)
}

/// Parse a Unicode escape sequence after seeing `\u`.
fn parse_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars>,
) -> Result<char, GraphQLStringParsingError> {
    let hex = if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}{c}"),
                    ));
                },
                None => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}"),
                    ));
                },
            }
        }
        if hex.is_empty() {
            return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                "\\u{}".to_string(),
            ));
        }
        hex
    } else {
        let mut hex = String::with_capacity(4);
        for _ in 0..4 {
            match chars.next() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{hex}{c}"),
                    ));
                },
                None => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{hex}"),
                    ));
                },
            }
        }
        hex
    };

    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

/// Parse a block string literal, stripping common indentation.
fn parse_block_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if raw.len() < 6 || !raw.ends_with("\"\"\"") {
        return Err(GraphQLStringParsingError::UnterminatedString);
    }
    let content = raw[3..raw.len() - 3].replace("\\\"\"\"", "\"\"\"");
    let lines: Vec<&str> = content.lines().collect();

    // Common indentation ignores the first line and whitespace-only lines.
    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim_matches([' ', '\t']).is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let mut result_lines: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i > 0 && line.len() >= common_indent {
                &line[common_indent..]
            } else {
                line
            }
        })
        .collect();

    while result_lines.first().is_some_and(|l| l.trim_matches([' ', '\t']).is_empty()) {
        result_lines.remove(0);
    }
    while result_lines.last().is_some_and(|l| l.trim_matches([' ', '\t']).is_empty()) {
        result_lines.pop();
    }

    Ok(result_lines.join("\n"))
}
