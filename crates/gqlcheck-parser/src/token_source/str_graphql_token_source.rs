//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! Token values borrow directly from the source string using
//! `Cow::Borrowed`, avoiding allocations for names, numbers, and strings.
//!
//! # Usage
//!
//! ```rust
//! use gqlcheck_parser::token_source::StrGraphQLTokenSource;
//!
//! let lexer = StrGraphQLTokenSource::new("{ name }");
//! let kinds: Vec<_> = lexer.map(|token| token.kind).collect();
//! assert_eq!(kinds.len(), 4); // `{`, `name`, `}`, Eof
//! ```

use crate::SourcePosition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;
use std::borrow::Cow;

/// A lexer over a `&str`.
///
/// See module documentation for details.
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current 0-based character column.
    curr_col: usize,

    /// Whether the previous character was `\r`, so that a following `\n`
    /// does not count as a second line break.
    last_char_was_cr: bool,

    /// Whether the EOF token has been emitted.
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_col, self.curr_byte_offset)
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r`, and `\r\n` each count as exactly one line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' => {
                self.curr_line += 1;
                self.curr_col = 0;
            },
            '\r' => {
                self.curr_line += 1;
                self.curr_col = 0;
                self.last_char_was_cr = true;
            },
            _ => {
                self.curr_col += 1;
                self.last_char_was_cr = false;
            },
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    fn make_token(
        &self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(kind, GraphQLTokenSpan::new(start, self.curr_position()))
    }

    fn punctuator(
        &mut self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        self.consume();
        self.make_token(kind, start)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Advances to the next token, skipping ignored input.
    fn next_token(&mut self) -> GraphQLToken<'src> {
        loop {
            self.consume_while(|ch| matches!(ch, ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}'));

            let start = self.curr_position();
            let Some(ch) = self.peek_char() else {
                return self.make_token(GraphQLTokenKind::Eof, start);
            };

            return match ch {
                '#' => {
                    self.skip_comment();
                    continue;
                },
                '!' => self.punctuator(GraphQLTokenKind::Bang, start),
                '$' => self.punctuator(GraphQLTokenKind::Dollar, start),
                '&' => self.punctuator(GraphQLTokenKind::Ampersand, start),
                '(' => self.punctuator(GraphQLTokenKind::ParenOpen, start),
                ')' => self.punctuator(GraphQLTokenKind::ParenClose, start),
                ':' => self.punctuator(GraphQLTokenKind::Colon, start),
                '=' => self.punctuator(GraphQLTokenKind::Equals, start),
                '@' => self.punctuator(GraphQLTokenKind::At, start),
                '[' => self.punctuator(GraphQLTokenKind::SquareBracketOpen, start),
                ']' => self.punctuator(GraphQLTokenKind::SquareBracketClose, start),
                '{' => self.punctuator(GraphQLTokenKind::CurlyBraceOpen, start),
                '}' => self.punctuator(GraphQLTokenKind::CurlyBraceClose, start),
                '|' => self.punctuator(GraphQLTokenKind::Pipe, start),
                '.' => self.lex_ellipsis(start),
                '"' => self.lex_string(start),
                c if is_name_start(c) => self.lex_name(start),
                c if c == '-' || c.is_ascii_digit() => self.lex_number(start),
                c => {
                    self.consume();
                    self.make_token(
                        GraphQLTokenKind::error(format!(
                            "Unexpected character {}",
                            describe_char(c),
                        )),
                        start,
                    )
                },
            };
        }
    }

    /// Skips a `#` comment up to (not including) the next line terminator.
    fn skip_comment(&mut self) {
        let rest = self.remaining();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        // Comments never contain line terminators, so only the column moves.
        self.curr_col += rest[..len].chars().count();
        self.curr_byte_offset += len;
        self.last_char_was_cr = false;
    }

    fn lex_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("...") {
            self.consume();
            self.consume();
            self.consume();
            return self.make_token(GraphQLTokenKind::Ellipsis, start);
        }

        self.consume_while(|ch| ch == '.');
        let kind = if self.curr_byte_offset - start.byte_offset() == 2 {
            GraphQLTokenKind::error("Unexpected `..` (use `...` for spread operator)")
        } else {
            GraphQLTokenKind::error("Unexpected `.`")
        };
        self.make_token(kind, start)
    }

    /// Lexes a name: `/[_A-Za-z][_0-9A-Za-z]*/`
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name_start = self.curr_byte_offset;
        self.consume();
        self.consume_while(is_name_continue);

        let name = &self.source[name_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::name_borrowed(name), start)
    }

    /// Lexes an integer or float literal.
    ///
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional decimal part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number, unexpected digit after 0",
                    );
                }
            },
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_while(|ch| ch.is_ascii_digit());
            },
            _ => {
                return self.make_token(GraphQLTokenKind::error("Unexpected `-`"), start);
            },
        }

        if self.peek_char() == Some('.') {
            if !self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number, expected digit after `.`",
                );
            }
            is_float = true;
            self.consume();
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number, exponent must have at least one digit",
                );
            }
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        // A number immediately followed by a name character (`123abc`) is
        // never valid.
        if self.peek_char().is_some_and(|ch| is_name_start(ch) || ch == '.') {
            return self.lex_number_error(
                start,
                num_start,
                "Invalid number, unexpected character after number",
            );
        }

        let text = Cow::Borrowed(&self.source[num_start..self.curr_byte_offset]);
        let kind = if is_float {
            GraphQLTokenKind::FloatValue(text)
        } else {
            GraphQLTokenKind::IntValue(text)
        };
        self.make_token(kind, start)
    }

    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
    ) -> GraphQLToken<'src> {
        self.consume_while(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '+' | '-' | '_'));
        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        self.make_token(
            GraphQLTokenKind::error(format!("{message}: `{invalid_text}`")),
            start,
        )
    }

    /// Lexes a string literal (single-line or block string).
    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;

        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        self.consume();
        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    return self.make_token(
                        GraphQLTokenKind::error("Unterminated string"),
                        start,
                    );
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if !matches!(self.peek_char(), None | Some('\n') | Some('\r')) {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::StringValue(Cow::Borrowed(text)), start)
    }

    fn lex_block_string(&mut self, start: SourcePosition, str_start: usize) -> GraphQLToken<'src> {
        for _ in 0..3 {
            self.consume();
        }

        loop {
            let rest = self.remaining();
            if rest.is_empty() {
                return self.make_token(
                    GraphQLTokenKind::error("Unterminated block string"),
                    start,
                );
            }
            if rest.starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
            } else if rest.starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.consume();
                }
                break;
            } else {
                self.consume();
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::StringValue(Cow::Borrowed(text)), start)
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Printable characters are shown in backticks; invisible ones also get
/// their code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}
