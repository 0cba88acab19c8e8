use crate::Location;

/// Source position information tracked by lexers while scanning.
///
/// This is a pure data struct with no mutation methods. Lexers are responsible
/// for computing position values as they scan input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col`: character (not byte) count within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// Use [`SourcePosition::to_location()`] to get the 1-based form reported in
/// errors.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, col: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    ///
    /// Both 'a' (1 byte) and '🎉' (4 bytes) add 1 to this count.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Convert to a 1-based [`Location`].
    pub fn to_location(&self) -> Location {
        Location {
            line: self.line + 1,
            column: self.col + 1,
        }
    }
}
