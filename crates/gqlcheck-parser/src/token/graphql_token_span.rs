use crate::SourcePosition;

/// Where a token sits in its source: `start` is the position of its first
/// character and `end` the position just past its last.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GraphQLTokenSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl GraphQLTokenSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }
}
