//! Row/column resolution for diagnostics.
//!
//! Resolution is a linear scan from the start of the buffer. It only runs when
//! a diagnostic is reported, never per token, so no line index is kept.

use crate::text::newline_len;

/// 1-based location in a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    pub const START: Position = Position { row: 1, column: 1 };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

/// Locates byte `offset` inside `source`.
///
/// Every newline unit (`\r\n`, `\n\r`, `\r`, `\n`) bumps the row and resets the
/// column. Offsets past the end resolve to the end of the buffer. An offset
/// that falls between the two bytes of a newline pair resolves to the start of
/// the following line.
pub fn locate(source: &str, offset: usize) -> Position {
    let bytes = source.as_bytes();
    let target = offset.min(bytes.len());

    let mut pos = Position::START;
    let mut i = 0;
    while i < target {
        let nl = newline_len(&bytes[i..]);
        if nl > 0 {
            pos.row += 1;
            pos.column = 1;
            i += nl;
        } else {
            pos.column += 1;
            i += 1;
        }
    }
    pos
}
