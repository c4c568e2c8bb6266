//! Character classification shared by the tokenizer and the position resolver.
//!
//! Everything here works on bytes. Shader sources are ASCII in practice;
//! non-ASCII bytes simply fall into the "other" class.

#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\r' | b'\t' | b'\n')
}

#[inline]
pub fn is_newline(b: u8) -> bool {
    matches!(b, b'\r' | b'\n')
}

#[inline]
pub fn is_space_or_tab(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

#[inline]
pub fn is_newline_pair(first: u8, second: u8) -> bool {
    matches!((first, second), (b'\r', b'\n') | (b'\n', b'\r'))
}

/// Width of the newline unit starting at `bytes[0]`.
///
/// `\r\n` and `\n\r` are one unit of width 2, a lone `\r` or `\n` has width 1,
/// anything else (including an empty slice) is 0.
pub fn newline_len(bytes: &[u8]) -> usize {
    match bytes {
        [a, b, ..] if is_newline_pair(*a, *b) => 2,
        [a, ..] if is_newline(*a) => 1,
        _ => 0,
    }
}

/// Identifier characters after the first one.
#[inline]
pub fn is_name_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[inline]
pub fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}
