//! Borrowed views into source text.

use std::cmp::Ordering;

use rowan::{TextRange, TextSize};

/// Non-owning view of a contiguous byte range inside a source buffer.
///
/// A span without an origin (the [`Default`]) is empty and adopts the first
/// span it is extended with. Equality compares content, not location.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSpan<'src> {
    source: Option<&'src str>,
    range: TextRange,
}

impl<'src> TextSpan<'src> {
    pub fn new(source: &'src str, range: TextRange) -> Self {
        assert!(
            usize::from(range.end()) <= source.len(),
            "span {:?} out of bounds for source of length {}",
            range,
            source.len()
        );
        Self {
            source: Some(source),
            range,
        }
    }

    /// Span of `len` bytes starting at byte `start`.
    pub fn at(source: &'src str, start: usize, len: usize) -> Self {
        let range = TextRange::at(to_size(start), to_size(len));
        Self::new(source, range)
    }

    pub fn set(&mut self, source: &'src str, range: TextRange) {
        *self = Self::new(source, range);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn len(&self) -> usize {
        self.range.len().into()
    }

    pub fn has_origin(&self) -> bool {
        self.source.is_some()
    }

    pub fn as_str(&self) -> &'src str {
        match self.source {
            Some(source) => &source[std::ops::Range::<usize>::from(self.range)],
            None => "",
        }
    }

    pub fn as_bytes(&self) -> &'src [u8] {
        self.as_str().as_bytes()
    }

    /// True without an origin, with zero length, or when the first byte is NUL.
    pub fn is_empty(&self) -> bool {
        self.source.is_none() || self.range.is_empty() || self.as_bytes()[0] == 0
    }

    /// Grows this span to absorb `other`, which must start where this one ends.
    ///
    /// No bytes move: only the length changes. A span without an origin
    /// becomes a copy of `other`.
    pub fn extend(&mut self, other: &TextSpan<'src>) {
        let (Some(source), Some(other_source)) = (self.source, other.source) else {
            if self.source.is_none() {
                *self = *other;
            }
            return;
        };
        assert!(
            std::ptr::eq(source.as_ptr(), other_source.as_ptr()),
            "extend: spans come from different buffers"
        );
        assert_eq!(
            self.range.end(),
            other.range.start(),
            "extend: spans are not contiguous"
        );
        self.range = TextRange::new(self.range.start(), other.range.end());
    }

    pub fn cmp_str(&self, other: &str) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }

    pub fn cmp_str_ignore_case(&self, other: &str) -> Ordering {
        cmp_ignore_case(self.as_bytes(), other.as_bytes())
    }

    pub fn cmp_span(&self, other: &TextSpan<'_>) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }

    pub fn cmp_span_ignore_case(&self, other: &TextSpan<'_>) -> Ordering {
        cmp_ignore_case(self.as_bytes(), other.as_bytes())
    }

    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(other)
    }
}

impl PartialEq for TextSpan<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for TextSpan<'_> {}

impl PartialEq<str> for TextSpan<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextSpan<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::fmt::Display for TextSpan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn cmp_ignore_case(a: &[u8], b: &[u8]) -> Ordering {
    let a = a.iter().map(u8::to_ascii_lowercase);
    let b = b.iter().map(u8::to_ascii_lowercase);
    a.cmp(b)
}

pub(crate) fn to_size(offset: usize) -> TextSize {
    TextSize::from(offset as u32)
}
