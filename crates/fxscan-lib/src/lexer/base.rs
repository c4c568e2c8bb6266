//! Base tokenizer: the lowest lexical layer.
//!
//! A base token is one of four things:
//! 1. a run of letters,
//! 2. a run of digits,
//! 3. a single whitespace character (only when whitespace is not ignored),
//! 4. any other single character.
//!
//! Digit runs are not validated as numbers here; see `fxscan_core::numeric`.

use logos::Logos;

use fxscan_core::text::newline_len;

use super::span::TextSpan;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKind {
    /// Never produced by the lexer; marks a cleared token.
    None,

    #[regex(r"[A-Za-z]+")]
    Letters,

    #[regex(r"[0-9]+")]
    Digits,

    #[regex(r"[ \t\r\n]")]
    Whitespace,

    #[regex(r"[^A-Za-z0-9 \t\r\n]")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseToken<'src> {
    pub span: TextSpan<'src>,
    pub kind: BaseKind,
    /// Whitespace was skipped right before this token.
    pub passed_whitespace: bool,
}

impl<'src> BaseToken<'src> {
    pub fn text(&self) -> &'src str {
        self.span.as_str()
    }

    /// The single byte of a one-character token, if it is one.
    pub fn byte(&self) -> Option<u8> {
        match self.span.as_bytes() {
            [b] => Some(*b),
            _ => None,
        }
    }

    pub fn is_byte(&self, b: u8) -> bool {
        self.byte() == Some(b)
    }
}

/// Streams base tokens out of a borrowed source, one call at a time.
pub struct BaseLexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, BaseKind>,
}

impl<'src> BaseLexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: BaseKind::lexer(source),
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.inner.span().end
    }

    pub fn reset(&mut self) {
        self.inner = BaseKind::lexer(self.source);
    }

    /// Produces the next base token, or `None` at end of input.
    ///
    /// With `ignore_whitespace`, whitespace is skipped (newline pairs as one
    /// unit) and the returned token records that it was.
    pub fn next_token(&mut self, ignore_whitespace: bool) -> Option<BaseToken<'src>> {
        let mut passed_whitespace = false;
        loop {
            // Every character matches some class, so errors cannot happen in
            // practice; treat them as `Other` anyway.
            let kind = self.inner.next()?.unwrap_or(BaseKind::Other);
            if ignore_whitespace && kind == BaseKind::Whitespace {
                passed_whitespace = true;
                let start = self.inner.span().start;
                let unit = newline_len(&self.source.as_bytes()[start..]);
                if unit > 1 {
                    self.inner.bump(unit - 1);
                }
                continue;
            }

            let range = self.inner.span();
            return Some(BaseToken {
                span: TextSpan::at(self.source, range.start, range.end - range.start),
                kind,
                passed_whitespace,
            });
        }
    }
}

impl<'src> Iterator for BaseLexer<'src> {
    type Item = BaseToken<'src>;

    /// Iteration keeps whitespace, so the tokens cover the whole source.
    fn next(&mut self) -> Option<Self::Item> {
        self.next_token(false)
    }
}
