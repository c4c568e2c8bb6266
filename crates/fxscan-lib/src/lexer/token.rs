//! Cursor-level tokens assembled from base tokens.
//!
//! Tokens carry spans, not text; slice the source with [`token_text`].
//! The stream is lossless: concatenating every token's text, trivia included,
//! reproduces the source.

use rowan::TextRange;

use fxscan_core::text::{is_newline, is_space_or_tab, newline_len};

use super::base::{BaseKind, BaseLexer, BaseToken};
use super::span::TextSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum TokenKind {
    /// Identifier or keyword: a letter or `_`, then letters, digits, `_`.
    Name,
    /// Anything number-shaped, validated only when a literal is needed.
    Number,
    /// Double-quoted string, quotes included.
    String,
    /// Any other single character.
    Punct,
    /// Run of spaces and tabs.
    Whitespace,
    /// One newline unit: `\n`, `\r`, `\r\n` or `\n\r`.
    Newline,
    LineComment,
    BlockComment,
    /// String or block comment that reaches the end of its line or input.
    Unterminated,
}

impl TokenKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace
                | Self::Newline
                | Self::LineComment
                | Self::BlockComment
                | Self::Unterminated
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}

/// Tokenizes source into span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let base: Vec<BaseToken<'_>> = BaseLexer::new(source).collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < base.len() {
        let start = i;
        let first = base[i];
        let kind = match first.kind {
            BaseKind::Letters => {
                i = eat_name(&base, i + 1);
                TokenKind::Name
            }
            BaseKind::Other if first.is_byte(b'_') => {
                i = eat_name(&base, i + 1);
                TokenKind::Name
            }
            BaseKind::Digits => {
                i = eat_number(&base, i + 1);
                TokenKind::Number
            }
            BaseKind::Other if first.is_byte(b'.') && kind_at(&base, i + 1) == BaseKind::Digits => {
                i = eat_number(&base, i + 1);
                TokenKind::Number
            }
            BaseKind::Whitespace => lex_whitespace(&base, &mut i),
            BaseKind::Other if first.is_byte(b'/') && byte_at(&base, i + 1) == Some(b'/') => {
                i = eat_until_newline(&base, i + 2);
                TokenKind::LineComment
            }
            BaseKind::Other if first.is_byte(b'/') && byte_at(&base, i + 1) == Some(b'*') => {
                lex_block_comment(&base, &mut i)
            }
            BaseKind::Other if first.is_byte(b'"') => lex_string(&base, &mut i),
            BaseKind::Other | BaseKind::None => {
                i += 1;
                TokenKind::Punct
            }
        };

        let mut span = TextSpan::default();
        for piece in &base[start..i] {
            span.extend(&piece.span);
        }
        tokens.push(Token::new(kind, span.range()));
    }

    tokens
}

fn kind_at(base: &[BaseToken<'_>], i: usize) -> BaseKind {
    base.get(i).map_or(BaseKind::None, |t| t.kind)
}

fn byte_at(base: &[BaseToken<'_>], i: usize) -> Option<u8> {
    base.get(i).and_then(BaseToken::byte)
}

fn eat_name(base: &[BaseToken<'_>], mut i: usize) -> usize {
    while let Some(t) = base.get(i) {
        match t.kind {
            BaseKind::Letters | BaseKind::Digits => i += 1,
            BaseKind::Other if t.is_byte(b'_') => i += 1,
            _ => break,
        }
    }
    i
}

/// Absorbs everything number-shaped: `1.5e-3f`, `0x1F`, and also `12abc`,
/// which literal validation rejects later.
fn eat_number(base: &[BaseToken<'_>], mut i: usize) -> usize {
    while let Some(t) = base.get(i) {
        match t.kind {
            BaseKind::Letters | BaseKind::Digits => i += 1,
            BaseKind::Other if t.is_byte(b'_') || t.is_byte(b'.') => i += 1,
            BaseKind::Other if (t.is_byte(b'+') || t.is_byte(b'-')) && follows_exponent(base, i) => {
                i += 1
            }
            _ => break,
        }
    }
    i
}

/// A sign belongs to the number when it directly follows a decimal
/// exponent marker and precedes digits.
fn follows_exponent(base: &[BaseToken<'_>], sign: usize) -> bool {
    let prev_is_marker = sign
        .checked_sub(1)
        .and_then(|p| base.get(p))
        .is_some_and(|t| t.kind == BaseKind::Letters && t.text().ends_with(['e', 'E']));
    prev_is_marker && kind_at(base, sign + 1) == BaseKind::Digits
}

fn lex_whitespace(base: &[BaseToken<'_>], i: &mut usize) -> TokenKind {
    let bytes = base[*i].span.as_bytes();
    if is_newline(bytes[0]) {
        let pair = byte_at(base, *i + 1).map(|b| [bytes[0], b]);
        let unit = pair.map_or(1, |p| newline_len(&p));
        *i += unit.max(1);
        return TokenKind::Newline;
    }

    while byte_at(base, *i).is_some_and(is_space_or_tab) {
        *i += 1;
    }
    TokenKind::Whitespace
}

fn eat_until_newline(base: &[BaseToken<'_>], mut i: usize) -> usize {
    while let Some(t) = base.get(i) {
        if t.byte().is_some_and(is_newline) {
            break;
        }
        i += 1;
    }
    i
}

fn lex_block_comment(base: &[BaseToken<'_>], i: &mut usize) -> TokenKind {
    let mut j = *i + 2;
    while j < base.len() {
        if base[j].is_byte(b'*') && byte_at(base, j + 1) == Some(b'/') {
            *i = j + 2;
            return TokenKind::BlockComment;
        }
        j += 1;
    }
    *i = j;
    TokenKind::Unterminated
}

fn lex_string(base: &[BaseToken<'_>], i: &mut usize) -> TokenKind {
    let mut j = *i + 1;
    while let Some(t) = base.get(j) {
        match t.byte() {
            Some(b'"') => {
                *i = j + 1;
                return TokenKind::String;
            }
            Some(b'\\') if j + 1 < base.len() && !base[j + 1].byte().is_some_and(is_newline) => {
                j += 2
            }
            Some(b) if is_newline(b) => break,
            _ => j += 1,
        }
    }
    *i = j;
    TokenKind::Unterminated
}
