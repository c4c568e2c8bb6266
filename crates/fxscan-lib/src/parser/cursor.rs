//! Token cursor with trivia skipping.
//!
//! The cursor owns the token arena for the duration of a scan and hands it
//! back with [`Cursor::into_tokens`]. Its position always rests on a
//! non-trivia token or at the end, so lookahead never has to skip.

use std::cell::Cell;

use rowan::{TextRange, TextSize};

use crate::lexer::{Token, TokenKind, token_text};

pub(crate) const DEBUG_FUEL: u32 = 256;

pub struct Cursor<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    /// Index of the last consumed token.
    prev: Option<usize>,
    pub(super) debug_fuel: Cell<u32>,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        let mut cursor = Self {
            source,
            tokens,
            pos: 0,
            prev: None,
            debug_fuel: Cell::new(DEBUG_FUEL),
        };
        cursor.skip_trivia();
        cursor
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Raw arena index of the current token (or the arena length at the end).
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Raw arena index of the most recently consumed token.
    pub fn prev_index(&self) -> Option<usize> {
        self.prev
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn peek(&self) -> Option<&Token> {
        self.ensure_progress();
        self.tokens.get(self.pos)
    }

    /// Looks `n` non-trivia tokens past the current one.
    pub fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.ensure_progress();
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
    }

    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    pub fn peek_text(&self) -> &'src str {
        self.peek().map_or("", |t| token_text(self.source, t))
    }

    pub fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    /// Span of the current token, or an empty range at the end of input.
    pub fn current_span(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    /// Consumes the current token and moves past any trivia after it.
    pub fn advance(&mut self) -> Option<Token> {
        let token = *self.tokens.get(self.pos)?;
        self.debug_fuel.set(DEBUG_FUEL);
        self.prev = Some(self.pos);
        self.pos += 1;
        self.skip_trivia();
        Some(token)
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokenKind::Punct && self.is_char(t, c))
    }

    pub fn is_name(&self, name: &str) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokenKind::Name && self.text(t) == name)
    }

    pub fn nth_is_punct(&self, n: usize, c: char) -> bool {
        self.peek_nth(n)
            .is_some_and(|t| t.kind == TokenKind::Punct && self.is_char(t, c))
    }

    pub fn eat_punct(&mut self, c: char) -> bool {
        if self.is_punct(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn eat_name(&mut self, name: &str) -> bool {
        if self.is_name(name) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Position to come back to with [`Cursor::restore`].
    pub fn snapshot(&self) -> (usize, Option<usize>) {
        (self.pos, self.prev)
    }

    pub fn restore(&mut self, snapshot: (usize, Option<usize>)) {
        (self.pos, self.prev) = snapshot;
        self.debug_fuel.set(DEBUG_FUEL);
    }

    /// From an opening delimiter, consumes through its matching close.
    ///
    /// Returns `false` when input ends first; everything is consumed then.
    pub fn skip_balanced(&mut self, open: char, close: char) -> bool {
        debug_assert!(self.is_punct(open), "skip_balanced must start at `{open}`");
        let mut depth = 0usize;
        while !self.is_at_end() {
            if self.is_punct(open) {
                depth += 1;
            } else if self.is_punct(close) {
                depth -= 1;
                if depth == 0 {
                    self.advance();
                    return true;
                }
            }
            self.advance();
        }
        false
    }

    fn skip_trivia(&mut self) {
        while self.tokens.get(self.pos).is_some_and(|t| t.kind.is_trivia()) {
            self.pos += 1;
        }
    }

    fn is_char(&self, token: &Token, c: char) -> bool {
        let mut chars = self.text(token).chars();
        chars.next() == Some(c) && chars.next().is_none()
    }
}
