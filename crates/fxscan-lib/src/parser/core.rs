//! Scanner state and low-level operations.

use rowan::TextRange;

use fxscan_core::locate;

use super::cursor::Cursor;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::lexer::{Token, TokenKind};
use crate::model::{Aggregate, Function, SamplerState, ShaderModule, Variable};

/// Recursive-descent scanner over one source.
///
/// Declarations are collected as they are recognised; problems become
/// diagnostics and the scan goes on.
pub struct Scanner<'src> {
    pub(super) cursor: Cursor<'src>,
    pub(super) file_name: String,
    pub(super) diagnostics: Diagnostics,
    pub(super) params: Vec<Variable>,
    pub(super) structs: Vec<Aggregate>,
    pub(super) samplers: Vec<SamplerState>,
    pub(super) functions: Vec<Function>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>, file_name: impl Into<String>) -> Self {
        Self {
            cursor: Cursor::new(source, tokens),
            file_name: file_name.into(),
            diagnostics: Diagnostics::new(),
            params: Vec::new(),
            structs: Vec::new(),
            samplers: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn scan(mut self) -> ShaderModule {
        self.report_unterminated();
        self.parse_root();
        self.finish()
    }

    fn finish(self) -> ShaderModule {
        let source = self.cursor.source().to_string();
        ShaderModule {
            file_name: self.file_name,
            source,
            tokens: self.cursor.into_tokens(),
            params: self.params,
            structs: self.structs,
            samplers: self.samplers,
            functions: self.functions,
            diagnostics: self.diagnostics,
        }
    }

    /// Unterminated strings and comments are trivia to the grammar; each one
    /// is reported once up front.
    fn report_unterminated(&mut self) {
        let unterminated: Vec<TextRange> = self
            .cursor
            .tokens()
            .iter()
            .filter(|t| t.kind == TokenKind::Unterminated)
            .map(|t| t.span)
            .collect();

        for range in unterminated {
            let text = &self.cursor.source()[std::ops::Range::<usize>::from(range)];
            let kind = if text.starts_with('"') {
                DiagnosticKind::UnterminatedString
            } else {
                DiagnosticKind::UnterminatedComment
            };
            self.error(kind, range);
        }
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind, range: TextRange) {
        let position = locate(self.cursor.source(), range.start().into());
        self.diagnostics
            .report(kind, range)
            .at(&self.file_name, position)
            .emit();
    }

    pub(super) fn error_msg(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        message: impl Into<String>,
    ) {
        let position = locate(self.cursor.source(), range.start().into());
        self.diagnostics
            .report(kind, range)
            .message(message)
            .at(&self.file_name, position)
            .emit();
    }

    /// Reports at the current token.
    pub(super) fn error_here_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.cursor.current_span();
        self.error_msg(kind, range, message);
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect_punct(&mut self, c: char) -> bool {
        if self.cursor.eat_punct(c) {
            return true;
        }
        self.error_here_msg(DiagnosticKind::ExpectedToken, format!("`{c}`"));
        false
    }

    /// Consumes a name token, or reports `kind` without consuming.
    pub(super) fn expect_name(&mut self, kind: DiagnosticKind) -> Option<String> {
        if self.cursor.peek_kind() == Some(TokenKind::Name) {
            let token = self.cursor.advance()?;
            return Some(self.cursor.text(&token).to_string());
        }
        let found = self.cursor.peek().map(|t| self.cursor.text(t).to_string());
        match found {
            Some(found) => self.error_here_msg(kind, format!("found `{found}`")),
            None => self.error_here_msg(kind, "found end of input"),
        }
        None
    }

    /// Span of the most recently consumed token.
    pub(super) fn prev_span(&self) -> TextRange {
        self.cursor
            .prev_index()
            .map(|i| self.cursor.tokens()[i].span)
            .unwrap_or_default()
    }

    /// Range from `start` through the last consumed token.
    pub(super) fn range_from(&self, start: TextRange) -> TextRange {
        let end = self
            .cursor
            .prev_index()
            .map_or(start.end(), |i| self.cursor.tokens()[i].span.end());
        TextRange::new(start.start(), end.max(start.end()))
    }
}
