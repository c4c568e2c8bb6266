use crate::diagnostics::DiagnosticKind;
use crate::lexer::TokenKind;
use crate::model::Role;
use crate::parser::core::Scanner;

impl Scanner<'_> {
    pub(crate) fn parse_root(&mut self) {
        log::debug!("scanning `{}`", self.file_name);

        while !self.cursor.is_at_end() {
            self.parse_item();
        }

        log::debug!(
            "scanned `{}`: {} params, {} structs, {} samplers, {} functions, {} diagnostics",
            self.file_name,
            self.params.len(),
            self.structs.len(),
            self.samplers.len(),
            self.functions.len(),
            self.diagnostics.len()
        );
    }

    fn parse_item(&mut self) {
        if self.cursor.eat_punct(';') {
            return;
        }

        if self.cursor.peek_kind() != Some(TokenKind::Name) {
            let found = self.cursor.peek_text().to_string();
            self.error_here_msg(DiagnosticKind::ExpectedDeclaration, format!("found `{found}`"));
            self.recover_statement();
            return;
        }

        match self.cursor.peek_text() {
            "struct" => self.parse_struct(),
            "sampler_state" => self.parse_sampler(),
            _ => self.parse_typed_item(),
        }
    }

    /// `[uniform|const] type name` followed by either a parameter list
    /// (function) or the rest of a global variable.
    fn parse_typed_item(&mut self) {
        let start = self.cursor.current_span();
        let role = self.parse_role();

        let Some(type_name) = self.expect_name(DiagnosticKind::ExpectedTypeName) else {
            self.recover_statement();
            return;
        };
        let Some(name) = self.expect_name(DiagnosticKind::ExpectedName) else {
            self.recover_statement();
            return;
        };

        if self.cursor.is_punct('(') {
            if role != Role::Plain {
                let qualifier = if role == Role::Uniform { "uniform" } else { "const" };
                self.error_msg(DiagnosticKind::InvalidQualifier, start, qualifier);
            }
            self.parse_function(type_name, name);
        } else {
            self.parse_global(type_name, name, role);
        }
    }

    /// Skips to the next statement boundary: past a `;`, past a balanced
    /// `{ ... }` block (and a `;` right after it), or past a stray `}`.
    pub(super) fn recover_statement(&mut self) {
        let skipped_from = self.cursor.pos();
        while !self.cursor.is_at_end() {
            if self.cursor.eat_punct(';') || self.cursor.eat_punct('}') {
                break;
            }
            if self.cursor.is_punct('{') {
                self.cursor.skip_balanced('{', '}');
                self.cursor.eat_punct(';');
                break;
            }
            self.cursor.advance();
        }
        log::trace!(
            "resynchronised after tokens {}..{}",
            skipped_from,
            self.cursor.pos()
        );
    }

    /// Skips a malformed block member: past its `;`, or up to the `}` that
    /// closes the enclosing block.
    pub(super) fn recover_member(&mut self) {
        while !self.cursor.is_at_end() && !self.cursor.is_punct('}') {
            if self.cursor.is_punct('{') {
                self.cursor.skip_balanced('{', '}');
                continue;
            }
            if self.cursor.advance().is_some_and(|t| self.cursor.text(&t) == ";") {
                break;
            }
        }
    }
}
