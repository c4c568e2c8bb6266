use rowan::TextRange;

use fxscan_core::numeric::parse_int;

use crate::diagnostics::DiagnosticKind;
use crate::lexer::TokenKind;
use crate::model::{Role, Variable};
use crate::parser::core::Scanner;

impl Scanner<'_> {
    /// Optional `uniform` / `const` qualifier. A second qualifier is an error
    /// and the first one wins.
    pub(super) fn parse_role(&mut self) -> Role {
        let mut role = Role::Plain;
        loop {
            let next = match self.cursor.peek_text() {
                "uniform" => Role::Uniform,
                "const" => Role::Const,
                _ => return role,
            };
            if self.cursor.peek_kind() != Some(TokenKind::Name) {
                return role;
            }
            if role != Role::Plain {
                let qualifier = self.cursor.peek_text().to_string();
                self.error_here_msg(DiagnosticKind::InvalidQualifier, qualifier);
            } else {
                role = next;
            }
            self.cursor.advance();
        }
    }

    /// Global variable after `type name`:
    /// `[ '[' N ']' ] [ ':' MAPPING ] [ '=' initializer ] ';'`
    pub(super) fn parse_global(&mut self, type_name: String, name: String, role: Role) {
        let name_range = self.prev_span();
        let mut var = Variable::new(type_name, name, role);

        if !self.parse_declarator_suffix(&mut var) {
            self.recover_statement();
            return;
        }

        if self.cursor.eat_punct('=') && !self.parse_initializer(&mut var) {
            self.recover_statement();
            return;
        }

        if !self.expect_terminator() {
            return;
        }

        log::trace!("global `{}` of type `{}` ({:?})", var.name, var.type_name, var.role);
        if self.params.iter().any(|p| p.name == var.name) {
            self.warn_duplicate(&var.name, name_range);
        }
        self.params.push(var);
    }

    /// Expects the `;` that ends a declaration. On a miss, a following name is
    /// left for the next declaration; anything else is skipped.
    fn expect_terminator(&mut self) -> bool {
        if self.expect_punct(';') {
            return true;
        }
        if self.cursor.peek_kind() != Some(TokenKind::Name) {
            self.recover_statement();
        }
        false
    }

    /// Array suffix and semantic mapping shared by every variable form.
    ///
    /// Returns `false` when the suffix is malformed and the caller has to
    /// resynchronise.
    pub(super) fn parse_declarator_suffix(&mut self, var: &mut Variable) -> bool {
        if self.cursor.eat_punct('[') {
            let Some(count) = self.parse_array_count() else {
                return false;
            };
            var.array_count = count;
            if !self.expect_punct(']') {
                return false;
            }
        }

        if self.cursor.eat_punct(':') {
            let Some(mapping) = self.expect_name(DiagnosticKind::ExpectedMapping) else {
                return false;
            };
            var.mapping = Some(mapping);
        }

        true
    }

    fn parse_array_count(&mut self) -> Option<u32> {
        let range = self.cursor.current_span();
        let text = self.cursor.peek_text().to_string();
        let count = match self.cursor.peek_kind() {
            Some(TokenKind::Number) => parse_int(&text).and_then(|n| u32::try_from(n).ok()),
            _ => None,
        };

        match count {
            Some(n) if n > 0 => {
                self.cursor.advance();
                Some(n)
            }
            _ => {
                self.error_msg(DiagnosticKind::InvalidArraySize, range, format!("found `{text}`"));
                None
            }
        }
    }

    pub(super) fn warn_duplicate(&mut self, name: &str, range: TextRange) {
        self.error_msg(DiagnosticKind::DuplicateDeclaration, range, name);
    }
}
