use crate::diagnostics::DiagnosticKind;
use crate::lexer::TokenKind;
use crate::model::{Aggregate, Variable};
use crate::parser::core::Scanner;

impl Scanner<'_> {
    /// `struct Name { [qualifier] type name [ '[' N ']' ] [: MAPPING]; ... } [;]`
    pub(super) fn parse_struct(&mut self) {
        self.cursor.advance();

        let Some(name) = self.expect_name(DiagnosticKind::ExpectedName) else {
            self.recover_statement();
            return;
        };
        let name_range = self.prev_span();

        let open = self.cursor.current_span();
        if !self.expect_punct('{') {
            self.recover_statement();
            return;
        }

        let mut aggregate = Aggregate {
            name,
            members: Vec::new(),
        };

        loop {
            if self.cursor.is_at_end() {
                let range = self.range_from(open);
                self.error_msg(
                    DiagnosticKind::UnclosedBlock,
                    range,
                    format!("struct `{}`", aggregate.name),
                );
                break;
            }
            if self.cursor.eat_punct('}') {
                break;
            }
            if let Some(member) = self.parse_member() {
                aggregate.members.push(member);
            }
        }
        self.cursor.eat_punct(';');

        log::trace!(
            "struct `{}` with {} members",
            aggregate.name,
            aggregate.members.len()
        );
        if self.structs.iter().any(|s| s.name == aggregate.name) {
            self.warn_duplicate(&aggregate.name, name_range);
        }
        self.structs.push(aggregate);
    }

    fn parse_member(&mut self) -> Option<Variable> {
        let role = self.parse_role();

        let Some(type_name) = self.expect_name(DiagnosticKind::ExpectedTypeName) else {
            self.recover_member();
            return None;
        };
        let Some(name) = self.expect_name(DiagnosticKind::ExpectedName) else {
            self.recover_member();
            return None;
        };

        let mut member = Variable::new(type_name, name, role);
        if !self.parse_declarator_suffix(&mut member) {
            self.recover_member();
            return None;
        }
        if !self.expect_punct(';') {
            if self.cursor.peek_kind() != Some(TokenKind::Name) {
                self.recover_member();
            }
            return None;
        }
        Some(member)
    }
}
