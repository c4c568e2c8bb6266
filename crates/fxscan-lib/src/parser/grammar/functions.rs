use crate::diagnostics::DiagnosticKind;
use crate::model::{Function, Role, Variable};
use crate::parser::core::Scanner;

impl Scanner<'_> {
    /// Function after `type name`, starting at `(`:
    /// `( params ) [: MAPPING] { body }`
    pub(super) fn parse_function(&mut self, return_type: String, name: String) {
        let name_range = self.prev_span();
        let mut func = Function {
            name,
            return_type,
            ..Function::default()
        };

        if !self.parse_param_list(&mut func.params) {
            self.recover_statement();
            return;
        }

        if self.cursor.eat_punct(':') {
            let Some(mapping) = self.expect_name(DiagnosticKind::ExpectedMapping) else {
                self.recover_statement();
                return;
            };
            func.mapping = Some(mapping);
        }

        if !self.cursor.is_punct('{') {
            let found = self.cursor.peek_text().to_string();
            self.error_here_msg(
                DiagnosticKind::ExpectedBody,
                format!("`{}` ends at `{found}`", func.name),
            );
            self.recover_statement();
            return;
        }
        func.body = self.parse_body(&func.name);

        log::trace!(
            "function `{}` returning `{}` with {} params, body tokens {:?}",
            func.name,
            func.return_type,
            func.params.len(),
            func.body
        );
        if self.functions.iter().any(|f| f.name == func.name) {
            self.warn_duplicate(&func.name, name_range);
        }
        self.functions.push(func);
    }

    /// `( )`, `( void )`, or comma-separated parameters.
    ///
    /// Returns `false` when the list cannot be closed and the caller has to
    /// resynchronise.
    fn parse_param_list(&mut self, params: &mut Vec<Variable>) -> bool {
        let open = self.cursor.current_span();
        self.cursor.advance();

        if self.cursor.eat_punct(')') {
            return true;
        }
        if self.cursor.is_name("void") && self.cursor.nth_is_punct(1, ')') {
            self.cursor.advance();
            self.cursor.advance();
            return true;
        }

        loop {
            if let Some(param) = self.parse_param() {
                params.push(param);
            } else if !self.recover_param() {
                break;
            }

            if self.cursor.eat_punct(',') {
                continue;
            }
            if self.cursor.eat_punct(')') {
                return true;
            }

            if self.cursor.is_at_end() {
                let range = self.range_from(open);
                self.error(DiagnosticKind::UnclosedParameterList, range);
                return false;
            }
            self.error_here_msg(DiagnosticKind::ExpectedToken, "`,` or `)`");
            if !self.recover_param() {
                break;
            }
            if self.cursor.eat_punct(')') {
                return true;
            }
            self.cursor.eat_punct(',');
        }

        self.cursor.eat_punct(')')
    }

    /// `[uniform|const|in|out|inout] type name [ '[' N ']' ] [: MAPPING]`
    fn parse_param(&mut self) -> Option<Variable> {
        let role = match self.cursor.peek_text() {
            "in" | "out" | "inout" => {
                self.cursor.advance();
                Role::Plain
            }
            _ => self.parse_role(),
        };

        let type_name = self.expect_name(DiagnosticKind::ExpectedTypeName)?;
        let name = self.expect_name(DiagnosticKind::ExpectedName)?;

        let mut param = Variable::new(type_name, name, role);
        if !self.parse_declarator_suffix(&mut param) {
            return None;
        }
        Some(param)
    }

    /// Skips to the next `,` or `)` at this nesting level, stopping early at
    /// `{` or `;` which belong to the enclosing declaration. Returns `true`
    /// when a separator or the closing `)` is next.
    fn recover_param(&mut self) -> bool {
        while !self.cursor.is_at_end() {
            if self.cursor.is_punct(',') || self.cursor.is_punct(')') {
                return true;
            }
            if self.cursor.is_punct('{') || self.cursor.is_punct(';') {
                return false;
            }
            if self.cursor.is_punct('(') {
                self.cursor.skip_balanced('(', ')');
                continue;
            }
            self.cursor.advance();
        }
        false
    }

    /// Bounds a body from its `{`. Braces nest; the result excludes both
    /// outer braces. Without a matching `}` the body runs to end of input.
    fn parse_body(&mut self, func_name: &str) -> std::ops::Range<usize> {
        let open = self.cursor.current_span();
        self.cursor.advance();
        let start = self.cursor.prev_index().map_or(0, |i| i + 1);

        let mut depth = 1usize;
        while !self.cursor.is_at_end() {
            if self.cursor.is_punct('{') {
                depth += 1;
            } else if self.cursor.is_punct('}') {
                depth -= 1;
                if depth == 0 {
                    let end = self.cursor.pos();
                    self.cursor.advance();
                    return start..end;
                }
            }
            self.cursor.advance();
        }

        let range = self.range_from(open);
        self.error_msg(
            DiagnosticKind::UnclosedBlock,
            range,
            format!("body of `{func_name}`"),
        );
        start..self.cursor.tokens().len()
    }
}
