//! Default values of global variables.
//!
//! Accepted forms: a scalar (`1.5`, `-2`, `0x10`, `true`), or a brace list of
//! them (`{1, 0, 0, 1}`). Components are encoded little-endian: `f32` for
//! float-family types, `i32` for int and bool types.

use rowan::TextRange;

use fxscan_core::ShaderParamType;
use fxscan_core::numeric::{parse_float, parse_int, valid_number_str};

use crate::diagnostics::DiagnosticKind;
use crate::lexer::{Token, TokenKind};
use crate::model::Variable;
use crate::parser::core::Scanner;

enum InitError {
    /// A component that is not a literal; carries its range.
    Malformed(TextRange),
    Unsupported,
}

impl Scanner<'_> {
    /// Consumes one initializer and stores the encoded default. Value
    /// problems are warnings and leave the default empty.
    ///
    /// Returns `false` when nothing follows `=`, so the caller drops the
    /// declaration.
    pub(super) fn parse_initializer(&mut self, var: &mut Variable) -> bool {
        let start = self.cursor.current_span();
        let tokens = self.take_initializer();

        if tokens.is_empty() {
            self.error_here_msg(DiagnosticKind::ExpectedToken, "initializer after `=`");
            return false;
        }
        let range = self.range_from(start);

        let param_type = var.param_type();
        let Some(expected) = param_type.component_count() else {
            self.error_msg(
                DiagnosticKind::UnsupportedDefaultValue,
                range,
                format!("for type `{}`", var.type_name),
            );
            return true;
        };

        let values = match self.initializer_values(&tokens) {
            Ok(values) => values,
            Err(InitError::Malformed(at)) => {
                let text = self.cursor.source()[std::ops::Range::<usize>::from(at)].to_string();
                self.error_msg(DiagnosticKind::InvalidLiteral, at, text);
                return true;
            }
            Err(InitError::Unsupported) => {
                self.error_msg(
                    DiagnosticKind::UnsupportedDefaultValue,
                    range,
                    "expected a literal or `{ ... }` list",
                );
                return true;
            }
        };

        if values.len() != expected {
            self.error_msg(
                DiagnosticKind::DefaultValueArity,
                range,
                format!(
                    "`{}` takes {} component(s), found {}",
                    var.type_name,
                    expected,
                    values.len()
                ),
            );
            return true;
        }

        var.default_value = encode(param_type, &values);
        true
    }

    /// An optional sign and one operand: a literal or name, a `{ ... }` list,
    /// or a constructor call `name( ... )`. Stops before `;` so a missing
    /// terminator never pulls in the next declaration.
    fn take_initializer(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        if self.cursor.is_punct('-') || self.cursor.is_punct('+') {
            tokens.extend(self.cursor.advance());
        }

        if self.cursor.is_punct('{') {
            self.take_balanced('{', '}', &mut tokens);
            return tokens;
        }
        if self.cursor.is_at_end() || self.cursor.is_punct(';') || self.cursor.is_punct('}') {
            return tokens;
        }

        let is_name = self.cursor.peek_kind() == Some(TokenKind::Name);
        tokens.extend(self.cursor.advance());
        if is_name && self.cursor.is_punct('(') {
            self.take_balanced('(', ')', &mut tokens);
        }
        tokens
    }

    /// Collects tokens from `open` through its matching `close`, stopping
    /// early at a `;`.
    fn take_balanced(&mut self, open: char, close: char, tokens: &mut Vec<Token>) {
        let mut depth = 0usize;
        while !self.cursor.is_at_end() {
            if self.cursor.is_punct(open) {
                depth += 1;
            } else if self.cursor.is_punct(close) {
                depth = depth.saturating_sub(1);
            } else if self.cursor.is_punct(';') {
                return;
            }
            tokens.extend(self.cursor.advance());
            if depth == 0 {
                return;
            }
        }
    }

    fn initializer_values(&self, tokens: &[Token]) -> Result<Vec<f64>, InitError> {
        let inner = match tokens {
            [callee, open, ..] if callee.kind == TokenKind::Name && self.is_char(open, '(') => {
                return Err(InitError::Unsupported);
            }
            [open, inner @ .., close] if self.is_char(open, '{') => {
                if !self.is_char(close, '}') {
                    return Err(InitError::Unsupported);
                }
                inner
            }
            _ => tokens,
        };

        let mut values = Vec::new();
        for component in inner.split(|t| self.is_char(t, ',')) {
            values.push(self.component_value(component)?);
        }
        Ok(values)
    }

    fn component_value(&self, tokens: &[Token]) -> Result<f64, InitError> {
        let (negate, literal) = match tokens {
            [sign, literal] if self.is_char(sign, '-') => (true, literal),
            [sign, literal] if self.is_char(sign, '+') => (false, literal),
            [literal] => (false, literal),
            [] => return Err(InitError::Unsupported),
            [first, ..] => return Err(InitError::Malformed(first.span)),
        };

        let text = self.cursor.text(literal);
        let value = match literal.kind {
            TokenKind::Name if text == "true" => 1.0,
            TokenKind::Name if text == "false" => 0.0,
            TokenKind::Number if valid_number_str(text) => parse_int(text)
                .map(|v| v as f64)
                .or_else(|| parse_float(text))
                .ok_or(InitError::Malformed(literal.span))?,
            TokenKind::Punct if text == "{" || text == "}" => return Err(InitError::Unsupported),
            _ => return Err(InitError::Malformed(literal.span)),
        };

        Ok(if negate { -value } else { value })
    }

    fn is_char(&self, token: &Token, c: char) -> bool {
        token.kind == TokenKind::Punct && self.cursor.text(token).starts_with(c)
    }
}

fn encode(param_type: ShaderParamType, values: &[f64]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * 4);
    for &value in values {
        if param_type.is_float() {
            bytes.extend_from_slice(&(value as f32).to_le_bytes());
        } else {
            bytes.extend_from_slice(&(value as i32).to_le_bytes());
        }
    }
    bytes
}
