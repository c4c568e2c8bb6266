use crate::diagnostics::DiagnosticKind;
use crate::model::{SamplerState, SamplerStateItem};
use crate::parser::core::Scanner;

impl Scanner<'_> {
    /// `sampler_state Name { state = value; ... } [;]`
    ///
    /// Values are kept as the trimmed source text up to `;`; interpreting
    /// them is left to [`crate::sampler::convert`].
    pub(super) fn parse_sampler(&mut self) {
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

        let mut sampler = SamplerState {
            name,
            states: Vec::new(),
        };

        loop {
            if self.cursor.is_at_end() {
                let range = self.range_from(open);
                self.error_msg(
                    DiagnosticKind::UnclosedBlock,
                    range,
                    format!("sampler_state `{}`", sampler.name),
                );
                break;
            }
            if self.cursor.eat_punct('}') {
                break;
            }
            if let Some(item) = self.parse_sampler_item() {
                sampler.states.push(item);
            }
        }
        self.cursor.eat_punct(';');

        log::trace!(
            "sampler_state `{}` with {} states",
            sampler.name,
            sampler.states.len()
        );
        if self.samplers.iter().any(|s| s.name == sampler.name) {
            self.warn_duplicate(&sampler.name, name_range);
        }
        self.samplers.push(sampler);
    }

    fn parse_sampler_item(&mut self) -> Option<SamplerStateItem> {
        let Some(state) = self.expect_name(DiagnosticKind::ExpectedName) else {
            self.recover_member();
            return None;
        };
        if !self.expect_punct('=') {
            self.recover_member();
            return None;
        }

        let first = self.cursor.pos();
        let mut last = None;
        while !self.cursor.is_at_end() && !self.cursor.is_punct(';') && !self.cursor.is_punct('}')
        {
            self.cursor.advance();
            last = self.cursor.prev_index();
        }

        let Some(last) = last else {
            self.error_here_msg(DiagnosticKind::ExpectedStateValue, format!("for `{state}`"));
            self.recover_member();
            return None;
        };

        let tokens = self.cursor.tokens();
        let start = usize::from(tokens[first].span.start());
        let end = usize::from(tokens[last].span.end());
        let value = self.cursor.source()[start..end].trim().to_string();

        self.expect_punct(';');
        Some(SamplerStateItem { state, value })
    }
}
