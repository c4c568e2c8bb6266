//! Declaration scanner for effect shader sources.
//!
//! # Architecture
//!
//! Source text is lexed into a lossless token arena, then a recursive-descent
//! scanner walks it through a trivia-skipping [`Cursor`]:
//!
//! - Zero-copy scanning: tokens carry spans, text is sliced only when a
//!   declaration keeps it
//! - Declaration level only: function bodies are bounded by brace matching and
//!   recorded as token ranges, never parsed
//! - The arena and the source end up owned by the resulting [`ShaderModule`],
//!   so body ranges stay valid as long as the module lives
//!
//! # Recovery Strategy
//!
//! The scanner always produces a module. Recovery follows these rules:
//!
//! 1. Missing expected tokens emit a diagnostic but don't consume
//! 2. A malformed top-level statement is skipped to the next `;`, past a
//!    balanced `{ ... }` block, or past a stray `}`
//! 3. A malformed block member is skipped to its `;` or to the closing `}`
//! 4. A variable without its `;` is dropped; a name after it starts the next
//!    declaration, anything else is skipped as in 2
//! 5. Problems with default values are warnings; the declaration is kept

mod core;
mod cursor;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use self::core::Scanner;
pub use self::cursor::Cursor;

use crate::lexer::lex;
use crate::model::ShaderModule;

/// Builder for a scan with options.
///
/// ```
/// use fxscan_lib::ShaderParser;
///
/// let module = ShaderParser::new("uniform float4x4 ViewProj;")
///     .file_name("basic.effect")
///     .parse();
/// assert!(module.success());
/// assert_eq!(module.params[0].name, "ViewProj");
/// ```
#[derive(Debug, Clone)]
pub struct ShaderParser<'src> {
    source: &'src str,
    file_name: String,
    warnings_as_errors: bool,
}

impl<'src> ShaderParser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            file_name: String::new(),
            warnings_as_errors: false,
        }
    }

    /// Name used to tag diagnostics. Nothing is read from it.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Reports every warning as an error, so it also fails the scan.
    pub fn warnings_as_errors(mut self, value: bool) -> Self {
        self.warnings_as_errors = value;
        self
    }

    pub fn parse(self) -> ShaderModule {
        let tokens = lex(self.source);
        let mut module = Scanner::new(self.source, tokens, self.file_name).scan();
        if self.warnings_as_errors {
            module.diagnostics.promote_warnings();
        }
        module
    }
}

/// Scans `source` with default options. Diagnostics are tagged with
/// `file_name`.
pub fn parse(source: &str, file_name: &str) -> ShaderModule {
    ShaderParser::new(source).file_name(file_name).parse()
}
