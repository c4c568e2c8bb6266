//! Declaration model produced by the scanner.
//!
//! Everything here is owned data. Function bodies are kept as token index
//! ranges into the arena held by the same [`ShaderModule`], so they stay valid
//! for as long as the module does.

use std::ops::Range;

use serde::Serialize;

use fxscan_core::ShaderParamType;
use fxscan_core::graphics::shader_param_type;

use crate::diagnostics::Diagnostics;
use crate::lexer::{Token, token_text};

/// Storage qualifier of a variable. Uniform and const are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Role {
    #[default]
    Plain,
    Uniform,
    Const,
}

/// A global parameter, aggregate member, or function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Variable {
    pub type_name: String,
    pub name: String,
    /// Semantic binding after `:`, e.g. `POSITION`.
    pub mapping: Option<String>,
    pub role: Role,
    /// Declared array length; 0 for a scalar.
    pub array_count: u32,
    /// Encoded initializer: little-endian `f32` per component for float
    /// types, little-endian `i32` for int and bool types. Empty when absent.
    pub default_value: Vec<u8>,
}

impl Variable {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            role,
            ..Self::default()
        }
    }

    pub fn param_type(&self) -> ShaderParamType {
        shader_param_type(&self.type_name)
    }

    pub fn is_array(&self) -> bool {
        self.array_count > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SamplerStateItem {
    pub state: String,
    /// Verbatim value text, trimmed. Case is preserved.
    pub value: String,
}

/// A `sampler_state` block: ordered `state = value` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SamplerState {
    pub name: String,
    pub states: Vec<SamplerStateItem>,
}

impl SamplerState {
    /// Value of the first state named `state`, ignoring ASCII case.
    pub fn get(&self, state: &str) -> Option<&str> {
        self.states
            .iter()
            .find(|item| item.state.eq_ignore_ascii_case(state))
            .map(|item| item.value.as_str())
    }
}

/// A `struct` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Aggregate {
    pub name: String,
    pub members: Vec<Variable>,
}

impl Aggregate {
    pub fn find_member(&self, name: &str) -> Option<&Variable> {
        self.members.iter().find(|m| m.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Function {
    pub name: String,
    pub return_type: String,
    /// Semantic binding of the return value.
    pub mapping: Option<String>,
    pub params: Vec<Variable>,
    /// Token indices of the body, between (not including) the braces.
    pub body: Range<usize>,
}

/// Result of scanning one source: declarations, diagnostics, and the text and
/// tokens they refer to.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShaderModule {
    pub file_name: String,
    #[serde(skip)]
    pub(crate) source: String,
    #[serde(skip)]
    pub(crate) tokens: Vec<Token>,
    pub params: Vec<Variable>,
    pub structs: Vec<Aggregate>,
    pub samplers: Vec<SamplerState>,
    pub functions: Vec<Function>,
    #[serde(skip)]
    pub diagnostics: Diagnostics,
}

impl ShaderModule {
    /// True when no error-severity diagnostics were reported.
    pub fn success(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Converts to a `Result`, failing when errors were reported.
    pub fn into_result(self) -> crate::Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(crate::Error::ParseFailed(self.diagnostics))
        }
    }

    pub fn find_function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn find_aggregate(&self, name: &str) -> Option<&Aggregate> {
        self.structs.iter().find(|s| s.name == name)
    }

    pub fn find_sampler(&self, name: &str) -> Option<&SamplerState> {
        self.samplers.iter().find(|s| s.name == name)
    }

    pub fn find_param(&self, name: &str) -> Option<&Variable> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Tokens of a function body, trivia included.
    ///
    /// # Panics
    /// If `func` did not come from this module.
    pub fn body_tokens(&self, func: &Function) -> &[Token] {
        &self.tokens[func.body.clone()]
    }

    /// Source text covered by a function body, exactly as written.
    pub fn body_text(&self, func: &Function) -> &str {
        let tokens = self.body_tokens(func);
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => {
                let start = usize::from(first.span.start());
                let end = usize::from(last.span.end());
                &self.source[start..end]
            }
            _ => "",
        }
    }

    /// Text of a single token from the arena.
    pub fn token_text(&self, token: &Token) -> &str {
        token_text(&self.source, token)
    }
}
