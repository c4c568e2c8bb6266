//! Lexing layers.
//!
//! - [`base`]: character-class runs (letters, digits, whitespace, other)
//! - [`token`]: names, numbers, strings, comments and punctuation built on
//!   top of base tokens
//! - [`span`]: borrowed text views shared by both layers

pub mod base;
pub mod span;
pub mod token;

#[cfg(test)]
mod base_tests;
#[cfg(test)]
mod token_tests;

pub use base::{BaseKind, BaseLexer, BaseToken};
pub use span::TextSpan;
pub use token::{Token, TokenKind, lex, token_text};
