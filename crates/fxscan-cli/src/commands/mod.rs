pub mod check;
pub mod dump;
pub mod source_loader;
pub mod tokens;

#[cfg(test)]
mod tokens_tests;
