#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core building blocks shared by the fxscan crates.
//!
//! - [`text`]: character classes and newline units
//! - [`position`]: byte offset to 1-based row/column resolution
//! - [`numeric`]: shape validation for numeric literals
//! - [`graphics`]: graphics-subsystem enumerations and keyword lookups

pub mod graphics;
pub mod numeric;
pub mod position;
pub mod text;

#[cfg(test)]
mod graphics_tests;
#[cfg(test)]
mod position_tests;

pub use graphics::{AddressMode, SampleFilter, ShaderParamType};
pub use position::{Position, locate};
