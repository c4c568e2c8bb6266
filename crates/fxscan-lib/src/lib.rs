//! fxscan: declaration-level front end for effect shader sources.
//!
//! Scans a shader into its global parameters, structs, sampler blocks and
//! function signatures, keeping each function body as a token range that can
//! be re-emitted verbatim.
//!
//! # Example
//!
//! ```
//! use fxscan_lib::parse;
//!
//! let source = r#"
//!     uniform float4x4 ViewProj;
//!
//!     float4 PSMain(float2 uv : TEXCOORD0) : TARGET
//!     {
//!         return float4(uv, 0.0, 1.0);
//!     }
//! "#;
//!
//! let module = parse(source, "example.effect");
//! let main = module.find_function("PSMain").expect("declared above");
//! assert_eq!(module.body_text(main).trim(), "return float4(uv, 0.0, 1.0);");
//! eprint!("{}", module.diagnostics().render());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod sampler;


pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use model::{
    Aggregate, Function, Role, SamplerState, SamplerStateItem, ShaderModule, Variable,
};
pub use parser::{ShaderParser, parse};
pub use sampler::{SamplerInfo, convert, convert_checked};

/// Errors for callers that want a scan to fail as a `Result`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("shader parsing failed with {} errors", .0.error_count())]
    ParseFailed(Diagnostics),
}

pub type Result<T> = std::result::Result<T, Error>;
