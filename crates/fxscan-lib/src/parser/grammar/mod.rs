//! Declaration grammar.
//!
//! All `parse_*` methods are implemented as an extension of `Scanner`, one
//! file per declaration form. Function bodies are bounded, never parsed.

mod aggregates;
mod functions;
mod initializers;
mod items;
mod samplers;
mod variables;
