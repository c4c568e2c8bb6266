mod aggregates_tests;
mod functions_tests;
mod samplers_tests;

use crate::model::ShaderModule;
use crate::parser::parse;

fn scan(source: &str) -> ShaderModule {
    parse(source, "t.effect")
}
