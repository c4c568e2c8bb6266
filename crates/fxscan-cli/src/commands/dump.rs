use std::path::PathBuf;

use serde::Serialize;

use fxscan_core::Position;
use fxscan_lib::{
    DiagnosticKind, SamplerInfo, Severity, ShaderModule, ShaderParser, convert_checked,
};

use super::source_loader::load_or_exit;
use crate::error::CliError;

pub struct DumpArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub strict: bool,
    pub compact: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct DumpOutput<'a> {
    success: bool,
    #[serde(flatten)]
    module: &'a ShaderModule,
    bodies: Vec<FunctionBody<'a>>,
    sampler_info: Vec<NamedSamplerInfo<'a>>,
    diagnostics: Vec<DiagnosticView<'a>>,
}

#[derive(Serialize)]
struct FunctionBody<'a> {
    name: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct NamedSamplerInfo<'a> {
    name: &'a str,
    #[serde(flatten)]
    info: SamplerInfo,
    unknown_states: Vec<String>,
}

#[derive(Serialize)]
struct DiagnosticView<'a> {
    severity: Severity,
    kind: DiagnosticKind,
    #[serde(flatten)]
    position: Position,
    message: &'a str,
}

pub fn run(args: DumpArgs) {
    let loaded = load_or_exit(args.source_path.as_deref(), args.source_text.as_deref());

    let module = ShaderParser::new(&loaded.text)
        .file_name(&loaded.name)
        .warnings_as_errors(args.strict)
        .parse();

    match dump_json(&module, args.compact) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    if !module.success() {
        eprintln!(
            "{}",
            module
                .diagnostics()
                .printer(&loaded.text)
                .colored(args.color)
                .render()
        );
        std::process::exit(1);
    }
}

/// The declaration model, converted sampler settings and diagnostics as JSON.
pub fn dump_json(module: &ShaderModule, compact: bool) -> Result<String, CliError> {
    let output = DumpOutput {
        success: module.success(),
        module,
        bodies: module
            .functions
            .iter()
            .map(|f| FunctionBody {
                name: &f.name,
                text: module.body_text(f).trim(),
            })
            .collect(),
        sampler_info: module
            .samplers
            .iter()
            .map(|s| {
                let (info, unknown_states) = convert_checked(s);
                NamedSamplerInfo {
                    name: &s.name,
                    info,
                    unknown_states,
                }
            })
            .collect(),
        diagnostics: module
            .diagnostics()
            .iter()
            .map(|d| DiagnosticView {
                severity: d.severity(),
                kind: d.kind(),
                position: Position {
                    row: d.row(),
                    column: d.column(),
                },
                message: d.message(),
            })
            .collect(),
    };

    let json = if compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    Ok(json)
}
