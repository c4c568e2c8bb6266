use std::path::PathBuf;

use fxscan_lib::{ShaderModule, ShaderParser, convert_checked};

use super::source_loader::load_or_exit;

pub struct CheckArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let loaded = load_or_exit(args.source_path.as_deref(), args.source_text.as_deref());

    let module = ShaderParser::new(&loaded.text)
        .file_name(&loaded.name)
        .warnings_as_errors(args.strict)
        .parse();

    let diagnostics = module.diagnostics();
    if !diagnostics.is_empty() {
        eprintln!(
            "{}",
            diagnostics
                .printer(&loaded.text)
                .colored(args.color)
                .render()
        );
    }

    let unknown = unknown_sampler_states(&module);
    let severity = if args.strict { "error" } else { "warning" };
    for line in &unknown {
        eprintln!("{}: {}", severity, line);
    }

    if !module.success() || (args.strict && !unknown.is_empty()) {
        std::process::exit(1);
    }

    // Silent on success, except for warnings printed above
}

/// One message per sampler state that conversion does not understand.
pub fn unknown_sampler_states(module: &ShaderModule) -> Vec<String> {
    module
        .samplers
        .iter()
        .flat_map(|sampler| {
            let (_, unknown) = convert_checked(sampler);
            unknown.into_iter().map(move |state| {
                format!(
                    "{}: sampler_state `{}`: unrecognised state `{}`",
                    module.file_name, sampler.name, state
                )
            })
        })
        .collect()
}
