//! Argument constructors shared by the `fxscan` subcommands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Shader file, or `-` for stdin (positional).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SHADER")
        .value_parser(value_parser!(PathBuf))
        .help("Shader file to scan (`-` reads stdin)")
}

/// Inline shader text (-e/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('e')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("source_path")
        .help("Inline shader text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Include trivia tokens (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Include whitespace, newline and comment tokens")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log scanner activity to stderr (-v debug, -vv trace)")
}
