//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Source input and logging args every command takes.
fn with_common_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg())
        .arg(source_text_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("fxscan")
        .about("Declaration scanner for effect shader sources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(tokens_command())
}

/// Scan a shader and report diagnostics.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Scan a shader and report diagnostics")
        .override_usage(
            "\
  fxscan check <SHADER>
  fxscan check -e <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  fxscan check default.effect            # report problems, silent when clean
  fxscan check default.effect --strict   # warnings fail too
  cat default.effect | fxscan check -    # read stdin
  fxscan check -e 'uniform float4 c;'    # inline source"#,
        )
        .arg(strict_arg());

    with_common_args(cmd)
}

/// Print the declaration model as JSON.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Print scanned declarations as JSON")
        .override_usage(
            "\
  fxscan dump <SHADER>
  fxscan dump -e <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  fxscan dump default.effect             # pretty JSON
  fxscan dump default.effect --compact   # one line"#,
        )
        .arg(strict_arg())
        .arg(compact_arg());

    with_common_args(cmd)
}

/// Print the token stream.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Print the token stream of a shader")
        .override_usage(
            "\
  fxscan tokens <SHADER>
  fxscan tokens -e <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  fxscan tokens default.effect           # significant tokens
  fxscan tokens -e 'float x;' --raw      # include trivia"#,
        )
        .arg(raw_arg());

    with_common_args(cmd)
}
