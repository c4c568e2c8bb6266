//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Each subcommand accepts its flags
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Conflicting inputs are rejected

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, dump_command, tokens_command};

#[test]
fn check_extracts_path_and_flags() {
    let m = check_command()
        .try_get_matches_from(["check", "default.effect", "--strict", "--color", "never"])
        .expect("check args parse");
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.source_path, Some(PathBuf::from("default.effect")));
    assert_eq!(params.source_text, None);
    assert!(params.strict);
    assert_eq!(params.color, ColorChoice::Never);
    assert_eq!(params.verbose, 0);
}

#[test]
fn check_accepts_inline_source() {
    let m = check_command()
        .try_get_matches_from(["check", "-e", "float x;"])
        .expect("check args parse");
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.source_path, None);
    assert_eq!(params.source_text.as_deref(), Some("float x;"));
    assert!(!params.strict);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_accepts_stdin_dash() {
    let m = check_command()
        .try_get_matches_from(["check", "-"])
        .expect("check args parse");
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.source_path, Some(PathBuf::from("-")));
}

#[test]
fn path_and_inline_source_conflict() {
    let result = check_command().try_get_matches_from(["check", "a.effect", "-e", "float x;"]);

    assert!(result.is_err());
}

#[test]
fn verbose_is_counted() {
    let m = dump_command()
        .try_get_matches_from(["dump", "a.effect", "-vv"])
        .expect("dump args parse");
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.verbose, 2);
}

#[test]
fn dump_extracts_compact() {
    let m = dump_command()
        .try_get_matches_from(["dump", "a.effect", "--compact", "--strict"])
        .expect("dump args parse");
    let params = DumpParams::from_matches(&m);

    assert!(params.compact);
    assert!(params.strict);
    assert_eq!(params.source_path, Some(PathBuf::from("a.effect")));
}

#[test]
fn tokens_extracts_raw() {
    let m = tokens_command()
        .try_get_matches_from(["tokens", "-e", "float x;", "--raw", "--color", "always"])
        .expect("tokens args parse");
    let params = TokensParams::from_matches(&m);

    assert!(params.raw);
    assert_eq!(params.color, ColorChoice::Always);
    assert_eq!(params.source_text.as_deref(), Some("float x;"));
}

#[test]
fn tokens_rejects_strict() {
    let result = tokens_command().try_get_matches_from(["tokens", "a.effect", "--strict"]);

    assert!(result.is_err());
}

#[test]
fn invalid_color_is_rejected() {
    let result = check_command().try_get_matches_from(["check", "a.effect", "--color", "sometimes"]);

    assert!(result.is_err());
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["fxscan"]);

    assert!(result.is_err());
}

#[test]
fn check_help_lists_flags() {
    let help = check_command().render_help().to_string();

    assert!(help.contains("--strict"));
    assert!(help.contains("--source"));
    assert!(help.contains("--verbose"));
}

#[test]
fn cli_builds_consistently() {
    build_cli().debug_assert();
}
