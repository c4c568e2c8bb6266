use std::fmt::Write;
use std::path::PathBuf;

use fxscan_core::locate;
use fxscan_lib::lexer::{lex, token_text};

use super::source_loader::load_or_exit;

pub struct TokensArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
}

pub fn run(args: TokensArgs) {
    let loaded = load_or_exit(args.source_path.as_deref(), args.source_text.as_deref());
    print!("{}", render_tokens(&loaded.text, args.raw));
}

/// One `row:column Kind "text"` line per token. Trivia is left out unless
/// `raw` is set.
pub fn render_tokens(source: &str, raw: bool) -> String {
    let mut out = String::new();
    for token in lex(source) {
        if token.kind.is_trivia() && !raw {
            continue;
        }
        let pos = locate(source, token.span.start().into());
        writeln!(
            out,
            "{}:{} {:?} {:?}",
            pos.row,
            pos.column,
            token.kind,
            token_text(source, &token)
        )
        .expect("String write never fails");
    }
    out
}
