use super::token::{TokenKind, lex, token_text};

/// Format tokens without trivia (default for most tests)
fn snapshot(input: &str) -> String {
    format_tokens(input, false)
}

/// Format tokens with trivia included
fn snapshot_raw(input: &str) -> String {
    format_tokens(input, true)
}

fn format_tokens(input: &str, include_trivia: bool) -> String {
    let mut out = String::new();
    for token in lex(input) {
        if include_trivia || !token.kind.is_trivia() {
            out.push_str(&format!(
                "{:?} {:?}\n",
                token.kind,
                token_text(input, &token)
            ));
        }
    }
    out
}

#[test]
fn uniform_declaration() {
    insta::assert_snapshot!(snapshot("uniform float4x4 ViewProj;"), @r#"
    Name "uniform"
    Name "float4x4"
    Name "ViewProj"
    Punct ";"
    "#);
}

#[test]
fn numbers_are_absorbed_whole() {
    insta::assert_snapshot!(snapshot("0x1F 3.14e-2f .5 12abc 1e+3 2-1"), @r#"
    Number "0x1F"
    Number "3.14e-2f"
    Number ".5"
    Number "12abc"
    Number "1e+3"
    Number "2"
    Punct "-"
    Number "1"
    "#);
}

#[test]
fn names_with_underscores() {
    insta::assert_snapshot!(snapshot("_tmp sampler_state a_1"), @r#"
    Name "_tmp"
    Name "sampler_state"
    Name "a_1"
    "#);
}

#[test]
fn trivia_is_kept_raw() {
    insta::assert_snapshot!(snapshot_raw("a \t// note\r\n/* x */b"), @r#"
    Name "a"
    Whitespace " \t"
    LineComment "// note"
    Newline "\r\n"
    BlockComment "/* x */"
    Name "b"
    "#);
}

#[test]
fn newline_pairs_are_single_units() {
    insta::assert_snapshot!(snapshot_raw("\n\r\n\n\r"), @r#"
    Newline "\n\r"
    Newline "\n"
    Newline "\n\r"
    "#);
}

#[test]
fn strings_and_escapes() {
    insta::assert_snapshot!(snapshot(r#""a\"b" x"#), @r#"
    String "\"a\\\"b\""
    Name "x"
    "#);
}

#[test]
fn unterminated_string_stops_at_newline() {
    let tokens = lex("\"abc\nx");
    assert_eq!(tokens[0].kind, TokenKind::Unterminated);
    assert_eq!(token_text("\"abc\nx", &tokens[0]), "\"abc");
    assert_eq!(tokens[1].kind, TokenKind::Newline);
}

#[test]
fn unterminated_block_comment_runs_to_end() {
    let source = "a /* never closed";
    let tokens = lex(source);
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Unterminated);
    assert_eq!(token_text(source, last), "/* never closed");
}

#[test]
fn lexing_is_lossless() {
    let source = "struct V {\r\n  float4 pos : POSITION; // p\n\r};\t\"s\" /* c */ 1.5f é";
    let rebuilt: String = lex(source)
        .iter()
        .map(|t| token_text(source, t))
        .collect();
    assert_eq!(rebuilt, source);
}
