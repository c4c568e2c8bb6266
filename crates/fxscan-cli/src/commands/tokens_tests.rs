use super::tokens::render_tokens;

#[test]
fn significant_tokens() {
    insta::assert_snapshot!(render_tokens("float4 c;\n// note\nint n = 0x1F;", false), @r#"
    1:1 Name "float4"
    1:8 Name "c"
    1:9 Punct ";"
    3:1 Name "int"
    3:5 Name "n"
    3:7 Punct "="
    3:9 Number "0x1F"
    3:13 Punct ";"
    "#);
}

#[test]
fn raw_includes_trivia() {
    insta::assert_snapshot!(render_tokens("a /*b*/\r\n", true), @r#"
    1:1 Name "a"
    1:2 Whitespace " "
    1:3 BlockComment "/*b*/"
    1:8 Newline "\r\n"
    "#);
}
