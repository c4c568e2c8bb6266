use super::base::{BaseKind, BaseLexer};

fn kinds(source: &str, ignore_whitespace: bool) -> Vec<(BaseKind, &str, bool)> {
    let mut lexer = BaseLexer::new(source);
    let mut out = Vec::new();
    while let Some(t) = lexer.next_token(ignore_whitespace) {
        out.push((t.kind, t.text(), t.passed_whitespace));
    }
    out
}

#[test]
fn maximal_munch_runs() {
    assert_eq!(
        kinds("float4x4", false),
        vec![
            (BaseKind::Letters, "float", false),
            (BaseKind::Digits, "4", false),
            (BaseKind::Letters, "x", false),
            (BaseKind::Digits, "4", false),
        ]
    );
}

#[test]
fn whitespace_is_one_character_per_token() {
    assert_eq!(
        kinds("a \r\n1", false),
        vec![
            (BaseKind::Letters, "a", false),
            (BaseKind::Whitespace, " ", false),
            (BaseKind::Whitespace, "\r", false),
            (BaseKind::Whitespace, "\n", false),
            (BaseKind::Digits, "1", false),
        ]
    );
}

#[test]
fn ignoring_whitespace_marks_the_next_token() {
    assert_eq!(
        kinds("a \r\n\n\r b;c", true),
        vec![
            (BaseKind::Letters, "a", false),
            (BaseKind::Letters, "b", true),
            (BaseKind::Other, ";", false),
            (BaseKind::Letters, "c", false),
        ]
    );
}

#[test]
fn other_characters_stand_alone() {
    assert_eq!(
        kinds("_=>é", false),
        vec![
            (BaseKind::Other, "_", false),
            (BaseKind::Other, "=", false),
            (BaseKind::Other, ">", false),
            (BaseKind::Other, "é", false),
        ]
    );
}

#[test]
fn end_of_input() {
    let mut lexer = BaseLexer::new("   ");
    assert!(lexer.next_token(true).is_none());
    assert!(BaseLexer::new("").next_token(false).is_none());
}

#[test]
fn reset_rewinds() {
    let mut lexer = BaseLexer::new("ab 12");
    lexer.next_token(true);
    lexer.next_token(true);
    assert_eq!(lexer.offset(), 5);

    lexer.reset();
    let first = lexer.next_token(true).unwrap();
    assert_eq!(first.text(), "ab");
}

#[test]
fn tokens_reconstruct_the_source() {
    let sources = [
        "uniform float4x4 ViewProj;\r\n",
        "struct V { float4 pos : POSITION; };\n\r// done",
        "  \t\t12abc..3e-5  é ü \0 ~!",
        "",
    ];
    for source in sources {
        let rebuilt: String = BaseLexer::new(source).map(|t| t.text()).collect();
        assert_eq!(rebuilt, source);
    }
}
