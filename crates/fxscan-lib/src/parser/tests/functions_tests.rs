use indoc::indoc;

use super::scan;
use crate::lexer::TokenKind;
use crate::model::Role;

#[test]
fn signature_and_body() {
    let module = scan(indoc! {"
        float4 PSMain(VertInOut vert_in, uniform float gain, out float3 n : NORMAL) : TARGET
        {
            return vert_in.uv.xyxy * gain;
        }
    "});

    assert!(module.success());
    let func = module.find_function("PSMain").expect("function is declared");
    assert_eq!(func.return_type, "float4");
    assert_eq!(func.mapping.as_deref(), Some("TARGET"));

    let params: Vec<_> = func
        .params
        .iter()
        .map(|p| (p.type_name.as_str(), p.name.as_str(), p.role))
        .collect();
    assert_eq!(
        params,
        [
            ("VertInOut", "vert_in", Role::Plain),
            ("float", "gain", Role::Uniform),
            ("float3", "n", Role::Plain),
        ]
    );
    assert_eq!(func.params[2].mapping.as_deref(), Some("NORMAL"));
    assert_eq!(module.body_text(func).trim(), "return vert_in.uv.xyxy * gain;");
}

#[test]
fn body_excludes_braces() {
    let module = scan("float f() { return 1; }");

    let func = &module.functions[0];
    let kinds: Vec<_> = module
        .body_tokens(func)
        .iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| t.kind)
        .collect();
    assert_eq!(kinds, [TokenKind::Name, TokenKind::Number, TokenKind::Punct]);
    assert_eq!(module.body_text(func), " return 1; ");
}

#[test]
fn nested_braces() {
    let module = scan("void f() { if (a) { b(); } }");

    assert!(module.success());
    assert_eq!(module.body_text(&module.functions[0]).trim(), "if (a) { b(); }");
}

#[test]
fn empty_body() {
    let module = scan("void f() {}");

    let func = &module.functions[0];
    assert!(func.body.is_empty());
    assert_eq!(module.body_text(func), "");
}

#[test]
fn void_parameter_list() {
    let module = scan("float4 f(void) { return 0; }");

    assert!(module.success());
    assert!(module.functions[0].params.is_empty());
}

#[test]
fn array_parameter() {
    let module = scan("float sum(float w[4], inout int n) { return 0; }");

    let params = &module.functions[0].params;
    assert_eq!(params[0].array_count, 4);
    assert_eq!(params[1].name, "n");
}

#[test]
fn body_of_functions_in_sequence() {
    let module = scan(indoc! {"
        float a() { return 1; }
        float b() { return 2; }
    "});

    assert_eq!(module.functions.len(), 2);
    let b = module.find_function("b").expect("function is declared");
    assert_eq!(module.body_text(b).trim(), "return 2;");
}

#[test]
fn unclosed_body_runs_to_end() {
    let module = scan("void f() { return;");

    assert!(!module.success());
    let func = &module.functions[0];
    assert_eq!(func.body.end, module.tokens().len());
    assert_eq!(module.body_text(func).trim(), "return;");
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(1,10): error: missing closing `}`: body of `f`");
}

#[test]
fn prototype_without_body() {
    let module = scan(indoc! {"
        float f(int a);
        float g;
    "});

    assert!(!module.success());
    assert!(module.functions.is_empty());
    assert_eq!(module.params[0].name, "g");
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(1,15): error: expected `{` to start function body: `f` ends at `;`");
}

#[test]
fn missing_parameter_name() {
    let module = scan("float f(int) { return 0; }");

    assert!(!module.success());
    assert_eq!(module.functions.len(), 1);
    assert!(module.functions[0].params.is_empty());
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(1,12): error: expected name: found `)`");
}

#[test]
fn missing_comma() {
    let module = scan("float f(int a int b) { return 0; }");

    assert!(!module.success());
    assert_eq!(module.functions.len(), 1);
    assert_eq!(module.functions[0].params.len(), 1);
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(1,15): error: expected `,` or `)`");
}

#[test]
fn unclosed_parameter_list() {
    let module = scan("float f(int a");

    assert!(!module.success());
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(1,8): error: missing closing `)`");
}

#[test]
fn uniform_function_is_error() {
    let module = scan("uniform float f() { return 0; }");

    assert!(!module.success());
    assert_eq!(module.functions.len(), 1);
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(1,1): error: `uniform` is not allowed here");
}
