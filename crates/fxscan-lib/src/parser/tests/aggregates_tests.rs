use indoc::indoc;

use super::scan;
use crate::model::Role;

#[test]
fn vertex_struct() {
    let module = scan(indoc! {"
        struct VertInOut {
            float4 pos : POSITION;
            float2 uv  : TEXCOORD0;
        };
    "});

    assert!(module.success());
    assert_eq!(module.structs.len(), 1);

    let vert = module.find_aggregate("VertInOut").expect("struct is declared");
    assert_eq!(vert.members.len(), 2);
    assert_eq!(vert.members[0].type_name, "float4");
    assert_eq!(vert.members[0].name, "pos");
    assert_eq!(vert.members[0].mapping.as_deref(), Some("POSITION"));
    assert_eq!(vert.members[1].type_name, "float2");
    assert_eq!(vert.members[1].name, "uv");
    assert_eq!(vert.members[1].mapping.as_deref(), Some("TEXCOORD0"));
    assert!(vert.members.iter().all(|m| m.role == Role::Plain));
    assert!(vert.members.iter().all(|m| m.default_value.is_empty()));
}

#[test]
fn trailing_semicolon_is_optional() {
    let module = scan(indoc! {"
        struct A { float x; }
        struct B { float y; };
    "});

    assert!(module.success());
    assert_eq!(module.structs.len(), 2);
}

#[test]
fn member_qualifier_is_recorded() {
    let module = scan("struct A { const int n; float v[3]; };");

    let a = &module.structs[0];
    assert_eq!(a.members[0].role, Role::Const);
    assert_eq!(a.members[1].array_count, 3);
    assert_eq!(a.find_member("v").map(|m| m.name.as_str()), Some("v"));
}

#[test]
fn empty_struct() {
    let module = scan("struct Empty {};");

    assert!(module.success());
    assert!(module.structs[0].members.is_empty());
}

#[test]
fn duplicate_struct_returns_first() {
    let module = scan(indoc! {"
        struct A { float first; };
        struct A { float second; };
    "});

    assert!(module.success());
    assert_eq!(module.structs.len(), 2);
    let a = module.find_aggregate("A").expect("struct is declared");
    assert_eq!(a.members[0].name, "first");
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(2,8): warning: `A` is already declared");
}

#[test]
fn lookup_is_case_sensitive() {
    let module = scan("struct Light { float3 dir; };");

    assert!(module.find_aggregate("Light").is_some());
    assert!(module.find_aggregate("light").is_none());
}

#[test]
fn missing_member_semicolon() {
    let module = scan("struct A { float x }");

    assert!(!module.success());
    assert!(module.structs[0].members.is_empty());
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(1,20): error: expected `;`");
}

#[test]
fn member_after_missing_semicolon_survives() {
    let module = scan(indoc! {"
        struct A {
            float x
            float y;
        };
    "});

    let names: Vec<_> = module.structs[0].members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["y"]);
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(3,5): error: expected `;`");
}

#[test]
fn bad_member_is_skipped() {
    let module = scan(indoc! {"
        struct A {
            float 1;
            float ok;
        };
    "});

    assert!(!module.success());
    let names: Vec<_> = module.structs[0].members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["ok"]);
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(2,11): error: expected name: found `1`");
}

#[test]
fn unclosed_struct() {
    let module = scan("struct A { float x;");

    assert!(!module.success());
    assert_eq!(module.structs[0].members.len(), 1);
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(1,10): error: missing closing `}`: struct `A`");
}
