use indoc::indoc;

use super::scan;

#[test]
fn sampler_block() {
    let module = scan(indoc! {"
        sampler_state def_sampler {
            Filter      = Linear;
            AddressU    = Clamp;
            BorderColor = #FF000080;
        };
    "});

    assert!(module.success());
    let sampler = module.find_sampler("def_sampler").expect("sampler is declared");
    let pairs: Vec<_> = sampler
        .states
        .iter()
        .map(|s| (s.state.as_str(), s.value.as_str()))
        .collect();
    assert_eq!(
        pairs,
        [
            ("Filter", "Linear"),
            ("AddressU", "Clamp"),
            ("BorderColor", "#FF000080"),
        ]
    );
}

#[test]
fn value_is_trimmed_and_keeps_case() {
    let module = scan("sampler_state s { Filter =   MIN_MAG_MIP_Point  ; }");

    assert_eq!(module.samplers[0].get("filter"), Some("MIN_MAG_MIP_Point"));
}

#[test]
fn multi_token_value_is_verbatim() {
    let module = scan("sampler_state s { AddressU = Mirror  Once; }");

    assert_eq!(module.samplers[0].states[0].value, "Mirror  Once");
}

#[test]
fn trailing_comment_is_not_part_of_value() {
    let module = scan("sampler_state s { MaxAnisotropy = 4 /* max */ ; }");

    assert_eq!(module.samplers[0].states[0].value, "4");
}

#[test]
fn missing_value() {
    let module = scan("sampler_state s { Filter = ; AddressU = Wrap; }");

    assert!(!module.success());
    assert_eq!(module.samplers[0].states.len(), 1);
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(1,28): error: expected sampler state value: for `Filter`");
}

#[test]
fn missing_equals() {
    let module = scan("sampler_state s { Filter Linear; AddressU = Wrap; }");

    assert!(!module.success());
    assert_eq!(module.samplers[0].get("AddressU"), Some("Wrap"));
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(1,26): error: expected `=`");
}

#[test]
fn unclosed_sampler() {
    let module = scan("sampler_state s { Filter = Point;");

    assert!(!module.success());
    assert_eq!(module.samplers[0].states.len(), 1);
    insta::assert_snapshot!(module.diagnostics().render(), @"t.effect(1,17): error: missing closing `}`: sampler_state `s`");
}
