use volley_core::template::{has_vars, resolve, MapVars, TemplateError};

fn vars(pairs: &[(&str, &str)]) -> MapVars {
    let mut v = MapVars::default();
    for (name, value) in pairs {
        v.set(*name, *value);
    }
    v
}

#[test]
fn resolves_single_variable() {
    let v = vars(&[("TOKEN", "secret123")]);
    let out = resolve(r#"{"auth": "${TOKEN}"}"#, &v).unwrap();
    assert_eq!(out, r#"{"auth": "secret123"}"#);
}

#[test]
fn resolves_repeated_and_multiple_variables() {
    let v = vars(&[("HOST", "example.com"), ("KEY", "k1")]);
    let out = resolve("https://${HOST}/a?key=${KEY}&again=${KEY}", &v).unwrap();
    assert_eq!(out, "https://example.com/a?key=k1&again=k1");
}

#[test]
fn passthrough_without_references() {
    let v = MapVars::default();
    let input = r#"[{"url": "https://example.com", "body": "{not a var}"}]"#;
    assert_eq!(resolve(input, &v).unwrap(), input);
}

#[test]
fn dollar_without_brace_is_literal() {
    let v = MapVars::default();
    assert_eq!(resolve("cost: $10", &v).unwrap(), "cost: $10");
}

#[test]
fn unresolved_variable_reports_its_name() {
    let v = MapVars::default();
    let err = resolve("${MISSING_SECRET}", &v).unwrap_err();
    assert_eq!(
        err,
        TemplateError::Unresolved {
            name: "MISSING_SECRET".to_string()
        }
    );
    assert!(format!("{err}").contains("MISSING_SECRET"));
}

#[test]
fn unclosed_reference_is_rejected() {
    let v = vars(&[("A", "1")]);
    assert_eq!(resolve("prefix ${A", &v).unwrap_err(), TemplateError::Unclosed);
}

#[test]
fn empty_reference_is_rejected() {
    let v = MapVars::default();
    assert_eq!(resolve("${}", &v).unwrap_err(), TemplateError::EmptyName);
}

#[test]
fn detects_references() {
    assert!(has_vars("a ${B} c"));
    assert!(!has_vars("plain"));
    assert!(!has_vars("open ${never closed"));
}
