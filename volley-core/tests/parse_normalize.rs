use volley_core::{parse_endpoints_str, Body, EndpointSpec, Method, SourceFormat};

fn mixed_json() -> &'static str {
    r#"
[
  "https://example.com/task1",
  {
    "url": "https://example.com/task2",
    "method": "get",
    "headers": { "X-Token": "abc" },
    "params": { "page": "1" },
    "timeout": 5
  },
  {
    "url": "https://example.com/task3",
    "json": { "key": "value" },
    "body": "ignored when json is present"
  }
]
"#
}

#[test]
fn parse_json_mixed_shapes() {
    let parsed = parse_endpoints_str(mixed_json(), SourceFormat::Json).unwrap();
    assert_eq!(parsed.endpoints.len(), 3);
    assert!(matches!(parsed.endpoints[0], EndpointSpec::Url(_)));
    assert!(matches!(parsed.endpoints[1], EndpointSpec::Full(_)));
}

#[test]
fn parse_auto_detects_json() {
    let parsed = parse_endpoints_str(mixed_json(), SourceFormat::Auto).unwrap();
    assert_eq!(parsed.format, SourceFormat::Json);
}

#[test]
fn parse_yaml_list() {
    let yaml = r#"
- https://example.com/a
- url: https://example.com/b
  method: DELETE
  timeout: 10
"#;
    let parsed = parse_endpoints_str(yaml, SourceFormat::Yaml).unwrap();
    assert_eq!(parsed.endpoints.len(), 2);
}

#[test]
fn parse_auto_detects_yaml() {
    let yaml = "- https://example.com/a\n- https://example.com/b\n";
    let parsed = parse_endpoints_str(yaml, SourceFormat::Auto).unwrap();
    assert_eq!(parsed.format, SourceFormat::Yaml);
}

#[test]
fn parse_rejects_non_list() {
    let err = parse_endpoints_str(r#"{"url": "https://example.com"}"#, SourceFormat::Json)
        .unwrap_err();
    assert!(format!("{err}").contains("JSON"));
}

#[test]
fn parse_rejects_unknown_method() {
    let input = r#"[{"url": "https://example.com", "method": "BREW"}]"#;
    assert!(parse_endpoints_str(input, SourceFormat::Json).is_err());
}

#[test]
fn method_round_trips_through_from_str() {
    assert_eq!("delete".parse::<Method>().unwrap(), Method::Delete);
    assert_eq!(Method::Patch.as_str(), "PATCH");
    assert!("BREW".parse::<Method>().is_err());
}

#[test]
fn bare_url_normalizes_to_post_with_defaults() {
    let endpoint = EndpointSpec::Url("https://example.com/hook".to_string()).normalize();
    assert_eq!(endpoint.url, "https://example.com/hook");
    assert_eq!(endpoint.method, Method::Post);
    assert!(endpoint.headers.is_empty());
    assert!(endpoint.params.is_empty());
    assert!(endpoint.body.is_none());
    assert_eq!(endpoint.timeout_secs, 30);
}

#[test]
fn method_defaults_to_post_and_is_case_insensitive() {
    let parsed = parse_endpoints_str(mixed_json(), SourceFormat::Json).unwrap();
    let second = parsed.endpoints[1].clone().normalize();
    assert_eq!(second.method, Method::Get);

    let third = parsed.endpoints[2].clone().normalize();
    assert_eq!(third.method, Method::Post);
}

#[test]
fn json_field_takes_precedence_over_body() {
    let parsed = parse_endpoints_str(mixed_json(), SourceFormat::Json).unwrap();
    let third = parsed.endpoints[2].clone().normalize();
    match third.body {
        Some(Body::Json(value)) => assert_eq!(value["key"], "value"),
        other => panic!("expected structured body, got {other:?}"),
    }
}

#[test]
fn string_body_is_raw_and_object_body_is_structured() {
    let input = r#"
[
  { "url": "https://example.com/raw", "body": "plain text payload" },
  { "url": "https://example.com/obj", "body": { "a": 1 } }
]
"#;
    let parsed = parse_endpoints_str(input, SourceFormat::Json).unwrap();
    let raw = parsed.endpoints[0].clone().normalize();
    assert_eq!(raw.body, Some(Body::Raw("plain text payload".to_string())));

    let structured = parsed.endpoints[1].clone().normalize();
    assert!(matches!(structured.body, Some(Body::Json(_))));
}
