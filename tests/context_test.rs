// Integration tests for building contexts from JSON and YAML

use uritemplate::{expand, Context, ContextError, Key, Value};

#[test]
fn test_json_context_shapes() {
    let context = Context::from_json_str(
        r#"{
            "name": "fred",
            "count": 12,
            "list": ["red", "green", 3],
            "indexed": {"0": "a", "1": "b"},
            "keys": {"semi": ";", "dot": "."},
            "mixed": {"0": "a", "x": "b"},
            "undef": null
        }"#,
    )
    .unwrap();

    assert_eq!(context.get("name"), Some(&Value::scalar("fred")));
    assert_eq!(context.get("count"), Some(&Value::scalar("12")));
    assert_eq!(context.get("list"), Some(&Value::list(["red", "green", "3"])));
    assert_eq!(context.get("indexed"), Some(&Value::list(["a", "b"])));
    assert_eq!(context.get("keys"), Some(&Value::map([("semi", ";"), ("dot", ".")])));
    assert_eq!(
        context.get("mixed"),
        Some(&Value::Map(vec![
            (Key::Index(0), "a".to_string()),
            (Key::Name("x".to_string()), "b".to_string()),
        ]))
    );
    assert_eq!(context.get("undef"), None);
    assert_eq!(context.len(), 6);
}

#[test]
fn test_json_map_order_drives_expansion() {
    let context = Context::from_json_str(r#"{"query": {"z": "1", "a": "2"}}"#).unwrap();
    assert_eq!(expand("{?query*}", &context), "?z=1&a=2");
}

#[test]
fn test_yaml_context() {
    let context = Context::from_yaml_str(
        "schema: http\ndomain: api.foo\ntld: [co, uk]\nquery:\n  q: bar\n  sort_by: recent\n",
    )
    .unwrap();

    assert_eq!(
        expand("{schema}://{domain}{.tld}{?query*}", &context),
        "http://api.foo.co.uk?q=bar&sort_by=recent"
    );
}

#[test]
fn test_boolean_rejected() {
    let err = Context::from_json_str(r#"{"flag": true}"#).unwrap_err();
    assert_eq!(
        err,
        ContextError::UnsupportedValue {
            name: "flag".to_string(),
            kind: "boolean".to_string()
        }
    );
}

#[test]
fn test_nested_containers_rejected() {
    let err = Context::from_json_str(r#"{"list": [["a"]]}"#).unwrap_err();
    assert!(matches!(err, ContextError::UnsupportedValue { ref name, .. } if name == "list"));

    let err = Context::from_yaml_str("m:\n  k:\n    nested: x\n").unwrap_err();
    assert!(matches!(err, ContextError::UnsupportedValue { ref name, .. } if name == "m"));
}

#[test]
fn test_top_level_must_be_object() {
    let err = Context::from_json_str("[1, 2]").unwrap_err();
    assert_eq!(err, ContextError::NotAnObject("array".to_string()));
}

#[test]
fn test_invalid_json() {
    let err = Context::from_json_str("{").unwrap_err();
    assert!(matches!(err, ContextError::Parse(_)));
}

#[test]
fn test_from_iterator() {
    let context: Context = vec![("a", "1"), ("b", "2")].into_iter().collect();
    assert_eq!(expand("{a,b}", &context), "1,2");
}
