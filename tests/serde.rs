#![cfg(feature = "serde")]

use popu::{render, render_structure, Options, Value};

#[test]
fn test_json_context() {
    let ctx: Value = serde_json::from_str(r#"{"a": {"b": [1, "x", null]}, "flag": true}"#).unwrap();
    assert_eq!(render("${a.b.1}", &ctx).unwrap(), Value::from("x"));
    assert_eq!(render("${a.b.0}", &ctx).unwrap(), Value::from(1));
    assert_eq!(render("${flag}", &ctx).unwrap(), Value::from(true));
}

#[test]
fn test_render_structure_to_json() {
    let ctx: Value = serde_json::from_str(r#"{"host": "db", "ports": [5432, 5433]}"#).unwrap();
    let node: Value =
        serde_json::from_str(r#"{"url_${host}": "postgres://${host}:${ports.0}", "all": "${ports}"}"#).unwrap();

    let rendered = render_structure(&node, &ctx).unwrap();
    assert_eq!(
        serde_json::to_string(&rendered).unwrap(),
        r#"{"url_db":"postgres://db:5432","all":[5432,5433]}"#
    );
}

#[test]
fn test_options_from_json() {
    let options: Options = serde_json::from_str(r#"{"special_vars": ["?"], "ignore_errors": true}"#).unwrap();
    assert_eq!(options.special_vars, vec!['?']);
    assert!(options.ignore_errors);
    assert!(options.coercion.is_none());
}
