//! End-to-end parameter tests
//!
//! Fragments go through the public facade: parse, resolve or evaluate,
//! serialize, and format for display.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;
use sqlparam::{
    CodecError, ParamBuilder, StructField, Type, TypedValue, Value, build_params, format_typed,
};

#[test]
fn test_type_and_literal_entries() {
    let params = build_params([("a", "INT64"), ("b", "'x'")], true).unwrap();
    assert_eq!(params["a"], TypedValue::null(Type::Int64));
    assert_eq!(params["b"], TypedValue::new(Type::String, "x"));
}

#[test]
fn test_numeric_text_is_preserved() {
    let params = build_params([("n", "NUMERIC '1.0'")], false).unwrap();
    assert_eq!(params["n"], TypedValue::new(Type::Numeric, "1.0"));
}

#[rstest]
#[case("BOOL", Type::Bool)]
#[case("INT64", Type::Int64)]
#[case("FLOAT32", Type::Float32)]
#[case("FLOAT64", Type::Float64)]
#[case("STRING", Type::String)]
#[case("BYTES", Type::Bytes)]
#[case("DATE", Type::Date)]
#[case("TIMESTAMP", Type::Timestamp)]
#[case("NUMERIC", Type::Numeric)]
#[case("JSON", Type::Json)]
fn test_scalar_type_params_are_null(#[case] code: &str, #[case] ty: Type) {
    let typed = ParamBuilder::new(true).build_param(code).unwrap();
    assert_eq!(typed, TypedValue::null(ty));
    assert_eq!(format_typed(&typed).unwrap(), "<null>");
}

#[test]
fn test_struct_type_param() {
    let typed = ParamBuilder::new(true)
        .build_param("Struct<x Int64>")
        .unwrap();
    assert_eq!(
        typed,
        TypedValue::new(
            Type::structure(vec![StructField::new("x", Type::Int64)]),
            Value::List(vec![Value::Null]),
        )
    );
    assert_eq!(format_typed(&typed).unwrap(), "(<null> AS x)");
}

#[rstest]
#[case("NULL")]
#[case("TRUE")]
#[case("42")]
#[case("0x2A")]
#[case("3.14")]
#[case("'foo'")]
#[case("b'foo'")]
#[case("DATE '2024-02-29'")]
#[case("TIMESTAMP '2024-02-29T12:00:00Z'")]
#[case("NUMERIC '3.5'")]
#[case("JSON '[1, 2]'")]
#[case("[1, 2, 3]")]
#[case("[]")]
#[case("STRUCT(1 AS x, 'a')")]
#[case("[(1, 'foo')]")]
#[case("STRUCT<x INT64, y STRING>(1, 'a')")]
fn test_every_evaluated_literal_formats(#[case] code: &str) {
    let typed = ParamBuilder::new(false).build_param(code).unwrap();
    assert!(typed.is_congruent(), "{code}: {typed:?}");
    assert!(format_typed(&typed).is_ok(), "{code}");
}

#[test]
fn test_parameter_map_serializes_in_input_order() {
    let params = build_params(
        [("ids", "[1, 2]"), ("name", "STRING"), ("flag", "TRUE")],
        true,
    )
    .unwrap();
    let json = serde_json::to_string(&params).unwrap();
    assert_snapshot!(json, @r#"{"ids":{"type":{"code":"ARRAY","arrayElementType":{"code":"INT64"}},"value":["1","2"]},"name":{"type":{"code":"STRING"},"value":null},"flag":{"type":{"code":"BOOL"},"value":true}}"#);
}

#[test]
fn test_wire_round_trip_then_format() {
    let typed = ParamBuilder::new(false)
        .build_param("STRUCT(b'\\x01' AS raw, [DATE '1970-01-01'] AS days)")
        .unwrap();
    let json = serde_json::to_string(&typed).unwrap();
    let back: TypedValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, typed);
    assert_eq!(
        format_typed(&back).unwrap(),
        "(0x01 AS raw, [1970-01-01] AS days)"
    );
}

#[rstest]
#[case("limit", "INT63", true)]
#[case("ids", "[1,", false)]
#[case("col", "some_column", false)]
#[case("big", "99999999999999999999", false)]
fn test_errors_carry_param_name(#[case] name: &str, #[case] code: &str, #[case] permit: bool) {
    let err = build_params([(name, code)], permit).unwrap_err();
    match &err {
        CodecError::Param { name: found, .. } => assert_eq!(found, name),
        other => panic!("Expected param error, got {:?}", other),
    }
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_literal_error_wins_when_both_fail() {
    let err = build_params([("p", "[1,")], true).unwrap_err();
    let cause = err.root_cause();
    match cause {
        CodecError::Syntax { grammar, .. } => {
            assert_eq!(*grammar, sqlparam::diagnostics::Grammar::Literal)
        }
        other => panic!("Expected literal syntax error, got {:?}", other),
    }
}
