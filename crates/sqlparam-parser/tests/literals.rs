//! Tests for parsing literal fragments
//!
//! Covers:
//! - Scalar literals (NULL, booleans, integers, floats, strings, bytes)
//! - Typed string literals (DATE, TIMESTAMP, NUMERIC, JSON)
//! - Array literals with and without element type annotations
//! - The three struct literal forms
//! - Non-literal atoms and syntax errors

use pretty_assertions::assert_eq;
use rstest::rstest;
use sqlparam_ast::{
    Expression, FloatLiteral, IntegerLiteral, Literal, StructExpr, TypeSpecifier,
};
use sqlparam_diagnostics::{CodecError, Grammar};
use sqlparam_parser::parse_expression;

fn parse_expr(input: &str) -> Expression {
    parse_expression(input).unwrap_or_else(|e| panic!("Failed to parse '{}': {:?}", input, e))
}

fn assert_literal(expr: &Expression) -> &Literal {
    match expr {
        Expression::Literal(lit) => lit,
        _ => panic!("Expected Literal, got: {:?}", expr),
    }
}

#[rstest]
#[case("NULL", Literal::Null)]
#[case("null", Literal::Null)]
#[case("TRUE", Literal::Boolean(true))]
#[case("False", Literal::Boolean(false))]
fn test_keyword_literals(#[case] input: &str, #[case] expected: Literal) {
    let expr = parse_expr(input);
    assert_eq!(assert_literal(&expr), &expected);
}

#[rstest]
#[case("42", "42", 10)]
#[case("-42", "-42", 10)]
#[case("+7", "+7", 10)]
#[case("0x1F", "1F", 16)]
#[case("-0xff", "-ff", 16)]
#[case("99999999999999999999", "99999999999999999999", 10)]
fn test_integer_literals(#[case] input: &str, #[case] text: &str, #[case] radix: u32) {
    let expr = parse_expr(input);
    assert_eq!(
        assert_literal(&expr),
        &Literal::Integer(IntegerLiteral {
            text: text.to_string(),
            radix,
        })
    );
}

#[rstest]
#[case("1.5")]
#[case("-1.5")]
#[case(".5")]
#[case("1.")]
#[case("1e10")]
#[case("2.5E-3")]
fn test_float_literals(#[case] input: &str) {
    let expr = parse_expr(input);
    assert_eq!(
        assert_literal(&expr),
        &Literal::Float(FloatLiteral::new(input))
    );
}

#[rstest]
#[case(r#""foo""#, "foo")]
#[case("'foo'", "foo")]
#[case(r"'it\'s'", "it's")]
#[case(r#"'say "hi"'"#, r#"say "hi""#)]
#[case(r"'tab\there'", "tab\there")]
#[case(r"'é'", "é")]
#[case(r"r'\n'", r"\n")]
#[case("'''multi\nline'''", "multi\nline")]
#[case(r#""""a "quoted" word""""#, r#"a "quoted" word"#)]
fn test_string_literals(#[case] input: &str, #[case] expected: &str) {
    let expr = parse_expr(input);
    assert_eq!(
        assert_literal(&expr),
        &Literal::String(expected.to_string())
    );
}

#[rstest]
#[case(r#"b"foo""#, b"foo".to_vec())]
#[case(r"B'\x00\xff'", vec![0x00, 0xff])]
#[case(r"br'\x00'", br"\x00".to_vec())]
#[case(r"rb'\x00'", br"\x00".to_vec())]
fn test_bytes_literals(#[case] input: &str, #[case] expected: Vec<u8>) {
    let expr = parse_expr(input);
    assert_eq!(assert_literal(&expr), &Literal::Bytes(expected));
}

#[test]
fn test_typed_string_literals() {
    assert_eq!(
        assert_literal(&parse_expr("DATE '1970-01-01'")),
        &Literal::Date("1970-01-01".into())
    );
    assert_eq!(
        assert_literal(&parse_expr(r#"TIMESTAMP "1970-01-01T00:00:00Z""#)),
        &Literal::Timestamp("1970-01-01T00:00:00Z".into())
    );
    assert_eq!(
        assert_literal(&parse_expr("numeric '1.0'")),
        &Literal::Numeric("1.0".into())
    );
    assert_eq!(
        assert_literal(&parse_expr(r#"JSON '{"a": 1}'"#)),
        &Literal::Json(r#"{"a": 1}"#.into())
    );
}

#[test]
fn test_array_literals() {
    let Expression::Array(array) = parse_expr("[1, 2, 3]") else {
        panic!("expected array");
    };
    assert!(array.element_type.is_none());
    assert_eq!(array.elements.len(), 3);

    let Expression::Array(array) = parse_expr("ARRAY[]") else {
        panic!("expected array");
    };
    assert!(array.elements.is_empty());

    let Expression::Array(array) = parse_expr("ARRAY<INT64>[]") else {
        panic!("expected array");
    };
    assert_eq!(array.element_type, Some(TypeSpecifier::named("INT64")));
}

#[test]
fn test_nested_arrays() {
    let expr = parse_expr("[[1], [2, 3]]");
    assert_eq!(expr.to_string(), "[[1], [2, 3]]");
}

#[test]
fn test_typeless_struct() {
    let Expression::Struct(StructExpr::Typeless(typeless)) = parse_expr("STRUCT(1 AS x, 'a')")
    else {
        panic!("expected typeless struct");
    };
    assert_eq!(typeless.args.len(), 2);
    assert_eq!(
        typeless.args[0].alias.as_ref().map(|a| a.name.as_str()),
        Some("x")
    );
    assert!(typeless.args[1].alias.is_none());
}

#[test]
fn test_tuple_struct() {
    let Expression::Struct(StructExpr::Tuple(tuple)) = parse_expr("(1, 'foo', TRUE)") else {
        panic!("expected tuple struct");
    };
    assert_eq!(tuple.values.len(), 3);
}

#[test]
fn test_typed_struct() {
    let Expression::Struct(StructExpr::Typed(typed)) =
        parse_expr("STRUCT<x FLOAT64, y>(1, 'foo')")
    else {
        panic!("expected typed struct");
    };
    assert_eq!(typed.fields.len(), 2);
    assert!(typed.fields[1].field_type.is_none());
    assert_eq!(typed.values.len(), 2);
}

#[rstest]
#[case("(1)", "parenthesized expression")]
#[case("foo", "identifier")]
#[case("a.b.c", "identifier")]
#[case("`my col`", "identifier")]
#[case("@limit", "query parameter")]
#[case("DATE", "identifier")]
fn test_non_literal_atoms(#[case] input: &str, #[case] kind: &str) {
    assert_eq!(parse_expr(input).kind(), kind);
}

#[test]
fn test_comments_and_whitespace() {
    let expr = parse_expr("  [1, /* two */ 2] -- trailing\n");
    assert_eq!(expr.to_string(), "[1, 2]");
}

#[rstest]
#[case("")]
#[case("[1, 2")]
#[case("'unterminated")]
#[case("1 2")]
#[case("12abc")]
#[case(r"'\q'")]
#[case("STRUCT(1 AS)")]
#[case("ARRAY<>[1]")]
fn test_syntax_errors(#[case] input: &str) {
    match parse_expression(input) {
        Err(CodecError::Syntax { grammar, .. }) => assert_eq!(grammar, Grammar::Literal),
        other => panic!("Expected syntax error for '{}', got: {:?}", input, other),
    }
}

#[test]
fn test_syntax_error_points_at_failure() {
    let err = parse_expression("[1, 2 3]").unwrap_err();
    let location = err.location().cloned().unwrap_or_default();
    assert_eq!(location.line, 1);
    assert_eq!(location.column, 7);
}
