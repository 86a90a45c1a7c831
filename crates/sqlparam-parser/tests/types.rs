//! Tests for parsing type fragments

use pretty_assertions::assert_eq;
use rstest::rstest;
use sqlparam_ast::{StructFieldSpecifier, TypeLength, TypeSpecifier};
use sqlparam_diagnostics::{CodecError, Grammar};
use sqlparam_parser::{is_type_keyword, parse_type};

fn parse(input: &str) -> TypeSpecifier {
    parse_type(input).unwrap_or_else(|e| panic!("Failed to parse '{}': {:?}", input, e))
}

#[rstest]
#[case("BOOL")]
#[case("INT64")]
#[case("FLOAT32")]
#[case("FLOAT64")]
#[case("STRING")]
#[case("BYTES")]
#[case("DATE")]
#[case("TIMESTAMP")]
#[case("NUMERIC")]
#[case("JSON")]
fn test_scalar_types(#[case] input: &str) {
    assert_eq!(parse(input), TypeSpecifier::named(input));
}

#[test]
fn test_unknown_names_still_parse() {
    // Name resolution happens later; the grammar accepts any identifier
    assert_eq!(parse("INT63"), TypeSpecifier::named("INT63"));
    assert_eq!(parse("foo"), TypeSpecifier::named("foo"));
}

#[rstest]
#[case("STRING(MAX)", TypeLength::Max)]
#[case("BYTES(1024)", TypeLength::Fixed(1024))]
#[case("STRING ( max )", TypeLength::Max)]
fn test_length_annotations(#[case] input: &str, #[case] length: TypeLength) {
    let TypeSpecifier::Named(named) = parse(input) else {
        panic!("expected named type");
    };
    assert_eq!(named.length, Some(length));
}

#[test]
fn test_array_types() {
    assert_eq!(
        parse("ARRAY<INT64>"),
        TypeSpecifier::array(TypeSpecifier::named("INT64"))
    );
    assert_eq!(
        parse("array < array<string> >"),
        TypeSpecifier::array(TypeSpecifier::array(TypeSpecifier::named("string")))
    );

    let TypeSpecifier::Array(bare) = parse("ARRAY") else {
        panic!("expected array type");
    };
    assert!(bare.element_type.is_none());
}

#[test]
fn test_struct_types() {
    assert_eq!(
        parse("STRUCT<x INT64, y STRING>"),
        TypeSpecifier::structure(vec![
            StructFieldSpecifier::named("x", TypeSpecifier::named("INT64")),
            StructFieldSpecifier::named("y", TypeSpecifier::named("STRING")),
        ])
    );
    assert_eq!(
        parse("STRUCT<INT64, STRING>"),
        TypeSpecifier::structure(vec![
            StructFieldSpecifier::positional(TypeSpecifier::named("INT64")),
            StructFieldSpecifier::positional(TypeSpecifier::named("STRING")),
        ])
    );
    assert_eq!(parse("STRUCT<>"), TypeSpecifier::structure(vec![]));
}

#[test]
fn test_struct_of_arrays_round_trips_to_sql() {
    let source = "STRUCT<ids ARRAY<INT64>, STRUCT<`select` BOOL>>";
    assert_eq!(parse(source).to_string(), source);
}

#[rstest]
#[case("")]
#[case("ARRAY<INT64")]
#[case("STRUCT")]
#[case("STRUCT<x INT64,>")]
#[case("TRUE")]
#[case("NULL")]
#[case("1")]
#[case("'foo'")]
#[case("DATE '1970-01-01'")]
#[case("STRING(")]
fn test_type_syntax_errors(#[case] input: &str) {
    match parse_type(input) {
        Err(CodecError::Syntax { grammar, .. }) => assert_eq!(grammar, Grammar::Type),
        other => panic!("Expected syntax error for '{}', got: {:?}", input, other),
    }
}

#[test]
fn test_type_keywords() {
    assert!(is_type_keyword("int64"));
    assert!(is_type_keyword("ARRAY"));
    assert!(!is_type_keyword("x"));
}
