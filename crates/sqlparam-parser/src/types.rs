//! Type grammar: `INT64`, `STRING(MAX)`, `ARRAY<T>`, `STRUCT<name T, T>`

use crate::combinators::{
    Input, PResult, at_keyword, digits, expected, identifier, is_reserved, is_type_keyword,
    keyword, lit, word, ws,
};
use sqlparam_ast::{
    ArrayTypeSpecifier, NamedTypeSpecifier, StructFieldSpecifier, StructTypeSpecifier,
    TypeLength, TypeSpecifier,
};
use winnow::prelude::*;

/// Parse a type specifier
pub fn type_specifier<'a>(input: &mut Input<'a>) -> PResult<TypeSpecifier> {
    ws(input)?;
    if at_keyword(input, "ARRAY") {
        keyword("ARRAY").parse_next(input)?;
        let element_type = angle_type(input)?;
        return Ok(TypeSpecifier::Array(ArrayTypeSpecifier::new(element_type)));
    }
    if at_keyword(input, "STRUCT") {
        keyword("STRUCT").parse_next(input)?;
        ws(input)?;
        let fields = struct_field_list(input)?;
        return Ok(TypeSpecifier::Struct(StructTypeSpecifier::new(fields)));
    }
    named_type(input).map(TypeSpecifier::Named)
}

/// Optional `<T>` after `ARRAY`
pub(crate) fn angle_type<'a>(input: &mut Input<'a>) -> PResult<Option<TypeSpecifier>> {
    let checkpoint = *input;
    ws(input)?;
    if !input.starts_with('<') {
        *input = checkpoint;
        return Ok(None);
    }
    lit("<").parse_next(input)?;
    let element_type = type_specifier(input)?;
    ws(input)?;
    lit(">").parse_next(input)?;
    Ok(Some(element_type))
}

/// `<field, ...>` of a struct type
pub(crate) fn struct_field_list<'a>(input: &mut Input<'a>) -> PResult<Vec<StructFieldSpecifier>> {
    lit("<").parse_next(input)?;
    ws(input)?;
    let mut fields = Vec::new();
    if input.starts_with('>') {
        lit(">").parse_next(input)?;
        return Ok(fields);
    }
    loop {
        fields.push(struct_field(input)?);
        ws(input)?;
        if input.starts_with(',') {
            lit(",").parse_next(input)?;
            ws(input)?;
            continue;
        }
        lit(">").parse_next(input)?;
        return Ok(fields);
    }
}

/// A struct field: `name T`, positional `T`, or a bare `name`
///
/// A single word that is a scalar type keyword is read as a positional type,
/// so `STRUCT<INT64>` has one unnamed field while `STRUCT<x>` has one untyped field.
fn struct_field<'a>(input: &mut Input<'a>) -> PResult<StructFieldSpecifier> {
    if at_keyword(input, "ARRAY") || at_keyword(input, "STRUCT") {
        return type_specifier(input).map(StructFieldSpecifier::positional);
    }

    let checkpoint = *input;
    let name = identifier(input)?;
    ws(input)?;
    if input.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        let field_type = type_specifier(input)?;
        return Ok(StructFieldSpecifier::named(name, field_type));
    }
    if !name.quoted && is_type_keyword(&name.name) {
        *input = checkpoint;
        return type_specifier(input).map(StructFieldSpecifier::positional);
    }
    Ok(StructFieldSpecifier::new(Some(name), None))
}

fn named_type<'a>(input: &mut Input<'a>) -> PResult<NamedTypeSpecifier> {
    let checkpoint = *input;
    let name = word(input)?;
    if is_reserved(name) {
        *input = checkpoint;
        return expected(input, "type name");
    }

    let named = NamedTypeSpecifier::new(name);
    let after_name = *input;
    ws(input)?;
    if !input.starts_with('(') {
        *input = after_name;
        return Ok(named);
    }

    lit("(").parse_next(input)?;
    ws(input)?;
    let length = if at_keyword(input, "MAX") {
        keyword("MAX").parse_next(input)?;
        TypeLength::Max
    } else {
        let text = digits(input)?;
        match text.parse::<u64>() {
            Ok(n) => TypeLength::Fixed(n),
            Err(_) => return expected(input, "length within range"),
        }
    };
    ws(input)?;
    lit(")").parse_next(input)?;
    Ok(named.with_length(length))
}
