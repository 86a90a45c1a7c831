//! Literal expression grammar
//!
//! Recursive descent over the literal subset of GoogleSQL expressions:
//! scalar literals, array literals, the three struct literal forms and
//! the few non-literal atoms (paths, `@params`, parentheses) that the
//! evaluator rejects by name.

use crate::combinators::{
    Input, PResult, at_keyword, at_quoted, identifier, keyword, lit, number_literal,
    quoted_literal, string_literal, word, ws,
};
use crate::types::{angle_type, struct_field_list};
use sqlparam_ast::{
    ArrayExpr, Expression, Literal, StructArg, StructExpr, TupleStructExpr, TypedStructExpr,
    TypelessStructExpr, TypeSpecifier,
};
use winnow::prelude::*;

/// Parse a literal expression
pub fn expression<'a>(input: &mut Input<'a>) -> PResult<Expression> {
    ws(input)?;
    let s: &'a str = *input;

    if s.starts_with('[') {
        return array_body(input, None).map(Expression::Array);
    }
    if s.starts_with('(') {
        return paren_or_tuple(input);
    }
    if s.starts_with('@') {
        lit("@").parse_next(input)?;
        return identifier(input).map(Expression::Parameter);
    }
    if at_quoted(input) {
        return quoted_literal(input).map(Expression::Literal);
    }
    if s.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '.' | '+' | '-')) {
        return number_literal(input).map(Expression::Literal);
    }
    if s.starts_with('`') {
        return path(input);
    }
    keyword_expression(input)
}

/// Expressions introduced by a word: keywords, typed literals, paths
fn keyword_expression<'a>(input: &mut Input<'a>) -> PResult<Expression> {
    let checkpoint = *input;
    let head = word(input)?.to_ascii_uppercase();
    match head.as_str() {
        "NULL" => Ok(Expression::Literal(Literal::Null)),
        "TRUE" => Ok(Expression::Literal(Literal::Boolean(true))),
        "FALSE" => Ok(Expression::Literal(Literal::Boolean(false))),
        "ARRAY" => {
            let element_type = angle_type(input)?;
            ws(input)?;
            array_body(input, element_type).map(Expression::Array)
        }
        "STRUCT" => struct_tail(input),
        "DATE" | "TIMESTAMP" | "NUMERIC" | "JSON" => {
            ws(input)?;
            if !at_quoted(input) {
                *input = checkpoint;
                return path(input);
            }
            let text = string_literal(input)?;
            let literal = match head.as_str() {
                "DATE" => Literal::Date(text),
                "TIMESTAMP" => Literal::Timestamp(text),
                "NUMERIC" => Literal::Numeric(text),
                _ => Literal::Json(text),
            };
            Ok(Expression::Literal(literal))
        }
        _ => {
            *input = checkpoint;
            path(input)
        }
    }
}

fn array_body<'a>(
    input: &mut Input<'a>,
    element_type: Option<TypeSpecifier>,
) -> PResult<ArrayExpr> {
    lit("[").parse_next(input)?;
    let elements = expression_list(input, "]")?;
    Ok(ArrayExpr::new(element_type, elements))
}

/// Comma separated expressions up to and including `close`
fn expression_list<'a>(input: &mut Input<'a>, close: &'static str) -> PResult<Vec<Expression>> {
    ws(input)?;
    let mut items = Vec::new();
    if input.starts_with(close) {
        lit(close).parse_next(input)?;
        return Ok(items);
    }
    loop {
        items.push(expression(input)?);
        ws(input)?;
        if input.starts_with(',') {
            lit(",").parse_next(input)?;
            continue;
        }
        lit(close).parse_next(input)?;
        return Ok(items);
    }
}

/// Everything after `STRUCT`: either `<fields>(values)` or `(expr [AS alias], ...)`
fn struct_tail<'a>(input: &mut Input<'a>) -> PResult<Expression> {
    ws(input)?;
    if input.starts_with('<') {
        let fields = struct_field_list(input)?;
        ws(input)?;
        lit("(").parse_next(input)?;
        let values = expression_list(input, ")")?;
        return Ok(Expression::Struct(StructExpr::Typed(TypedStructExpr {
            fields,
            values,
        })));
    }

    lit("(").parse_next(input)?;
    ws(input)?;
    let mut args = Vec::new();
    if input.starts_with(')') {
        lit(")").parse_next(input)?;
    } else {
        loop {
            let expr = expression(input)?;
            ws(input)?;
            let alias = if at_keyword(input, "AS") {
                keyword("AS").parse_next(input)?;
                ws(input)?;
                Some(identifier(input)?)
            } else {
                None
            };
            args.push(StructArg { expr, alias });
            ws(input)?;
            if input.starts_with(',') {
                lit(",").parse_next(input)?;
                continue;
            }
            lit(")").parse_next(input)?;
            break;
        }
    }
    Ok(Expression::Struct(StructExpr::Typeless(TypelessStructExpr {
        args,
    })))
}

/// `(expr)` or a tuple `(expr, expr, ...)`
fn paren_or_tuple<'a>(input: &mut Input<'a>) -> PResult<Expression> {
    lit("(").parse_next(input)?;
    let first = expression(input)?;
    ws(input)?;
    if input.starts_with(')') {
        lit(")").parse_next(input)?;
        return Ok(Expression::Paren(Box::new(first)));
    }

    let mut values = vec![first];
    while input.starts_with(',') {
        lit(",").parse_next(input)?;
        values.push(expression(input)?);
        ws(input)?;
    }
    lit(")").parse_next(input)?;
    Ok(Expression::Struct(StructExpr::Tuple(TupleStructExpr {
        values,
    })))
}

/// Dotted identifier path
fn path<'a>(input: &mut Input<'a>) -> PResult<Expression> {
    let mut segments = vec![identifier(input)?];
    loop {
        let checkpoint = *input;
        ws(input)?;
        if !input.starts_with('.') {
            *input = checkpoint;
            break;
        }
        lit(".").parse_next(input)?;
        ws(input)?;
        segments.push(identifier(input)?);
    }
    Ok(Expression::Path(segments))
}
