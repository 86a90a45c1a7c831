//! SQL fragment parser using Winnow
//!
//! Two grammars share one set of combinators: the GoogleSQL type grammar
//! (`parse_type`) and the literal subset of its expression grammar
//! (`parse_expression`). Both must consume the whole fragment; trailing
//! input is a syntax error pointing at the first unconsumed character.

mod combinators;
mod expression;
mod types;

pub use combinators::{SCALAR_TYPE_KEYWORDS, is_type_keyword};

use combinators::{Input, PResult, expected, ws};
use sqlparam_ast::{Expression, TypeSpecifier};
use sqlparam_diagnostics::{CodecError, Grammar, Result};
use winnow::error::ErrMode;

/// Parse a type fragment such as `ARRAY<STRUCT<x INT64>>`
pub fn parse_type(source: &str) -> Result<TypeSpecifier> {
    parse_complete(source, Grammar::Type, types::type_specifier)
}

/// Parse a literal fragment such as `[1, 2, 3]` or `DATE '2024-01-01'`
pub fn parse_expression(source: &str) -> Result<Expression> {
    parse_complete(source, Grammar::Literal, expression::expression)
}

fn parse_complete<T>(
    source: &str,
    grammar: Grammar,
    mut parser: impl for<'a> FnMut(&mut Input<'a>) -> PResult<T>,
) -> Result<T> {
    let mut input: Input<'_> = source;
    let outcome = parser(&mut input).and_then(|value| {
        ws(&mut input)?;
        if input.is_empty() {
            Ok(value)
        } else {
            expected(&mut input, "end of input")
        }
    });

    outcome.map_err(|err| {
        let offset = source.len() - input.len();
        let context = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx.to_string(),
            ErrMode::Incomplete(_) => String::new(),
        };
        CodecError::syntax(grammar, source, offset, describe(&context, input))
    })
}

/// Flatten winnow's context into one line and say what was found instead
fn describe(context: &str, rest: &str) -> String {
    let context = context
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let found = if rest.is_empty() {
        "found end of input".to_string()
    } else {
        let snippet: String = rest.chars().take(12).collect();
        format!("found `{}`", snippet)
    };
    if context.is_empty() {
        format!("unexpected input, {}", found)
    } else {
        format!("{}, {}", context, found)
    }
}
