//! Common parser combinators for SQL fragments

use sqlparam_ast::{FloatLiteral, Identifier, IntegerLiteral, Literal};
use winnow::combinator::fail;
use winnow::error::{StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Parser input
pub type Input<'a> = &'a str;

/// Parser result
pub type PResult<T> = winnow::ModalResult<T>;

/// Scalar type keywords recognised by the type grammar
pub const SCALAR_TYPE_KEYWORDS: &[&str] = &[
    "BOOL",
    "INT64",
    "FLOAT32",
    "FLOAT64",
    "STRING",
    "BYTES",
    "DATE",
    "TIMESTAMP",
    "NUMERIC",
    "JSON",
];

/// Words that can never name a type
const RESERVED_WORDS: &[&str] = &["NULL", "TRUE", "FALSE", "ARRAY", "STRUCT"];

/// Check if a word is a type keyword (scalar, `ARRAY` or `STRUCT`)
pub fn is_type_keyword(word: &str) -> bool {
    word.eq_ignore_ascii_case("ARRAY")
        || word.eq_ignore_ascii_case("STRUCT")
        || SCALAR_TYPE_KEYWORDS
            .iter()
            .any(|kw| word.eq_ignore_ascii_case(kw))
}

pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.iter().any(|kw| word.eq_ignore_ascii_case(kw))
}

/// Fail with a backtrack error describing what was expected
pub fn expected<'a, T>(input: &mut Input<'a>, what: &'static str) -> PResult<T> {
    fail::<_, T, _>
        .context(StrContext::Expected(StrContextValue::Description(what)))
        .parse_next(input)
}

/// Skip whitespace and SQL comments (`--`, `#`, `/* */`)
pub fn ws<'a>(input: &mut Input<'a>) -> PResult<()> {
    loop {
        let s: &'a str = input.trim_start();
        *input = s;
        if let Some(rest) = s.strip_prefix("--").or_else(|| s.strip_prefix('#')) {
            *input = rest.find('\n').map_or(&rest[rest.len()..], |i| &rest[i..]);
        } else if let Some(rest) = s.strip_prefix("/*") {
            match rest.find("*/") {
                Some(end) => *input = &rest[end + 2..],
                None => return expected(input, "end of comment"),
            }
        } else {
            return Ok(());
        }
    }
}

/// Match an exact token
pub fn lit<'a>(token: &'static str) -> impl FnMut(&mut Input<'a>) -> PResult<&'a str> {
    move |input: &mut Input<'a>| {
        token
            .context(StrContext::Expected(StrContextValue::StringLiteral(token)))
            .parse_next(input)
    }
}

/// An unquoted word: letter or `_`, then letters, digits or `_`
pub fn word<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .context(StrContext::Label("identifier"))
        .parse_next(input)
}

/// Match a case-insensitive keyword
pub fn keyword<'a>(kw: &'static str) -> impl FnMut(&mut Input<'a>) -> PResult<&'a str> {
    move |input: &mut Input<'a>| {
        let checkpoint = *input;
        match word(input) {
            Ok(found) if found.eq_ignore_ascii_case(kw) => Ok(found),
            _ => {
                *input = checkpoint;
                expected(input, kw)
            }
        }
    }
}

/// Check for a keyword without consuming input
pub fn at_keyword(input: &Input<'_>, kw: &'static str) -> bool {
    let mut probe = *input;
    keyword(kw).parse_next(&mut probe).is_ok()
}

/// Parse an identifier, plain or backquoted
pub fn identifier<'a>(input: &mut Input<'a>) -> PResult<Identifier> {
    let s: &'a str = *input;
    if let Some(rest) = s.strip_prefix('`') {
        return match rest.find('`') {
            Some(end) if end > 0 => {
                *input = &rest[end + 1..];
                Ok(Identifier::quoted(&rest[..end]))
            }
            _ => expected(input, "closing backquote"),
        };
    }
    word.map(|w: &str| Identifier::new(w)).parse_next(input)
}

/// One or more decimal digits
pub fn digits<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .context(StrContext::Expected(StrContextValue::Description("digits")))
        .parse_next(input)
}

/// Parse an integer or floating point literal with an optional sign
///
/// Integers may be written in hex (`0x1F`); floats accept `1.5`, `.5`, `1.`
/// and exponents. The text is kept verbatim for evaluation.
pub fn number_literal<'a>(input: &mut Input<'a>) -> PResult<Literal> {
    let s: &'a str = *input;
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let (sign, body) = s.split_at(sign_len);

    if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        let hex_len = hex.bytes().take_while(u8::is_ascii_hexdigit).count();
        if hex_len > 0 {
            *input = &hex[hex_len..];
            number_boundary(input)?;
            return Ok(Literal::Integer(IntegerLiteral::hex(format!(
                "{}{}",
                sign,
                &hex[..hex_len]
            ))));
        }
    }

    let int_len = body.bytes().take_while(u8::is_ascii_digit).count();
    let mut end = int_len;
    let mut frac_len = 0;
    let mut is_float = false;
    if body[end..].starts_with('.') {
        frac_len = body[end + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if int_len + frac_len > 0 {
            is_float = true;
            end += 1 + frac_len;
        }
    }
    if int_len + frac_len == 0 {
        return expected(input, "number");
    }

    if let Some(exponent) = body[end..].strip_prefix(['e', 'E']) {
        let exp_sign_len = usize::from(exponent.starts_with(['+', '-']));
        let exp_digits = exponent[exp_sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if exp_digits > 0 {
            is_float = true;
            end += 1 + exp_sign_len + exp_digits;
        }
    }

    let text = &s[..sign_len + end];
    *input = &s[sign_len + end..];
    number_boundary(input)?;

    Ok(if is_float {
        Literal::Float(FloatLiteral::new(text))
    } else {
        Literal::Integer(IntegerLiteral::decimal(text))
    })
}

fn number_boundary<'a>(input: &mut Input<'a>) -> PResult<()> {
    match input.chars().next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' || c == '.' => {
            expected(input, "end of number")
        }
        _ => Ok(()),
    }
}

/// Split an `r`/`b` prefix (any order, each at most once) off a quoted literal
fn split_prefix(s: &str) -> (bool, bool, &str) {
    let mut raw = false;
    let mut bytes = false;
    let mut rest = s;
    for _ in 0..2 {
        match rest.chars().next() {
            Some('r' | 'R') if !raw => raw = true,
            Some('b' | 'B') if !bytes => bytes = true,
            _ => break,
        }
        rest = &rest[1..];
    }
    if rest.starts_with(['\'', '"']) {
        (raw, bytes, rest)
    } else {
        (false, false, s)
    }
}

/// Check whether the input starts with a (possibly prefixed) quoted literal
pub fn at_quoted(input: &Input<'_>) -> bool {
    let (_, _, rest) = split_prefix(input);
    rest.starts_with(['\'', '"'])
}

/// Parse a string or bytes literal
///
/// Supports single, double and triple quotes, the `r` (raw) and `b` (bytes)
/// prefixes, and the GoogleSQL escape sequences.
pub fn quoted_literal<'a>(input: &mut Input<'a>) -> PResult<Literal> {
    let s: &'a str = *input;
    let (raw, bytes, rest) = split_prefix(s);
    let Some(quote) = ["'''", "\"\"\"", "'", "\""]
        .into_iter()
        .find(|q| rest.starts_with(*q))
    else {
        return expected(input, "string literal");
    };

    let body: &'a str = &rest[quote.len()..];
    let mut content = Vec::new();
    let mut chars = body.char_indices();
    loop {
        let Some((i, c)) = chars.next() else {
            *input = &body[body.len()..];
            return expected(input, "closing quote");
        };
        if body[i..].starts_with(quote) {
            *input = &body[i + quote.len()..];
            break;
        }
        match c {
            '\\' if raw => {
                content.push(b'\\');
                if let Some((_, next)) = chars.next() {
                    push_char(&mut content, next);
                }
            }
            '\\' => {
                if decode_escape(&mut chars, &mut content).is_none() {
                    *input = &body[i..];
                    return expected(input, "valid escape sequence");
                }
            }
            '\n' | '\r' if quote.len() == 1 => {
                *input = &body[i..];
                return expected(input, "closing quote");
            }
            c => push_char(&mut content, c),
        }
    }

    if bytes {
        return Ok(Literal::Bytes(content));
    }
    match String::from_utf8(content) {
        Ok(text) => Ok(Literal::String(text)),
        Err(_) => expected(input, "valid UTF-8 in string literal"),
    }
}

/// Parse a string literal (not bytes), returning its decoded text
pub fn string_literal<'a>(input: &mut Input<'a>) -> PResult<String> {
    let checkpoint = *input;
    match quoted_literal(input)? {
        Literal::String(text) => Ok(text),
        _ => {
            *input = checkpoint;
            expected(input, "string literal")
        }
    }
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

fn decode_escape(chars: &mut std::str::CharIndices<'_>, out: &mut Vec<u8>) -> Option<()> {
    let (_, c) = chars.next()?;
    match c {
        'n' => out.push(b'\n'),
        'r' => out.push(b'\r'),
        't' => out.push(b'\t'),
        'a' => out.push(0x07),
        'b' => out.push(0x08),
        'f' => out.push(0x0c),
        'v' => out.push(0x0b),
        '\\' | '\'' | '"' | '`' | '?' => push_char(out, c),
        'x' | 'X' => out.push(u8::try_from(read_digits(chars, 2, 16)?).ok()?),
        'u' => push_char(out, char::from_u32(read_digits(chars, 4, 16)?)?),
        'U' => push_char(out, char::from_u32(read_digits(chars, 8, 16)?)?),
        '0'..='7' => {
            let high = c.to_digit(8)?;
            let value = high * 64 + read_digits(chars, 2, 8)?;
            out.push(u8::try_from(value).ok()?);
        }
        _ => return None,
    }
    Some(())
}

fn read_digits(chars: &mut std::str::CharIndices<'_>, count: usize, radix: u32) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        let (_, c) = chars.next()?;
        value = value * radix + c.to_digit(radix)?;
    }
    Some(value)
}
