//! Value formatting: typed values to human-readable display strings
//!
//! Dispatch is on the type, never on the shape of the value. The output is
//! meant for display only and is not parsed back.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, NaiveDate, Utc};
use sqlparam_diagnostics::{CodecError, Result};
use sqlparam_types::{StructField, Type, TypeCode, TypedValue, Value};

/// Rendering of a NULL value of any scalar or array type
pub const NULL_SENTINEL: &str = "<null>";

/// Fractional digits shown for NUMERIC values
const NUMERIC_SCALE: usize = 9;

/// Largest decimal shift accepted from a NUMERIC exponent
const NUMERIC_MAX_SHIFT: i64 = 1024;

/// Decimal exponents outside `[-4, 6)` switch FLOAT display to exponent form
const FLOAT_POSITIONAL: std::ops::Range<i32> = -4..6;

/// Format a value under a type
pub fn format_value(ty: &Type, value: &Value) -> Result<String> {
    match ty {
        Type::Array(element) => format_array(element.as_deref(), value),
        Type::Struct(fields) => format_struct(fields, value),
        _ if value.is_null() => Ok(NULL_SENTINEL.to_string()),
        scalar => format_scalar(scalar, value),
    }
}

/// Format a typed value
pub fn format_typed(typed: &TypedValue) -> Result<String> {
    format_value(&typed.ty, &typed.value)
}

fn format_array(element: Option<&Type>, value: &Value) -> Result<String> {
    let items = match value {
        Value::Null => return Ok(NULL_SENTINEL.to_string()),
        Value::List(items) => items,
        other => return Err(CodecError::invalid_value("ARRAY", other.to_string())),
    };
    let parts = match element {
        Some(element) => items
            .iter()
            .map(|item| format_value(element, item))
            .collect::<Result<Vec<_>>>()?,
        None if items.is_empty() => Vec::new(),
        None => return Err(CodecError::unknown_type_code(TypeCode::Unspecified.name())),
    };
    Ok(format!("[{}]", parts.join(", ")))
}

/// Fields and values are zipped; a non-list value contributes nothing
fn format_struct(fields: &[StructField], value: &Value) -> Result<String> {
    let items = value.as_list().unwrap_or_default();
    let parts = fields
        .iter()
        .zip(items)
        .map(|(field, item)| {
            let text = format_value(&field.field_type, item)?;
            Ok(if field.name.is_empty() {
                text
            } else {
                format!("{} AS {}", text, field.name)
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("({})", parts.join(", ")))
}

fn format_scalar(ty: &Type, value: &Value) -> Result<String> {
    let mismatch = || CodecError::invalid_value(ty.to_string(), value.to_string());
    let text = || value.as_str().ok_or_else(mismatch);

    match ty {
        Type::Bool => value.as_bool().map(|b| b.to_string()).ok_or_else(mismatch),
        Type::Int64 => format_int64(value).ok_or_else(mismatch),
        Type::Float32 => format_float(value, true).ok_or_else(mismatch),
        Type::Float64 => format_float(value, false).ok_or_else(mismatch),
        Type::String => text().map(str::to_string),
        Type::Bytes => {
            let bytes = STANDARD.decode(text()?).map_err(|_| mismatch())?;
            Ok(format!("0x{}", hex::encode(bytes)))
        }
        Type::Date => NaiveDate::parse_from_str(text()?, "%Y-%m-%d")
            .map(|date| date.format("%Y-%m-%d").to_string())
            .map_err(|_| mismatch()),
        Type::Timestamp => DateTime::parse_from_rfc3339(text()?)
            .map(|ts| format_timestamp(&ts.with_timezone(&Utc)))
            .map_err(|_| mismatch()),
        Type::Numeric => format_numeric(text()?).ok_or_else(mismatch),
        Type::Json => serde_json::from_str::<serde_json::Value>(text()?)
            .map(|json| json.to_string())
            .map_err(|_| mismatch()),
        Type::Array(_) | Type::Struct(_) => Err(mismatch()),
    }
}

fn format_int64(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => s.parse::<i64>().ok().map(|n| n.to_string()),
        Value::Number(n)
            if n.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(n) =>
        {
            Some((*n as i64).to_string())
        }
        _ => None,
    }
}

/// Shortest round-trip digits; FLOAT32 values are narrowed first
fn format_float(value: &Value, single: bool) -> Option<String> {
    let n = match value {
        Value::Number(n) => *n,
        Value::String(s) => match s.as_str() {
            "NaN" => f64::NAN,
            "Infinity" => f64::INFINITY,
            "-Infinity" => f64::NEG_INFINITY,
            other => other.parse::<f64>().ok()?,
        },
        _ => return None,
    };

    let text = if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { '+' } else { '-' };
        format!("{}Inf", sign)
    } else if single {
        shortest_float((n as f32).to_string(), format!("{:e}", n as f32))
    } else {
        shortest_float(n.to_string(), format!("{:e}", n))
    };
    Some(text)
}

/// Positional text for moderate exponents, `1.5e+07` style otherwise
fn shortest_float(positional: String, scientific: String) -> String {
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return positional;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return positional;
    };
    if FLOAT_POSITIONAL.contains(&exponent) {
        return positional;
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
}

/// Exact decimal text rounded half away from zero to nine fractional digits
///
/// Accepts an optional sign, digits with an optional point, and an optional
/// exponent. Works on the digits directly so that the full NUMERIC range
/// (29 integer digits) is covered.
fn format_numeric(text: &str) -> Option<String> {
    let (negative, rest) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(at) => (&rest[..at], rest[at + 1..].parse::<i64>().ok()?),
        None => (rest, 0),
    };
    if !(-NUMERIC_MAX_SHIFT..=NUMERIC_MAX_SHIFT).contains(&exponent) {
        return None;
    }
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.len() + frac_part.len() == 0 || !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes())
        .map(|b| b - b'0')
        .collect();
    let nonzero = digits.iter().any(|&d| d != 0);
    // Position of the decimal point inside `digits`
    let mut point = int_part.len() as i64 + exponent;
    if point < 0 {
        let pad = point.unsigned_abs() as usize;
        let mut padded = vec![0; pad];
        padded.append(&mut digits);
        digits = padded;
        point = 0;
    }
    let mut point = point as usize;
    let kept = point + NUMERIC_SCALE;
    if digits.len() < kept {
        digits.resize(kept, 0);
    }

    let round_up = digits.get(kept).is_some_and(|&d| d >= 5);
    digits.truncate(kept);
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            point += 1;
        }
    }

    let (whole, fraction) = digits.split_at(point);
    let leading = whole.iter().take_while(|&&d| d == 0).count();
    let whole = &whole[leading..];
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();

    let mut out = String::with_capacity(whole.len() + NUMERIC_SCALE + 3);
    if negative && nonzero {
        out.push('-');
    }
    if whole.is_empty() {
        out.push('0');
    } else {
        out.push_str(&render(whole));
    }
    out.push('.');
    out.push_str(&render(fraction));
    Some(out)
}

/// RFC 3339 in UTC, trailing zeros of the fraction trimmed
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    let nanos = ts.timestamp_subsec_nanos();
    let fraction = if nanos == 0 {
        String::new()
    } else {
        format!(".{:09}", nanos).trim_end_matches('0').to_string()
    };
    format!("{}{}Z", ts.format("%Y-%m-%dT%H:%M:%S"), fraction)
}
