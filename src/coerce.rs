use tracing::debug;

use crate::value::Value;

/// Guess the type of a plain string value, dotenv style.
///
/// - `` `text` `` is kept verbatim (without the backticks)
/// - `text*` is kept verbatim (without the `*`), unless it contains a comma
/// - `true` / `false` in any case become booleans
/// - numeric text becomes a number, including `0x`, `0o` and `0b` integers
/// - comma separated text becomes a list of coerced items, empty items dropped
///
/// Plug it into [`crate::Options::with_coercion`] to apply it to every string
/// read from the context.
pub fn parse_variable(value: &str) -> Value {
    if let Some(inner) = value
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
    {
        debug!(value, "wrapped in backticks, not parsed");
        return Value::from(inner);
    }

    if let Some(inner) = value.strip_suffix('*') {
        if !value.contains(',') {
            debug!(value, "ends with *, not parsed");
            return Value::from(inner);
        }
    }

    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        debug!(value, "parsed as boolean");
        return Value::Bool(value.eq_ignore_ascii_case("true"));
    }

    if let Some(n) = parse_number(value) {
        debug!(value, "parsed as number");
        return Value::Num(n);
    }

    if value.contains(',') {
        debug!(value, "parsed as list");
        return Value::List(
            value
                .split(',')
                .filter(|item| !item.is_empty())
                .map(parse_variable)
                .collect(),
        );
    }

    Value::from(value)
}

/// Numeric text as JavaScript's `Number()` reads it: surrounding whitespace
/// ignored, one optional sign, decimal or exponent notation, `Infinity`, and
/// unsigned `0x`, `0o`, `0b` integers.
fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(n) = parse_radix(trimmed) {
        return Some(n);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if unsigned == "Infinity" {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    // f64::from_str also takes `inf`, `nan` and a second sign
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let n = unsigned.parse::<f64>().ok()?;
    Some(if negative { -n } else { n })
}

fn parse_radix(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u128::from_str_radix(digits, radix).ok().map(|n| n as f64)
}
