//! Shape validation for numeric literals.
//!
//! These are pure predicates over candidate text; they do not convert values.
//! Signs are separate tokens in the shader language and are not accepted here.

/// Integer literal: decimal digits, or `0x`/`0b` prefixed hex/binary digits.
pub fn valid_int_str(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes {
        [] => false,
        [b'0', b'x' | b'X', rest @ ..] => !rest.is_empty() && rest.iter().all(u8::is_ascii_hexdigit),
        [b'0', b'b' | b'B', rest @ ..] => {
            !rest.is_empty() && rest.iter().all(|b| matches!(b, b'0' | b'1'))
        }
        _ => bytes.iter().all(u8::is_ascii_digit),
    }
}

/// Floating-point literal: `digits [. digits] [(e|E) [+|-] digits] [f|F|h|H]`.
///
/// Either side of the decimal point may be empty, but the mantissa needs at
/// least one digit, and an exponent marker needs at least one digit after it.
pub fn valid_float_str(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    if matches!(bytes.get(i), Some(b'f' | b'F' | b'h' | b'H')) {
        i += 1;
    }

    i == bytes.len()
}

/// Accepts anything that is a valid integer or float literal.
pub fn valid_number_str(s: &str) -> bool {
    valid_int_str(s) || valid_float_str(s)
}

/// Parses an integer literal validated by [`valid_int_str`].
///
/// Returns `None` for malformed text or values that do not fit in `i64`.
pub fn parse_int(s: &str) -> Option<i64> {
    if !valid_int_str(s) {
        return None;
    }
    let bytes = s.as_bytes();
    match bytes {
        [b'0', b'x' | b'X', ..] => i64::from_str_radix(&s[2..], 16).ok(),
        [b'0', b'b' | b'B', ..] => i64::from_str_radix(&s[2..], 2).ok(),
        _ => s.parse().ok(),
    }
}

/// Parses any numeric literal as `f64`, dropping a precision suffix.
pub fn parse_float(s: &str) -> Option<f64> {
    if let Some(v) = parse_int(s) {
        return Some(v as f64);
    }
    if !valid_float_str(s) {
        return None;
    }
    let trimmed = s.trim_end_matches(['f', 'F', 'h', 'H']);
    trimmed.parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
