//! Default textual number parsers.
//!
//! Both functions read the longest valid prefix and report how many bytes
//! they consumed. Nothing is skipped: leading whitespace yields no parse.

/// Parse `[+-]?[0-9]+` from the start of `text`.
///
/// A digit run that overflows `i64` is reported as no parse.
pub fn int_prefix(text: &[u8]) -> (i64, usize) {
    let (negative, start) = match text.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let mut value: i64 = 0;
    let mut pos = start;
    while let Some(&b) = text.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = i64::from(b - b'0');
        // accumulate on the negative side so i64::MIN stays reachable
        let next = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) });
        match next {
            Some(v) => value = v,
            None => return (0, 0),
        }
        pos += 1;
    }

    if pos == start {
        return (0, 0);
    }
    (value, pos)
}

/// Parse `[+-]?(digits[.digits?] | .digits)([eE][+-]?digits)?` from the
/// start of `text`.
pub fn float_prefix(text: &[u8]) -> (f64, usize) {
    let mut pos = 0;
    if matches!(text.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&text[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if text.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&text[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return (0.0, 0);
    }

    if matches!(text.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(text.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&text[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    // the consumed slice is pure ASCII in Rust's float grammar
    match std::str::from_utf8(&text[..pos]).ok().and_then(|s| s.parse::<f64>().ok()) {
        Some(v) => (v, pos),
        None => (0.0, 0),
    }
}

fn count_digits(text: &[u8]) -> usize {
    text.iter().take_while(|b| b.is_ascii_digit()).count()
}
