// src/format/parse.rs
//
// Leading-number reader. Takes the longest numeric prefix and ignores the rest,
// the way a browser's `parseFloat` reads element text.

/// White space skipped before the number: Unicode spaces, line breaks and BOM.
/// NEL (U+0085) is not white space for `parseFloat`.
fn is_lead_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Byte length of the decimal literal at the start of `s`, or 0 if there is none.
///
/// Accepted: optional sign, digits with an optional `.` and fraction (at least one
/// digit overall), optional exponent. An exponent without digits is left unread.
pub fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let n = b.len();
    let mut i = 0;

    if i < n && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < n && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < n && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < n && b[j].is_ascii_digit() {
            j += 1;
        }
        if digits + (j - frac_start) > 0 {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    if i < n && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < n && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < n && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// Number at the start of `input`. `None` when there is no numeric prefix or the
/// value is not finite (`"Infinity"`, `"1e999"`).
pub fn parse_leading(input: &str) -> Option<f64> {
    let s = input.trim_start_matches(is_lead_space);
    let len = numeric_prefix_len(s);
    if len == 0 {
        return None;
    }
    s[..len].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Amount to display. Anything unparseable is zero, and so is negative zero.
pub fn parse_amount(input: &str) -> f64 {
    match parse_leading(input) {
        Some(v) if v != 0.0 => v,
        _ => 0.0,
    }
}
