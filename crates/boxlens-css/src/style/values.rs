//! Lenient numeric parsing for resolved style values.
//!
//! [CSSOM § 6.7 Resolved Values](https://www.w3.org/TR/cssom-1/#resolved-values)
//!
//! Resolved values for the properties the inspector reads are almost always
//! plain pixel lengths (`"12px"`, `"0px"`). The inspector must never fail on
//! the rare exceptions, so every parser here returns `Option` and callers
//! fall back to 0.

use boxlens_common::warning::warn_once;

/// Keywords that legitimately resolve to "no length" and must not warn.
const ZERO_KEYWORDS: &[&str] = &["", "auto", "normal", "none", "initial", "unset"];

/// Parse the leading number of a value, like ECMAScript `parseFloat`.
///
/// Leading whitespace is skipped and trailing garbage (units) is ignored, so
/// `"12.5px"` yields `12.5` and `"-3em"` yields `-3.0`. Returns `None` when no
/// digits are found or the result is not finite.
#[must_use]
pub fn parse_leading_number(value: &str) -> Option<f32> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f32>().ok().filter(|v| v.is_finite())
}

/// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
///
/// Parse a strict pixel length: a number optionally followed by `px`.
/// Percentages, font-relative units, and keywords return `None`.
#[must_use]
pub fn parse_px(value: &str) -> Option<f32> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);
    number.trim_end().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Resolve a length-valued property to pixels, falling back to 0.
///
/// Zero keywords (`auto`, `normal`, `none`, ...) resolve silently; anything
/// else that fails to parse is reported once through [`warn_once`].
#[must_use]
pub fn length_or_zero(property: &str, value: &str) -> f32 {
    if let Some(px) = parse_leading_number(value) {
        return px;
    }
    let trimmed = value.trim();
    if !ZERO_KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(trimmed)) {
        let _ = warn_once(
            "style",
            &format!("unparsable length '{trimmed}' for {property}, using 0"),
        );
    }
    0.0
}

/// Resolve an integer-valued property (`order`), falling back to 0.
#[must_use]
pub fn integer_or_zero(property: &str, value: &str) -> i32 {
    let trimmed = value.trim();
    if let Ok(n) = trimmed.parse::<i32>() {
        return n;
    }
    if !trimmed.is_empty() {
        let _ = warn_once(
            "style",
            &format!("unparsable integer '{trimmed}' for {property}, using 0"),
        );
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_number_with_units() {
        assert_eq!(parse_leading_number("12.5px"), Some(12.5));
        assert_eq!(parse_leading_number("  -3em"), Some(-3.0));
        assert_eq!(parse_leading_number(".5px"), Some(0.5));
        assert_eq!(parse_leading_number("7."), Some(7.0));
        assert_eq!(parse_leading_number("1e2px"), Some(100.0));
        assert_eq!(parse_leading_number("2em"), Some(2.0));
    }

    #[test]
    fn test_leading_number_rejects_non_numbers() {
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("auto"), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("1e40"), None);
    }

    #[test]
    fn test_parse_px_is_strict() {
        assert_eq!(parse_px("100px"), Some(100.0));
        assert_eq!(parse_px("100"), Some(100.0));
        assert_eq!(parse_px("50%"), None);
        assert_eq!(parse_px("auto"), None);
        assert_eq!(parse_px("content"), None);
    }

    #[test]
    fn test_length_or_zero_keywords() {
        assert_eq!(length_or_zero("column-gap", "normal"), 0.0);
        assert_eq!(length_or_zero("margin-top", "auto"), 0.0);
        assert_eq!(length_or_zero("margin-top", "garbage"), 0.0);
        assert_eq!(length_or_zero("margin-top", "8px"), 8.0);
    }

    #[test]
    fn test_integer_or_zero() {
        assert_eq!(integer_or_zero("order", "3"), 3);
        assert_eq!(integer_or_zero("order", " -1 "), -1);
        assert_eq!(integer_or_zero("order", "first"), 0);
        assert_eq!(integer_or_zero("order", ""), 0);
    }
}
