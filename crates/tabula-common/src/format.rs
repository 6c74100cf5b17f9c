//! Number rendering and parsing.
//!
//! Cells keep a canonical text form next to their numeric value, so every
//! crate has to agree on how a number becomes text and how text becomes a
//! number. Both directions live here.

/// Renders a number the way a cell built from that number stores it.
///
/// Integral values keep a trailing `.0`, so `5.0` renders as `"5.0"` and not
/// `"5"`; exponent forms keep it as well (`1.0e16`). Infinities render as
/// `Infinity` / `-Infinity`, which [`parse_number`] reads back. NaN renders
/// as the empty string, the missing value marker.
///
/// # Examples
///
/// ```
/// use tabula_common::format_number;
///
/// assert_eq!(format_number(5.0), "5.0");
/// assert_eq!(format_number(616.5), "616.5");
/// assert_eq!(format_number(-0.25), "-0.25");
/// assert_eq!(format_number(1e16), "1.0e16");
/// assert_eq!(format_number(f64::NAN), "");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        let text = format!("{value:?}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !mantissa.contains('.') => {
                format!("{mantissa}.0e{exponent}")
            }
            _ => text,
        }
    }
}

/// Formats a statistic with exactly four decimal digits.
///
/// Non-finite values render as `NaN`, `Infinity` and `-Infinity`.
///
/// # Examples
///
/// ```
/// use tabula_common::format_fixed;
///
/// assert_eq!(format_fixed(0.6), "0.6000");
/// assert_eq!(format_fixed(2.345_678), "2.3457");
/// assert_eq!(format_fixed(f64::NAN), "NaN");
/// ```
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{value:.4}")
    }
}

/// Parses text as `f64`, returning `None` for empty or non-numeric input.
///
/// Surrounding whitespace is ignored. The only spellings of non-finite
/// values accepted are `Infinity`, `+Infinity`, `-Infinity` and `NaN`;
/// `inf`, `INF` or `infinity` are text. Literals too large for `f64` still
/// parse to an infinity.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let number = trimmed.parse::<f64>().ok()?;
    if number.is_finite() || !is_spelled_out(trimmed) {
        return Some(number);
    }
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    matches!(unsigned, "Infinity" | "NaN").then_some(number)
}

/// Whether the text names a non-finite value rather than writing digits.
fn is_spelled_out(text: &str) -> bool {
    text.bytes()
        .any(|byte| matches!(byte.to_ascii_lowercase(), b'i' | b'n'))
}
