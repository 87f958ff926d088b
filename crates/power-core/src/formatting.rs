/// Format `value` in scientific notation with `digits` fractional digits and a
/// signed, at least two-digit exponent (C `printf("%.*e")` style).
///
/// # Examples
///
/// ```
/// use power_core::formatting::format_scientific;
///
/// assert_eq!(format_scientific(5.5, 5), "5.50000e+00");
/// assert_eq!(format_scientific(1.234e-3, 5), "1.23400e-03");
/// assert_eq!(format_scientific(-2.5e10, 2), "-2.50e+10");
/// ```
pub fn format_scientific(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }

    let raw = format!("{:.*e}", digits, value);
    match split_exponent(&raw) {
        Some((mantissa, exp)) => format!("{}{}", mantissa, format_exponent(exp)),
        None => raw,
    }
}

/// Format `value` with `significant` significant digits, choosing between
/// fixed and scientific notation the way C's `%g` does.
///
/// Scientific notation is used when the decimal exponent is below `-4` or at
/// least `significant`. Trailing zeros, and a trailing decimal point, are
/// removed in both forms.
///
/// # Examples
///
/// ```
/// use power_core::formatting::format_general;
///
/// assert_eq!(format_general(9.5, 6), "9.5");
/// assert_eq!(format_general(0.0, 6), "0");
/// assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
/// assert_eq!(format_general(0.00001234, 6), "1.234e-05");
/// ```
pub fn format_general(value: f64, significant: usize) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = significant.max(1);

    // Round to the requested significant digits first; the exponent after
    // rounding decides the notation (999999.7 -> 1e+06, not 999999.7).
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = split_exponent(&sci) else {
        return sci;
    };

    if exp < -4 || exp >= precision as i32 {
        format!("{}{}", strip_trailing_zeros(mantissa), format_exponent(exp))
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Split Rust's `{:e}` output (`"5.5e-3"`) into mantissa and exponent.
fn split_exponent(raw: &str) -> Option<(&str, i32)> {
    let (mantissa, exp) = raw.split_once('e')?;
    let exp = exp.parse().ok()?;
    Some((mantissa, exp))
}

fn format_exponent(exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("e{}{:02}", sign, exp.unsigned_abs())
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_sign_negative() {
        "-inf".to_string()
    } else {
        "inf".to_string()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
