//! Human-readable rendering of amounts and factors.

use bigdecimal::{BigDecimal, RoundingMode};

/// Format an amount with thousands separators and two decimal places.
///
/// Rounds half to even, e.g. `1234.565` becomes `1,234.56`.
pub fn format_amount(value: &BigDecimal) -> String {
    let (digits, scale) = value
        .with_scale_round(2, RoundingMode::HalfEven)
        .as_bigint_and_exponent();
    debug_assert_eq!(scale, 2);

    let text = digits.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let padded = format!("{digits:0>3}");
    let (whole, cents) = padded.split_at(padded.len() - 2);
    format!("{sign}{}.{cents}", group_thousands(whole))
}

/// Format a multiplier as a grouped integer, e.g. `1,000,000`.
pub fn format_factor(factor: &BigDecimal) -> String {
    let (digits, _) = factor
        .with_scale_round(0, RoundingMode::HalfEven)
        .as_bigint_and_exponent();
    let text = digits.to_string();
    match text.strip_prefix('-') {
        Some(rest) => format!("-{}", group_thousands(rest)),
        None => group_thousands(&text),
    }
}

/// Exact decimal text without exponent notation or trailing zeros,
/// e.g. `1234500000` or `12.5`.
pub fn plain_decimal(value: &BigDecimal) -> String {
    let (digits, scale) = value.normalized().as_bigint_and_exponent();
    let text = digits.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    if digits == "0" {
        return "0".to_string();
    }
    if scale <= 0 {
        let zeros = "0".repeat(scale.unsigned_abs() as usize);
        return format!("{sign}{digits}{zeros}");
    }
    let scale = scale as usize;
    let padded = format!("{digits:0>width$}", width = scale + 1);
    let (whole, frac) = padded.split_at(padded.len() - scale);
    format!("{sign}{whole}.{frac}")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
