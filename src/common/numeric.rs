//! Decimal-string parsing and fixed-decimal rounding
//!
//! Inputs arrive as ASCII base-10 text with '.' as the decimal separator.
//! Parsing reads the longest number at the start of the text and ignores
//! whatever follows it, so "1.8x" is 1.8 and "100 EUR" is 100. Arithmetic stays in f64; rounding goes through `rust_decimal` on the exact
//! binary value so "round to 2 decimals" behaves the same for display and for
//! stored percentages.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Byte length of the decimal literal `[+-] digits [. digits] [e [+-] digits]`
/// at the start of `text`, or 0 when there is none
///
/// The mantissa needs at least one digit. An exponent marker with no digits
/// after it is not part of the literal.
fn leading_literal_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let skip_digits = |from: usize| {
        from + bytes[from.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = skip_digits(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = skip_digits(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    end
}

/// Parse user-entered text as a finite decimal number
///
/// Leading whitespace is skipped and the number at the start of the text is
/// read; anything after it is ignored. Text that does not start with a number
/// (empty, "abc", "inf", "NaN") and numbers that overflow to infinity yield
/// `None`.
pub fn parse_decimal_input(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let len = leading_literal_len(text);
    if len == 0 {
        return None;
    }
    // The literal is ASCII, so `len` is a char boundary
    let value: f64 = text[..len].parse().ok()?;
    value.is_finite().then_some(value)
}

fn to_rounded_decimal(value: f64, decimals: u32) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let exact = Decimal::from_f64_retain(value)?;
    Some(exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero))
}

/// Round to `decimals` places, half away from zero
///
/// Non-finite values and values outside the decimal range are returned
/// unchanged.
pub fn round_dp(value: f64, decimals: u32) -> f64 {
    to_rounded_decimal(value, decimals)
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Render with exactly `decimals` fractional digits
pub fn format_fixed(value: f64, decimals: u32) -> String {
    match to_rounded_decimal(value, decimals) {
        Some(mut d) => {
            d.rescale(decimals);
            if d.is_zero() {
                d.set_sign_positive(true);
            }
            d.to_string()
        }
        None => value.to_string(),
    }
}
