//! Numeric quantities as they appear in phrases and in the labelled fields.
//!
//! The dataset stores quantities as floats (`2.5`) while the phrase spells
//! them out (`"2 1/2"`, clumped to `"2$1/2"`). Both sides are reduced to the
//! same canonical string with [`format_quantity`] before comparing.

use super::fractions::CLUMP_MARKER;

/// Parses a token into a quantity.
///
/// Accepts integers (`"4"`), decimals (`"1.5"`), fractions (`"1/3"`) and
/// clumped mixed numbers (`"2$1/2"`). Returns `None` for anything else,
/// including fractions with a zero denominator.
pub fn parse_quantity(token: &str) -> Option<f64> {
    match token.split_once(CLUMP_MARKER) {
        Some((whole, fraction)) => Some(parse_integer(whole)? + parse_fraction(fraction)?),
        None if token.contains('/') => parse_fraction(token),
        None => parse_decimal(token),
    }
}

/// Renders a quantity rounded to two decimal places, without trailing
/// zeros: `4.0` → `"4"`, `2.5` → `"2.5"`, `1.0 / 3.0` → `"0.33"`.
pub fn format_quantity(value: f64) -> String {
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_integer(s: &str) -> Option<f64> {
    if is_digits(s) { s.parse().ok() } else { None }
}

fn parse_decimal(s: &str) -> Option<f64> {
    match s.split_once('.') {
        Some((int, frac)) if is_digits(int) && is_digits(frac) => s.parse().ok(),
        Some(_) => None,
        None => parse_integer(s),
    }
}

fn parse_fraction(s: &str) -> Option<f64> {
    let (num, den) = s.split_once('/')?;
    let num = parse_integer(num)?;
    let den = parse_integer(den)?;
    if den == 0.0 { None } else { Some(num / den) }
}
