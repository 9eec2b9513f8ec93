//! en-US currency formatting.
//!
//! Matches the platform `Intl.NumberFormat("en-US", { style: "currency" })`
//! output: symbol or ISO code prefix, comma grouping, and the currency's own
//! number of minor units. Symbols and non-default minor units come from
//! [`config::currencies`].

use rust_decimal::prelude::*;

use crate::config::{self, CurrencySpec};
use crate::error::{ActivityStatsError, Result};
use crate::models::FiatAmount;

/// Format `amount` as an en-US currency string for the ISO `code`.
///
/// ```
/// use activity_stats::format::format_currency;
///
/// assert_eq!(format_currency("1234.5", "USD").unwrap(), "$1,234.50");
/// assert_eq!(format_currency(1234.5, "JPY").unwrap(), "¥1,235");
/// ```
///
/// # Errors
///
/// * [`ActivityStatsError::UnknownCurrency`] if `code` is not three ASCII letters.
/// * [`ActivityStatsError::InvalidAmount`] if `amount` is not a finite number
///   or lies outside the range of a [`Decimal`].
pub fn format_currency(amount: impl Into<FiatAmount>, code: &str) -> Result<String> {
    let spec = config::currency(code)
        .ok_or_else(|| ActivityStatsError::UnknownCurrency(code.to_string()))?;

    let amount = amount.into();
    let invalid = || ActivityStatsError::InvalidAmount {
        value: amount.to_string(),
        location: "currency formatting".to_string(),
    };
    let value = amount.to_f64().ok_or_else(invalid)?;
    let decimal = to_decimal(value).ok_or_else(invalid)?;

    Ok(format_decimal(
        decimal,
        value.is_sign_negative(),
        &code.to_ascii_uppercase(),
        spec,
    ))
}

/// Convert through the shortest round-trip decimal form of the `f64`, so
/// `1.005` rounds to `1.01` the way a decimal reader expects.
fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64_retain(value))
}

fn format_decimal(value: Decimal, negative: bool, code: &str, spec: CurrencySpec) -> String {
    let rounded = value
        .abs()
        .round_dp_with_strategy(spec.minor_units, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.*}", spec.minor_units as usize, rounded);
    let (int_digits, frac_digits) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    match spec.symbol {
        Some(symbol) => out.push_str(symbol),
        None => {
            out.push_str(code);
            out.push(config::CODE_SEPARATOR);
        }
    }
    out.push_str(&group_thousands(int_digits));
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(frac_digits);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
