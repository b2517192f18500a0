//! Whole-unit currency formatting

use crate::config::CurrencyConfig;

/// Normalise a raw fee value.
///
/// Anything that does not parse as a finite number, and any negative value,
/// becomes `0.0`.
///
/// # Examples
///
/// ```
/// use freehold_domain::utils::currency::parse_fee;
///
/// assert_eq!(parse_fee(" 1500 "), 1500.0);
/// assert_eq!(parse_fee("-20"), 0.0);
/// assert_eq!(parse_fee("twelve"), 0.0);
/// ```
#[must_use]
pub fn parse_fee(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map_or(0.0, normalize_fee)
}

/// Clamp an already-numeric fee to a finite, non-negative value.
#[must_use]
pub fn normalize_fee(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Format an amount as whole currency units with digit grouping.
///
/// NaN and negative amounts render as zero. An amount too large to represent
/// renders as `∞`.
///
/// # Examples
///
/// ```
/// use freehold_domain::config::CurrencyConfig;
/// use freehold_domain::utils::currency::format_whole;
///
/// let gbp = CurrencyConfig::default();
/// assert_eq!(format_whole(1200.0, &gbp), "£1,200");
/// assert_eq!(format_whole(0.0, &gbp), "£0");
/// ```
#[must_use]
pub fn format_whole(amount: f64, currency: &CurrencyConfig) -> String {
    if amount.is_infinite() && amount.is_sign_positive() {
        return format!("{}∞", currency.symbol);
    }

    let digits = format!("{:.0}", normalize_fee(amount).round());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(currency.thousands_separator);
        }
        grouped.push(ch);
    }

    format!("{}{}", currency.symbol, grouped)
}
