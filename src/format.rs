//! Display formatting for monetary amounts
//!
//! Two formatters exist on purpose: [`format_amount`] is the panel-wide
//! "symbol space amount" style, and [`format_grouped`] is the locale-style
//! rendering with thousands separators used for a provider's native balance.

use crate::rates::{CurrencyRecord, RateTable};

/// Round to two decimals, half away from zero, locale independent
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Panel-wide money formatter: `"₦ 1234.50"`.
///
/// A missing amount or missing currency renders as the bare `"0.00"` with no
/// symbol. The source panel mixed both fallback styles across call sites;
/// this crate canonicalizes on the symbol-less variant.
pub fn format_amount(amount: Option<f64>, currency: Option<&CurrencyRecord>) -> String {
    match (amount, currency) {
        (Some(value), Some(currency)) if value.is_finite() => {
            format!("{} {:.2}", currency.symbol, round2(value))
        }
        _ => "0.00".to_string(),
    }
}

/// Locale-style currency rendering: `"$1,234.56"`.
///
/// Symbol comes from the rate table; unknown codes render as
/// `"CODE 1,234.56"` so the denomination is never silently dropped.
pub fn format_grouped(amount: f64, code: &str, table: &RateTable) -> String {
    let body = group_thousands(if amount.is_finite() { amount } else { 0.0 });
    match table.symbol_for(code) {
        Some(symbol) => format!("{}{}", symbol, body),
        None => format!("{} {}", code, body),
    }
}

/// Two-decimal rendering with commas every three integer digits
fn group_thousands(amount: f64) -> String {
    let rounded = round2(amount);
    let rendered = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
