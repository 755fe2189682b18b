//! Fail-soft currency conversion
//!
//! Conversions run synchronously during render for every table row, so
//! nothing here may panic or return an error. Degradation tiers, in order:
//! the real rate from the table, rate 1 for unknown codes, and 0 when the
//! amount or target rate is itself unusable.

use crate::rates::{CurrencyRecord, RateTable, USD_CODE};

/// Convert an amount from one currency into the selected display currency.
///
/// Rates are quoted against the anchor currency, so conversion is two hops:
/// divide by the source rate, multiply by the target rate. Unknown source
/// codes are treated as already anchor-denominated (rate 1). A zero or
/// non-finite amount, or an unusable target rate, yields 0.0 so the UI
/// renders "0.00" instead of an error state. Negative amounts keep their
/// sign; debit and credit rows must not be clamped.
pub fn convert(
    amount: f64,
    source_code: &str,
    table: &RateTable,
    target: &CurrencyRecord,
) -> f64 {
    if amount == 0.0 || !amount.is_finite() {
        return 0.0;
    }
    if target.rate == 0.0 || !target.rate.is_finite() {
        return 0.0;
    }

    let source_rate = table.rate_or_one(source_code);
    amount / source_rate * target.rate
}

/// USD equivalent of a balance, via the dedicated USD leg.
///
/// This intentionally does not route through [`convert`]: the deployed
/// backend treats table rates as directly divisible into USD for this leg,
/// and the panel's displayed figures follow that behaviour. A USD balance
/// passes through unchanged; a non-positive resolved rate passes the balance
/// through unchanged as well.
///
/// The result is signed. Clamping to non-negative happens at display time in
/// the reconciler, not here, so aggregate totals keep debit signs.
pub fn usd_equivalent(balance: f64, currency_code: &str, table: &RateTable) -> f64 {
    if !balance.is_finite() {
        return 0.0;
    }
    if currency_code == USD_CODE {
        return balance;
    }

    let rate = table.rate_or_one(currency_code);
    if rate > 0.0 {
        balance / rate
    } else {
        balance
    }
}
