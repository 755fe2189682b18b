//! Provider balance reconciliation
//!
//! Every provider row shows three figures: the balance in the provider's own
//! currency, the same balance in the admin's selected display currency, and
//! a USD equivalent. The three strings are produced here in one pass so a
//! list screen renders each row with a single call.

use crate::convert::{convert, usd_equivalent};
use crate::format::{format_amount, format_grouped, round2};
use crate::model::Provider;
use crate::rates::{CurrencyRecord, RateTable};

/// The three rendered figures for one provider row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledBalance {
    /// Balance in the admin's selected display currency
    pub converted: String,
    /// Balance in the provider's native currency, locale-grouped
    pub original: String,
    /// USD equivalent, clamped to non-negative for display
    pub usd: String,
}

/// Reconcile one provider's balance against the session rate table.
///
/// Called per row while a list renders, so every branch degrades to a
/// displayable string; nothing in here can panic or error. The `usd`
/// record supplies the code for the USD short-circuit and the symbol for
/// the USD figure (an empty symbol falls back to `"$"`).
pub fn reconcile(
    provider: &Provider,
    table: &RateTable,
    selected: &CurrencyRecord,
    usd: &CurrencyRecord,
) -> ReconciledBalance {
    let code = provider.currency_or_default();

    let original = format_grouped(provider.balance, code, table);

    let converted = format_amount(
        Some(convert(provider.balance, code, table, selected)),
        Some(selected),
    );

    let usd_value = if code == usd.code {
        provider.balance
    } else {
        usd_equivalent(provider.balance, code, table)
    };
    let usd_symbol = if usd.symbol.is_empty() {
        "$"
    } else {
        usd.symbol.as_str()
    };
    // Display clamp only; totals elsewhere keep debit signs.
    let usd = format!("{}{:.2}", usd_symbol, round2(usd_value.max(0.0)));

    ReconciledBalance {
        converted,
        original,
        usd,
    }
}
