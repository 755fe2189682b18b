//! Mixed-currency balance totals
//!
//! Dashboard footers show one grand total in the selected display currency
//! and one USD total. The two figures deliberately come from different code
//! paths ([`convert`] vs [`usd_equivalent`]) and are never cross-checked;
//! each is a plain left fold with no shortcuts.

use crate::convert::{convert, usd_equivalent};
use crate::format::{format_amount, round2};
use crate::model::Balance;
use crate::rates::{CurrencyRecord, RateTable};

/// Total of all balances expressed in the selected display currency
pub fn total_in<B: Balance>(
    entities: &[B],
    table: &RateTable,
    selected: &CurrencyRecord,
) -> f64 {
    entities.iter().fold(0.0, |sum, entity| {
        sum + convert(entity.balance(), entity.currency_code(), table, selected)
    })
}

/// Total of all balances expressed in USD, via the USD leg.
///
/// Per-entity values keep their sign; debits reduce the total instead of
/// being clamped away.
pub fn total_usd<B: Balance>(entities: &[B], table: &RateTable) -> f64 {
    entities.iter().fold(0.0, |sum, entity| {
        sum + usd_equivalent(entity.balance(), entity.currency_code(), table)
    })
}

/// Both grand totals for a list of balances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceSummary {
    /// Total in the selected display currency
    pub total: f64,
    /// Total in USD
    pub total_usd: f64,
}

impl BalanceSummary {
    /// Selected-currency total as a display string
    pub fn formatted(&self, selected: &CurrencyRecord) -> String {
        format_amount(Some(self.total), Some(selected))
    }

    /// USD total as a display string
    pub fn formatted_usd(&self) -> String {
        format!("${:.2}", round2(self.total_usd))
    }
}

/// Fold a list of balances into both grand totals
pub fn summarize<B: Balance>(
    entities: &[B],
    table: &RateTable,
    selected: &CurrencyRecord,
) -> BalanceSummary {
    BalanceSummary {
        total: total_in(entities, table, selected),
        total_usd: total_usd(entities, table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;
    use approx::assert_relative_eq;

    fn table() -> RateTable {
        RateTable::new(vec![
            CurrencyRecord::new("NGN", "₦", 1.0),
            CurrencyRecord::new("USD", "$", 2.0),
        ])
    }

    fn user(balance: f64, currency: Option<&str>) -> User {
        User {
            username: "u".to_string(),
            balance,
            currency: currency.map(str::to_string),
        }
    }

    #[test]
    fn test_total_matches_individual_conversions() {
        let t = table();
        let naira = t.selected("NGN").clone();
        let users = vec![user(100.0, Some("NGN")), user(50.0, Some("USD"))];

        let expected = convert(100.0, "NGN", &t, &naira) + convert(50.0, "USD", &t, &naira);
        assert_relative_eq!(total_in(&users, &t, &naira), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_list_totals_zero() {
        let t = table();
        let naira = t.selected("NGN").clone();
        let users: Vec<User> = vec![];

        assert_eq!(total_in(&users, &t, &naira), 0.0);
        assert_eq!(total_usd(&users, &t), 0.0);
    }

    #[test]
    fn test_usd_total_uses_usd_leg() {
        let t = table();
        // 100 NGN / rate 1 = 100, plus 50 USD straight through
        let users = vec![user(100.0, None), user(50.0, Some("USD"))];
        assert_eq!(total_usd(&users, &t), 150.0);
    }

    #[test]
    fn test_usd_total_keeps_debits() {
        let t = table();
        let users = vec![user(100.0, Some("USD")), user(-30.0, Some("USD"))];
        assert_eq!(total_usd(&users, &t), 70.0);
    }

    #[test]
    fn test_unknown_currency_degrades_not_skips() {
        let t = table();
        let naira = t.selected("NGN").clone();
        let users = vec![user(40.0, Some("XYZ"))];

        // Rate 1 fallback: the entry still contributes.
        assert_eq!(total_in(&users, &t, &naira), 40.0);
    }

    #[test]
    fn test_summary_formatting() {
        let t = table();
        let naira = t.selected("NGN").clone();
        let users = vec![user(100.0, Some("NGN")), user(50.0, Some("USD"))];

        let summary = summarize(&users, &t, &naira);
        // 100 NGN + (50 / 2) NGN = 125 NGN
        assert_eq!(summary.formatted(&naira), "₦ 125.00");
        // 100 / 1 + 50 = 150 USD via the USD leg
        assert_eq!(summary.formatted_usd(), "$150.00");
    }

    #[test]
    fn test_totals_diverge_across_code_paths() {
        // The two folds are independent formulas and are allowed to
        // disagree when rates are not USD-anchored.
        let t = table();
        let usd = t.selected("USD").clone();
        let users = vec![user(100.0, Some("NGN"))];

        let in_usd_via_convert = total_in(&users, &t, &usd); // 100 / 1 * 2
        let in_usd_via_leg = total_usd(&users, &t); // 100 / 1

        assert_eq!(in_usd_via_convert, 200.0);
        assert_eq!(in_usd_via_leg, 100.0);
    }
}
