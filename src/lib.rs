//! # smm-money
//!
//! Currency conversion and balance reconciliation for an SMM reseller
//! admin panel.
//!
//! The backend quotes every exchange rate against an anchor currency (NGN)
//! and the admin picks a display currency per session. This crate owns the
//! session rate table, the fail-soft converter, the display formatters, the
//! provider balance reconciler and the mixed-currency aggregate reducers.
//! Conversion never errors: unknown codes degrade to rate 1 and unusable
//! inputs degrade to 0, so list screens always render.
//!
//! ## Example
//!
//! ```rust
//! use smm_money::prelude::*;
//!
//! let table = RateTable::new(vec![
//!     CurrencyRecord::new("NGN", "₦", 1.0),
//!     CurrencyRecord::new("USD", "$", 0.00065),
//! ]);
//!
//! let usd = table.selected("USD").clone();
//! let shown = format_amount(Some(convert(15_000.0, "NGN", &table, &usd)), Some(&usd));
//! assert_eq!(shown, "$ 9.75");
//! ```

pub mod aggregate;
pub mod convert;
pub mod error;
pub mod format;
pub mod model;
pub mod rates;
pub mod reconcile;
#[cfg(feature = "async")]
pub mod source;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::aggregate::{summarize, total_in, total_usd, BalanceSummary};
    pub use crate::convert::{convert, usd_equivalent};
    pub use crate::error::{MoneyError, Result};
    pub use crate::format::{format_amount, format_grouped, round2};
    pub use crate::model::{Balance, Provider, User};
    pub use crate::rates::{CurrencyRecord, RateTable};
    pub use crate::reconcile::{reconcile, ReconciledBalance};
    #[cfg(feature = "async")]
    pub use crate::source::RatesClient;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_surface() {
        let table = RateTable::fallback();
        let naira = table.selected("NGN").clone();
        assert_eq!(format_amount(Some(convert(5.0, "NGN", &table, &naira)), Some(&naira)), "₦ 5.00");
    }
}
