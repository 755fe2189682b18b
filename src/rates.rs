//! Exchange-rate table loaded once per admin session
//!
//! The backend delivers a flat list of `{code, symbol, rate}` records with
//! rates quoted against an implicit anchor currency (NGN in this deployment).
//! The table is immutable for the lifetime of a session; a manual refresh
//! replaces the whole table in a single assignment rather than mutating it.

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Anchor currency of the backend's rate table (rate is always 1.0)
pub const ANCHOR_CODE: &str = "NGN";

/// Display glyph of the anchor currency
pub const ANCHOR_SYMBOL: &str = "₦";

/// Currency code used by the reconciler's USD leg
pub const USD_CODE: &str = "USD";

/// A single currency as delivered by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    /// ISO-4217-like identifier, unique within the table
    pub code: String,
    /// Display glyph, e.g. "₦" or "$"
    pub symbol: String,
    /// Exchange rate relative to the anchor currency
    pub rate: f64,
}

impl CurrencyRecord {
    /// Create a new currency record
    pub fn new(code: impl Into<String>, symbol: impl Into<String>, rate: f64) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            rate,
        }
    }

    /// The hardcoded anchor record used when no table is available
    pub fn anchor() -> Self {
        Self::new(ANCHOR_CODE, ANCHOR_SYMBOL, 1.0)
    }
}

/// Immutable per-session rate table with O(1) code lookup
#[derive(Debug, Clone)]
pub struct RateTable {
    records: Vec<CurrencyRecord>,
    index: HashMap<String, usize>,
    fetched_at: DateTime<Utc>,
}

impl RateTable {
    /// Build a table from backend records.
    ///
    /// An empty list degrades to [`RateTable::fallback`], so a table always
    /// holds at least one record. Duplicate codes keep the first occurrence.
    pub fn new(records: Vec<CurrencyRecord>) -> Self {
        if records.is_empty() {
            log::warn!("backend returned no currencies, using fallback table");
            return Self::fallback();
        }

        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            index.entry(record.code.clone()).or_insert(i);
        }

        log::debug!("rate table loaded with {} currencies", records.len());
        Self {
            records,
            index,
            fetched_at: Utc::now(),
        }
    }

    /// Single-currency table used before the fetch resolves or after it fails
    pub fn fallback() -> Self {
        let anchor = CurrencyRecord::anchor();
        let mut index = HashMap::with_capacity(1);
        index.insert(anchor.code.clone(), 0);
        Self {
            records: vec![anchor],
            index,
            fetched_at: Utc::now(),
        }
    }

    /// Look up a currency by code (exact match, as the backend delivers them)
    pub fn get(&self, code: &str) -> Option<&CurrencyRecord> {
        self.index.get(code).map(|&i| &self.records[i])
    }

    /// Resolve the admin's selected display currency.
    ///
    /// Unknown codes fall back to the first record in the table, which is the
    /// anchor record on a fallback table.
    pub fn selected(&self, code: &str) -> &CurrencyRecord {
        match self.get(code) {
            Some(record) => record,
            None => {
                log::debug!("selected currency {} not in table, using first entry", code);
                &self.records[0]
            }
        }
    }

    /// Rate for a code with the `rate || 1` truthiness rule applied.
    ///
    /// Missing codes, zero rates and non-finite rates all resolve to 1.0 so
    /// that division by the result can never blow up downstream. Negative
    /// rates are passed through unchanged; only zero is treated as invalid.
    pub fn rate_or_one(&self, code: &str) -> f64 {
        match self.get(code) {
            Some(record) if record.rate != 0.0 && record.rate.is_finite() => record.rate,
            Some(record) => {
                log::debug!("invalid rate {} for {}, substituting 1", record.rate, code);
                1.0
            }
            None => {
                log::debug!("no rate for {}, substituting 1", code);
                1.0
            }
        }
    }

    /// Display symbol for a code, if the code is known
    pub fn symbol_for(&self, code: &str) -> Option<&str> {
        self.get(code).map(|record| record.symbol.as_str())
    }

    /// Number of currencies in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// A table always holds at least the fallback record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in backend order
    pub fn iter(&self) -> std::slice::Iter<'_, CurrencyRecord> {
        self.records.iter()
    }

    /// When this table was constructed
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::fallback()
    }
}
