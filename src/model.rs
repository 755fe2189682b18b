//! Entity subsets carrying money fields
//!
//! Only the fields the money layer reads are modelled here; the rest of the
//! provider/user payloads stay with the CRUD screens that own them.

use serde::{Deserialize, Serialize};

/// Default denomination for provider balances when the backend omits one
pub const PROVIDER_DEFAULT_CURRENCY: &str = "USD";

/// Default denomination for user balances when the backend omits one
pub const USER_DEFAULT_CURRENCY: &str = "NGN";

/// API provider, reduced to its money fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    /// Balance in the provider's own currency
    #[serde(default)]
    pub balance: f64,
    /// Currency code of `balance`; absent means USD
    #[serde(default)]
    pub currency: Option<String>,
    /// Backend-supplied override rate (1 NGN in provider currency).
    /// Display-only: reconciliation math never reads it.
    #[serde(default)]
    pub convention_rate: Option<f64>,
}

impl Provider {
    /// Currency code with the provider default applied
    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or(PROVIDER_DEFAULT_CURRENCY)
    }
}

/// Panel user, reduced to its money fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Balance in the user's own currency
    #[serde(default)]
    pub balance: f64,
    /// Currency code of `balance`; absent means NGN
    #[serde(default)]
    pub currency: Option<String>,
}

impl User {
    /// Currency code with the user default applied
    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or(USER_DEFAULT_CURRENCY)
    }
}

/// Anything with a balance denominated in some currency.
///
/// The aggregate reducers are generic over this so user lists and provider
/// lists fold through the same code path.
pub trait Balance {
    /// Balance in the entity's own currency
    fn balance(&self) -> f64;

    /// Currency code of the balance, defaults already applied
    fn currency_code(&self) -> &str;
}

impl Balance for Provider {
    fn balance(&self) -> f64 {
        self.balance
    }

    fn currency_code(&self) -> &str {
        self.currency_or_default()
    }
}

impl Balance for User {
    fn balance(&self) -> f64 {
        self.balance
    }

    fn currency_code(&self) -> &str {
        self.currency_or_default()
    }
}
