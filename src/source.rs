//! Admin backend rates endpoint client
//!
//! Fetches the session rate table from `GET {base}/admin/currencies`. The
//! fetch happens once at admin-session start; a failure leaves the fallback
//! table in place for the rest of the session, with no retry loop.

use crate::error::{MoneyError, Result};
use crate::rates::{CurrencyRecord, RateTable};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Wire shape of the currencies endpoint
#[derive(Debug, Deserialize)]
pub struct CurrenciesPayload {
    pub success: bool,
    #[serde(default)]
    pub currencies: Vec<CurrencyRecord>,
}

/// HTTP client for the admin rates endpoint
pub struct RatesClient {
    client: Client,
    base_url: String,
}

impl RatesClient {
    /// Create a client against the given backend base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| MoneyError::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch and decode the session rate table
    pub async fn fetch_rate_table(&self) -> Result<RateTable> {
        let url = format!("{}/admin/currencies", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MoneyError::Http(format!("rate request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(MoneyError::RateFetch(format!(
                "backend returned {}",
                response.status()
            )));
        }

        let payload: CurrenciesPayload = response
            .json()
            .await
            .map_err(|e| MoneyError::InvalidPayload(format!("bad currencies payload: {}", e)))?;

        Self::table_from_payload(payload)
    }

    /// Fetch the table, degrading to the hardcoded fallback on any failure
    pub async fn fetch_or_fallback(&self) -> RateTable {
        match self.fetch_rate_table().await {
            Ok(table) => table,
            Err(e) => {
                log::warn!("rate fetch failed, using fallback table: {}", e);
                RateTable::fallback()
            }
        }
    }

    /// Turn a decoded payload into a table
    pub fn table_from_payload(payload: CurrenciesPayload) -> Result<RateTable> {
        if !payload.success {
            return Err(MoneyError::RateFetch(
                "backend reported success=false".to_string(),
            ));
        }
        Ok(RateTable::new(payload.currencies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RatesClient::new("https://panel.example.com");
        assert!(client.is_ok());
    }

    #[test]
    fn test_payload_decoding() {
        let payload: CurrenciesPayload = serde_json::from_str(
            r#"{"success":true,"currencies":[
                {"code":"NGN","symbol":"₦","rate":1},
                {"code":"USD","symbol":"$","rate":0.00065}
            ]}"#,
        )
        .unwrap();

        let table = RatesClient::table_from_payload(payload).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rate_or_one("USD"), 0.00065);
    }

    #[test]
    fn test_unsuccessful_payload_is_an_error() {
        let payload: CurrenciesPayload =
            serde_json::from_str(r#"{"success":false}"#).unwrap();

        assert!(RatesClient::table_from_payload(payload).is_err());
    }

    #[test]
    fn test_empty_currency_list_degrades_to_fallback() {
        let payload: CurrenciesPayload =
            serde_json::from_str(r#"{"success":true,"currencies":[]}"#).unwrap();

        let table = RatesClient::table_from_payload(payload).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.get("NGN").is_some());
    }
}
