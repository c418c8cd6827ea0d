// src/rates/mod.rs
//! Exchange rate lookup
//!
//! Rates are fetched once when a report manager is built and then reused
//! unchanged for the lifetime of the process.

/// Conversion API client
pub mod client;

pub use client::{RateClient, RateSource, decode_compact_rate};

use crate::utils::error::ReportError;
use serde::{Deserialize, Serialize};

/// Conversion ratios used to value mined coins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// USD value of one unit of the mined currency
    pub crypto_usd: f64,
    /// Local-currency value of one USD
    pub usd_local: f64,
}

impl ExchangeRates {
    /// Fetches both ratios with two independent lookups
    ///
    /// # Arguments
    /// * `source` - Conversion API
    /// * `crypto` - Symbol of the mined currency (e.g. "ETH")
    /// * `local` - Local fiat currency (e.g. "CAD")
    ///
    /// # Errors
    /// Fails if either lookup fails; no partial result is returned.
    pub async fn fetch<S: RateSource + ?Sized>(
        source: &S,
        crypto: &str,
        local: &str,
    ) -> Result<Self, ReportError> {
        let crypto_usd = source.fetch_rate(crypto, "USD").await?;
        let usd_local = source.fetch_rate("USD", local).await?;

        log::info!(
            "Exchange rates: 1 {} = {} USD, 1 USD = {} {}",
            crypto,
            crypto_usd,
            usd_local,
            local
        );

        Ok(ExchangeRates {
            crypto_usd,
            usd_local,
        })
    }
}
