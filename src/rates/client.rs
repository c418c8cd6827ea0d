// src/rates/client.rs
use crate::config::{Config, currency_pair};
use crate::utils::error::ReportError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Source of currency conversion ratios
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Returns how many units of `to` one unit of `from` is worth
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64, ReportError>;
}

/// Client for the compact currency conversion API
///
/// Requests look like `convert?q=USD_CAD&compact=y` and answer with
/// `{"USD_CAD": {"val": 1.3127}}`.
pub struct RateClient {
    config: Config,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct CompactRate {
    val: f64,
}

impl RateClient {
    /// Creates a new RateClient using the `[rates]` URL template
    pub fn new(config: Config, client: Client) -> Self {
        RateClient { config, client }
    }
}

#[async_trait]
impl RateSource for RateClient {
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64, ReportError> {
        let url = self.config.format_rates_url(from, to)?;
        let pair = currency_pair(from, to);
        log::debug!("Fetching {} conversion rate", pair);

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        decode_compact_rate(&body, &pair)
    }
}

/// Extracts the rate for `pair` from a compact conversion response
pub fn decode_compact_rate(body: &str, pair: &str) -> Result<f64, ReportError> {
    let mut root: Map<String, Value> = serde_json::from_str(body)?;
    let entry = root
        .remove(pair)
        .ok_or_else(|| ReportError::ProtocolError(format!("no rate returned for {}", pair)))?;
    let rate: CompactRate = serde_json::from_value(entry)?;
    Ok(rate.val)
}
