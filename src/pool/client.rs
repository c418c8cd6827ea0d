// src/pool/client.rs

//! Mining pool API client
//!
//! The pool answers every request with an object keyed by the action name,
//! e.g. `{"getdashboarddata": {"version": "1.0.0", "data": {...}}}`. Records
//! are pulled out in two steps: the action's body is decoded into an
//! [`ActionResponse`], then a single key of its `data` map is decoded into the
//! requested record type.
use super::models::{
    ActionResponse, CreditRecord, DASHBOARD_ACTION, RECENT_CREDITS_24H_KEY, RECENT_CREDITS_KEY,
};
use crate::config::Config;
use crate::utils::error::ReportError;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Source of mined-credit figures
#[async_trait]
pub trait CreditSource: Send + Sync {
    /// Coins credited over the last 24 hours
    async fn recent_credits_24hours(&self) -> Result<CreditRecord, ReportError>;

    /// Coins credited per day over the last two weeks
    async fn recent_credits(&self) -> Result<Vec<CreditRecord>, ReportError>;
}

/// Client for the pool's HTTP API
pub struct PoolClient {
    /// Configuration holding the URL template, coin and API key
    config: Config,
    /// HTTP client used for every request
    client: Client,
}

impl PoolClient {
    /// Creates a new PoolClient
    ///
    /// # Arguments
    /// * `config` - Loaded configuration (only the pool fields are used)
    /// * `client` - Shared HTTP client
    pub fn new(config: Config, client: Client) -> Self {
        PoolClient { config, client }
    }

    /// Fetches `action` and decodes `data[key]` into `T`
    ///
    /// # Errors
    /// Returns `ReportError` if:
    /// - The formatted URL is malformed
    /// - The request fails or the pool answers with an error status
    /// - The body is not the expected action-keyed JSON
    pub async fn fetch_action_data<T: DeserializeOwned>(
        &self,
        action: &str,
        key: &str,
    ) -> Result<T, ReportError> {
        let url = self.config.format_pool_url(action)?;
        log::debug!("Querying pool action '{}' for '{}'", action, key);

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        decode_action_data(&body, action, key)
    }
}

#[async_trait]
impl CreditSource for PoolClient {
    async fn recent_credits_24hours(&self) -> Result<CreditRecord, ReportError> {
        self.fetch_action_data(DASHBOARD_ACTION, RECENT_CREDITS_24H_KEY)
            .await
    }

    async fn recent_credits(&self) -> Result<Vec<CreditRecord>, ReportError> {
        self.fetch_action_data(DASHBOARD_ACTION, RECENT_CREDITS_KEY)
            .await
    }
}

/// Decodes `body[action].data[key]` into `T`
///
/// A missing action or data key is reported as a protocol error naming the
/// key; anything that fails to decode surfaces the JSON error.
pub fn decode_action_data<T: DeserializeOwned>(
    body: &str,
    action: &str,
    key: &str,
) -> Result<T, ReportError> {
    let mut root: Map<String, Value> = serde_json::from_str(body)?;
    let action_body = root.remove(action).ok_or_else(|| {
        ReportError::ProtocolError(format!("response has no '{}' object", action))
    })?;

    let mut response: ActionResponse = serde_json::from_value(action_body)?;
    let value = response.data.remove(key).ok_or_else(|| {
        ReportError::ProtocolError(format!("'{}' data has no '{}' entry", action, key))
    })?;

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_server::TestServer;

    fn pool_client(base_url: &str) -> PoolClient {
        let mut config = Config::from_toml(&Config::generate_template()).unwrap();
        config.api_key = "k3y".into();
        config.url = format!(
            "{base_url}/index.php?page=api&action={{action}}&api_key={{api_key}}&coin={{coin}}"
        );
        PoolClient::new(config, Client::new())
    }

    const DASHBOARD: &str = r#"{
        "getdashboarddata": {
            "version": "1.0.0",
            "runtime": 14.2,
            "data": {
                "raw": {"personal": {"hashrate": 180.5}},
                "recent_credits_24hours": {"amount": 0.01983214},
                "recent_credits": [
                    {"date": "2018-06-10", "amount": 0.0201},
                    {"date": "2018-06-09", "amount": 0.0187}
                ]
            }
        }
    }"#;

    #[test]
    fn test_decode_24hour_credit() {
        let record: CreditRecord =
            decode_action_data(DASHBOARD, DASHBOARD_ACTION, RECENT_CREDITS_24H_KEY).unwrap();
        assert_eq!(
            record,
            CreditRecord {
                amount: 0.01983214,
                date: None
            }
        );
    }

    #[test]
    fn test_decode_credit_history() {
        let records: Vec<CreditRecord> =
            decode_action_data(DASHBOARD, DASHBOARD_ACTION, RECENT_CREDITS_KEY).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date.as_deref(), Some("2018-06-10"));
        assert_eq!(records[1].amount, 0.0187);
    }

    #[test]
    fn test_missing_action_is_protocol_error() {
        let result: Result<CreditRecord, _> =
            decode_action_data(DASHBOARD, "getuserbalance", RECENT_CREDITS_24H_KEY);
        match result {
            Err(ReportError::ProtocolError(msg)) => assert!(msg.contains("getuserbalance")),
            other => panic!("expected ProtocolError, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_data_key_is_protocol_error() {
        let result: Result<CreditRecord, _> =
            decode_action_data(DASHBOARD, DASHBOARD_ACTION, "balance");
        match result {
            Err(ReportError::ProtocolError(msg)) => assert!(msg.contains("balance")),
            other => panic!("expected ProtocolError, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_shape_is_json_error() {
        let result: Result<CreditRecord, _> =
            decode_action_data(DASHBOARD, DASHBOARD_ACTION, RECENT_CREDITS_KEY);
        assert!(
            matches!(result, Err(ReportError::JsonError(_))),
            "a list must not decode into a single record"
        );

        let result: Result<CreditRecord, _> =
            decode_action_data("[]", DASHBOARD_ACTION, RECENT_CREDITS_24H_KEY);
        assert!(matches!(result, Err(ReportError::JsonError(_))));

        let result: Result<CreditRecord, _> = decode_action_data(
            r#"{"getdashboarddata": {"version": "1.0.0"}}"#,
            DASHBOARD_ACTION,
            RECENT_CREDITS_24H_KEY,
        );
        assert!(
            matches!(result, Err(ReportError::JsonError(_))),
            "an action body without data must fail to decode"
        );
    }

    #[tokio::test]
    async fn test_recent_credits_24hours_over_http() {
        let server = TestServer::start(vec![(200, DASHBOARD.to_string())]).await;
        let client = pool_client(&server.base_url);

        let record = client.recent_credits_24hours().await.unwrap();
        assert_eq!(record.amount, 0.01983214);

        let requests = server.requests().await;
        assert!(
            requests[0].starts_with(
                "GET /index.php?page=api&action=getdashboarddata&api_key=k3y&coin=ethereum "
            ),
            "unexpected request line: {}",
            requests[0]
        );
    }

    #[tokio::test]
    async fn test_recent_credits_over_http() {
        let server = TestServer::start(vec![(200, DASHBOARD.to_string())]).await;
        let records = pool_client(&server.base_url).recent_credits().await.unwrap();
        assert_eq!(records.len(), 2);
        server.requests().await;
    }

    #[tokio::test]
    async fn test_error_status_is_http_error() {
        let server = TestServer::start(vec![(500, DASHBOARD.to_string())]).await;
        let result = pool_client(&server.base_url).recent_credits_24hours().await;
        assert!(
            matches!(result, Err(ReportError::HttpError(_))),
            "a 500 must abort even when the body decodes, got {result:?}"
        );
        server.requests().await;
    }
}
