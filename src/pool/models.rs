// src/pool/models.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dashboard action used for every credit query
pub const DASHBOARD_ACTION: &str = "getdashboarddata";
/// Key of the single 24-hour credit record inside the dashboard data
pub const RECENT_CREDITS_24H_KEY: &str = "recent_credits_24hours";
/// Key of the daily credit history inside the dashboard data
pub const RECENT_CREDITS_KEY: &str = "recent_credits";

/// Body of one action inside the pool's action-keyed response
///
/// Only `data` is used; its contents differ per action, so it stays untyped
/// until a specific key is pulled out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    /// API version reported by the pool
    #[serde(default)]
    pub version: Option<String>,
    /// Server-side runtime of the request in milliseconds
    #[serde(default)]
    pub runtime: Option<f64>,
    /// Action payload
    pub data: Map<String, Value>,
}

/// Coins credited by the pool over one reporting window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRecord {
    /// Amount of mined currency
    pub amount: f64,
    /// Day the credit belongs to, as sent by the pool (absent for the 24h total)
    #[serde(default)]
    pub date: Option<String>,
}
