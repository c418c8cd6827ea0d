// src/utils/error.rs
use serde_json;
use std::io;
use thiserror::Error;
use url;

/// Main error type for the reporting application
///
/// Every failure is terminal for the current invocation: the error is
/// surfaced to the caller as-is, or wrapped with a short message.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Configuration file or parameter errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// HTTP request/response errors
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    /// Standard I/O operation errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// A remote API answered with a payload that lacks an expected key
    #[error("Protocol violation: {0}")]
    ProtocolError(String),

    /// The requested report method is not in the allow-list
    #[error("invalid method {method:?}, must be one of {allowed:?}")]
    UnsupportedMethod {
        /// The method tag that was requested
        method: String,
        /// Every method tag the dispatcher recognises
        allowed: Vec<&'static str>,
    },

    /// The report method is recognised but has no implementation yet
    #[error("report method {0:?} is not yet supported")]
    NotSupported(String),

    /// The email provider answered with a status other than the expected one
    #[error("unacceptable return code, expected {expected} got {got}")]
    UnexpectedStatus {
        /// Status code that signals success
        expected: u16,
        /// Status code actually returned
        got: u16,
    },
}

/// Converts TOML decoding errors into ReportError
///
/// Configuration is the only TOML input, so the error is wrapped in a
/// `ConfigError` variant with context.
impl From<toml::de::Error> for ReportError {
    fn from(e: toml::de::Error) -> Self {
        ReportError::ConfigError(format!("Invalid config format: {}", e))
    }
}
