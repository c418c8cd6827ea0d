//! Mining reports - automated bookkeeping for cryptocurrency mining farms
//!
//! This crate polls a mining pool's HTTP API for credited coins, values them
//! in USD and a local fiat currency, and emails the result:
//! - Pool API access with action-keyed response decoding
//! - Exchange rates fetched once per run
//! - HTML report delivery through SendGrid

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Mining pool API client and credit records
pub mod pool;

/// Currency conversion rates
pub mod rates;

/// Email types and delivery
pub mod mail;

/// Report generation and dispatch
pub mod report;

/// Utility functions and error handling
pub mod utils;

/// Command-line interface definitions
pub mod cli;

/// Configuration management
pub mod config;

/// Shared type definitions
pub mod types;

// Core exports
pub use cli::Commands;
pub use config::Config;
pub use mail::{Address, Email, Mailer, SendGridClient};
pub use pool::{CreditRecord, CreditSource, PoolClient};
pub use rates::{ExchangeRates, RateClient, RateSource};
pub use report::{CreditReport, ReportManager};
pub use types::ReportMethod;
pub use utils::{ReportError, init_logging};
