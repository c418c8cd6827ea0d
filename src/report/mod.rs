// src/report/mod.rs
//! Report generation and delivery
//!
//! [`ReportManager`] ties the other modules together: it fetches credit
//! figures from the pool, values them with the cached exchange rates and
//! emails the result.

/// Dispatch and delivery
pub mod manager;

/// Fiat valuation and HTML rendering
pub mod render;

pub use manager::{EXPECTED_SEND_STATUS, ReportManager};
pub use render::{CreditReport, render_24hour_body};
