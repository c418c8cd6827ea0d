// src/pool/mod.rs
//! Mining pool API access
//!
//! Fetches credit figures from the pool's HTTP API. Each query is a single
//! GET against the configured URL template followed by a two-step decode of
//! the action-keyed response.

/// HTTP client and response decoding
pub mod client;

/// Response and record types
pub mod models;

// Re-export main components for cleaner imports
pub use client::{CreditSource, PoolClient, decode_action_data};
pub use models::{ActionResponse, CreditRecord};
