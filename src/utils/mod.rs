// src/utils/mod.rs
//! Utilities module for common functionality
//!
//! Error handling and logging infrastructure shared by every other module.

/// Error types and handling utilities
///
/// Contains the [`ReportError`] enum which defines every failure the
/// reporting tool can surface, along with conversion implementations.
pub mod error;

/// Logging configuration and utilities
pub mod logging;

#[cfg(test)]
pub(crate) mod test_server;

// Re-export for easier access
pub use error::ReportError;
pub use logging::init_logging;
