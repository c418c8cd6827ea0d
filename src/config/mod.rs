// src/config/mod.rs
//! Configuration management for the reporting tool
//!
//! This module handles all configuration-related functionality including:
//! - Loading, parsing and validating the TOML configuration file
//! - Pool and conversion API URL templating
//! - Generating a commented configuration template

/// Core configuration implementation
///
/// Contains the [`Config`] struct and its sub-sections.
pub mod config;

// Re-export key items for easy access
pub use config::{Config, EmailConfig, RatesConfig, currency_pair};

use crate::utils::error::ReportError;
use std::path::PathBuf;

/// Loads reporting configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the configuration file (anything convertible to PathBuf)
///
/// # Returns
/// * `Ok(Config)` - Successfully loaded configuration
/// * `Err(ReportError)` - If the file couldn't be read, parsed or validated
pub fn load(path: impl Into<PathBuf>) -> Result<Config, ReportError> {
    Config::load(path)
}

/// Generates a commented configuration template
pub fn generate_template() -> String {
    Config::generate_template()
}
