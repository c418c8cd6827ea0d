// src/cli/mod.rs
//! Command-line interface definitions

/// clap argument structures
pub mod commands;

pub use commands::{Action, Commands, ConfigOptions, CreditsOptions, ReportOptions};
