// src/cli/commands.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mining reports - values pool credits in fiat and emails them
#[derive(Parser, Debug)]
#[command(name = "mining-reports")]
#[command(version, about, long_about = None)]
pub struct Commands {
    /// Log at debug level (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The action to perform (send a report, list credits, or generate config)
    #[command(subcommand)]
    pub action: Action,
}

/// Top-level commands for the reporting tool
#[derive(Subcommand, Debug)]
pub enum Action {
    /// Generate a report and email it
    Report(ReportOptions),

    /// Print the daily credit history with fiat values
    Credits(CreditsOptions),

    /// Generate configuration file template
    Config(ConfigOptions),
}

/// Options for sending a report
#[derive(Parser, Debug)]
pub struct ReportOptions {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Report method (24hour_credit, credit)
    #[arg(short, long, default_value = "24hour_credit")]
    pub method: String,
}

/// Options for listing the credit history
#[derive(Parser, Debug)]
pub struct CreditsOptions {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Options for generating configuration files
#[derive(Parser, Debug)]
pub struct ConfigOptions {
    /// Output file path
    #[arg(short, long, default_value = "config.toml")]
    pub output: PathBuf,
}
