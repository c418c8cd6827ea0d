// src/main.rs
use clap::Parser;
use mining_reports::*;
use tokio::runtime::{Builder, Runtime};

/// Main entry point for the reporting tool
///
/// # Flow
/// 1. Parses command line arguments
/// 2. Initializes logging
/// 3. Delegates to the subcommand handler and propagates its error
fn main() -> Result<(), ReportError> {
    let cli = cli::Commands::parse();
    utils::init_logging(cli.verbose);

    match cli.action {
        cli::Action::Report(opts) => send_report(opts),
        cli::Action::Credits(opts) => show_credits(opts),
        cli::Action::Config(opts) => generate_config(opts),
    }
}

/// Builds the manager and dispatches one report
///
/// # Operations
/// 1. Loads configuration and fetches exchange rates
/// 2. Fetches pool figures, renders and sends the email
fn send_report(opts: cli::ReportOptions) -> Result<(), ReportError> {
    runtime()?.block_on(async {
        let manager = ReportManager::from_file(&opts.config).await?;
        manager.create_report_and_send(&opts.method).await?;
        Ok(())
    })
}

/// Prints the daily credit history valued with the current rates
fn show_credits(opts: cli::CreditsOptions) -> Result<(), ReportError> {
    runtime()?.block_on(async {
        let manager = ReportManager::from_file(&opts.config).await?;
        let history = manager.credit_history().await?;
        let currencies = &manager.config().rates;
        let rates = manager.rates();

        println!(
            "1 {} = {} USD, 1 USD = {} {}",
            currencies.crypto_symbol, rates.crypto_usd, rates.usd_local, currencies.local_currency
        );
        println!(
            "{:<12} {:>14} {:>14} {:>14}",
            "date", currencies.crypto_symbol, "USD", currencies.local_currency
        );
        for day in &history {
            println!(
                "{:<12} {:>14.8} {:>14.2} {:>14.2}",
                day.date.as_deref().unwrap_or("-"),
                day.mined,
                day.usd_value,
                day.local_value
            );
        }
        Ok(())
    })
}

/// Writes a configuration template to the requested path
fn generate_config(opts: cli::ConfigOptions) -> Result<(), ReportError> {
    let config = config::generate_template();
    std::fs::write(&opts.output, config)?;
    log::info!("Wrote configuration template to {}", opts.output.display());
    Ok(())
}

/// Single-threaded runtime; every request is awaited in sequence
fn runtime() -> Result<Runtime, ReportError> {
    Ok(Builder::new_current_thread().enable_all().build()?)
}
