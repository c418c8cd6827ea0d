// src/report/manager.rs
use super::render::{CreditReport, render_24hour_body};
use crate::config::{self, Config};
use crate::mail::{Address, Email, Mailer, SendGridClient};
use crate::pool::{CreditSource, PoolClient};
use crate::rates::{ExchangeRates, RateClient};
use crate::types::ReportMethod;
use crate::utils::error::ReportError;
use reqwest::Client;
use std::path::PathBuf;

/// Status the email provider returns when a message is queued
pub const EXPECTED_SEND_STATUS: u16 = 202;

/// Generates mining reports and delivers them by email
///
/// Holds the configuration, the exchange rates fetched at construction and
/// handles to the pool API and the mailer. Rates are never refreshed.
pub struct ReportManager<C = PoolClient, M = SendGridClient> {
    config: Config,
    rates: ExchangeRates,
    pool: C,
    mailer: M,
}

impl ReportManager {
    /// Builds a manager from a configuration file
    ///
    /// Loads the configuration, then fetches the crypto->USD and
    /// USD->local rates.
    ///
    /// # Errors
    /// Fails if the configuration can't be loaded or either rate lookup
    /// fails. No manager is returned in that case.
    pub async fn from_file(path: impl Into<PathBuf>) -> Result<Self, ReportError> {
        let config = config::load(path)?;
        let client = Client::new();

        let rate_client = RateClient::new(config.clone(), client.clone());
        let rates = ExchangeRates::fetch(
            &rate_client,
            &config.rates.crypto_symbol,
            &config.rates.local_currency,
        )
        .await?;

        let pool = PoolClient::new(config.clone(), client.clone());
        let mailer = SendGridClient::new(&config, client)?;

        Ok(ReportManager::new(config, rates, pool, mailer))
    }
}

impl<C: CreditSource, M: Mailer> ReportManager<C, M> {
    /// Assembles a manager from already-built parts
    pub fn new(config: Config, rates: ExchangeRates, pool: C, mailer: M) -> Self {
        ReportManager {
            config,
            rates,
            pool,
            mailer,
        }
    }

    /// Configuration the manager was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Exchange rates fetched at construction
    pub fn rates(&self) -> ExchangeRates {
        self.rates
    }

    /// Creates the report named by `method` and emails it
    ///
    /// # Arguments
    /// * `method` - One of the tags in [`ReportMethod::allowed`]
    ///
    /// # Returns
    /// * `Ok(CreditReport)` - The figures that were sent
    /// * `Err(ReportError)` - Unknown or unimplemented method, a failed
    ///   fetch or send, or a provider status other than 202
    pub async fn create_report_and_send(&self, method: &str) -> Result<CreditReport, ReportError> {
        match method.parse::<ReportMethod>()? {
            ReportMethod::TwentyFourHourCredit => {
                let credit = self.pool.recent_credits_24hours().await?;
                let report = CreditReport::new(credit.amount, &self.rates);

                let status = self.send_24hour_email(&report).await?;
                if status != EXPECTED_SEND_STATUS {
                    return Err(ReportError::UnexpectedStatus {
                        expected: EXPECTED_SEND_STATUS,
                        got: status,
                    });
                }

                log::info!(
                    "Sent 24 hour report: {} {} mined ({} USD, {} {})",
                    report.mined,
                    self.config.rates.crypto_symbol,
                    report.usd_value,
                    report.local_value,
                    self.config.rates.local_currency
                );
                Ok(report)
            }
            ReportMethod::Credit => {
                Err(ReportError::NotSupported(ReportMethod::Credit.to_string()))
            }
        }
    }

    /// Values the day-by-day credit history without sending anything
    pub async fn credit_history(&self) -> Result<Vec<CreditReport>, ReportError> {
        let records = self.pool.recent_credits().await?;
        Ok(records
            .iter()
            .map(|record| CreditReport::from_record(record, &self.rates))
            .collect())
    }

    /// Emails the 24-hour figures and returns the provider's status code
    pub async fn send_24hour_email(&self, report: &CreditReport) -> Result<u16, ReportError> {
        let body = render_24hour_body(
            report,
            &self.config.rates.crypto_symbol,
            &self.config.rates.local_currency,
        );
        let email = Email::html(
            self.sender(),
            self.recipient(),
            self.config.email.subject.clone(),
            body,
        );
        self.send_email(&email).await
    }

    /// Sends an arbitrary report email and returns the provider's status code
    pub async fn send_email(&self, email: &Email) -> Result<u16, ReportError> {
        self.mailer.send(email).await
    }

    /// Configured sender identity
    pub fn sender(&self) -> Address {
        Address::new(&self.config.email.from_name, &self.config.email.from_email)
    }

    /// Configured recipient identity
    pub fn recipient(&self) -> Address {
        Address::new(&self.config.email.to_name, &self.config.email.to_email)
    }
}
