// src/config/config.rs
use crate::utils::error::ReportError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::{Url, form_urlencoded};

/// Placeholder replaced with the coin identifier in the pool URL template
pub const COIN_PLACEHOLDER: &str = "{coin}";
/// Placeholder replaced with the API action in the pool URL template
pub const ACTION_PLACEHOLDER: &str = "{action}";
/// Placeholder replaced with the API key in the pool URL template
pub const API_KEY_PLACEHOLDER: &str = "{api_key}";
/// Placeholder replaced with a `FROM_TO` currency pair in the rates URL template
pub const PAIR_PLACEHOLDER: &str = "{pair}";

/// Main configuration structure for the reporting tool
///
/// Loaded once at startup and never modified afterwards; URL formatting
/// builds new strings instead of rewriting the template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Coin identifier used by the pool (e.g., "ethereum")
    pub coin: String,

    /// Pool API key
    pub api_key: String,

    /// Pool API URL template with `{coin}`, `{action}` and `{api_key}`
    pub url: String,

    /// SendGrid API key
    pub sendgrid_api_key: String,

    /// SendGrid API base address
    #[serde(default = "default_sendgrid_api_addr")]
    pub sendgrid_api_addr: String,

    /// Currency conversion settings
    #[serde(default)]
    pub rates: RatesConfig,

    /// Report email settings
    #[serde(default)]
    pub email: EmailConfig,
}

/// Currency conversion API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Conversion API URL template with a `{pair}` placeholder
    #[serde(default = "default_rates_url")]
    pub url: String,

    /// Symbol of the mined currency as known to the conversion API
    #[serde(default = "default_crypto_symbol")]
    pub crypto_symbol: String,

    /// Local fiat currency the USD value is converted into
    #[serde(default = "default_local_currency")]
    pub local_currency: String,
}

/// Sender, recipient and subject of report emails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Display name of the sender
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Sender address
    #[serde(default = "default_from_email")]
    pub from_email: String,
    /// Display name of the recipient
    #[serde(default = "default_to_name")]
    pub to_name: String,
    /// Recipient address
    #[serde(default = "default_to_email")]
    pub to_email: String,
    /// Subject line of the 24-hour report
    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_sendgrid_api_addr() -> String {
    "https://api.sendgrid.com".into()
}

fn default_rates_url() -> String {
    "https://free.currencyconverterapi.com/api/v5/convert?q={pair}&compact=y".into()
}

fn default_crypto_symbol() -> String {
    "ETH".into()
}

fn default_local_currency() -> String {
    "CAD".into()
}

fn default_from_name() -> String {
    "mining-reports".into()
}

fn default_from_email() -> String {
    "reports@example.com".into()
}

fn default_to_name() -> String {
    "Mining Reports".into()
}

fn default_to_email() -> String {
    "reports@example.com".into()
}

fn default_subject() -> String {
    "Ethereum Mining Report".into()
}

impl Default for RatesConfig {
    fn default() -> Self {
        RatesConfig {
            url: default_rates_url(),
            crypto_symbol: default_crypto_symbol(),
            local_currency: default_local_currency(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        EmailConfig {
            from_name: default_from_name(),
            from_email: default_from_email(),
            to_name: default_to_name(),
            to_email: default_to_email(),
            subject: default_subject(),
        }
    }
}

impl Config {
    /// Loads configuration from a file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded and validated configuration
    /// * `Err(ReportError)` - If the file couldn't be read, parsed or validated
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ReportError> {
        let path = path.into();
        let config_str = std::fs::read_to_string(&path).map_err(|e| {
            ReportError::ConfigError(format!(
                "Failed to read config at {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml(&config_str)
    }

    /// Parses and validates configuration from a TOML string
    pub fn from_toml(s: &str) -> Result<Self, ReportError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that required values are present and templates are usable
    pub fn validate(&self) -> Result<(), ReportError> {
        for (name, value) in [
            ("coin", &self.coin),
            ("api_key", &self.api_key),
            ("sendgrid_api_key", &self.sendgrid_api_key),
        ] {
            if value.trim().is_empty() {
                return Err(ReportError::ConfigError(format!("`{}` must not be empty", name)));
            }
        }

        for placeholder in [COIN_PLACEHOLDER, ACTION_PLACEHOLDER, API_KEY_PLACEHOLDER] {
            if !self.url.contains(placeholder) {
                return Err(ReportError::ConfigError(format!(
                    "pool url template `{}` is missing {}",
                    self.url, placeholder
                )));
            }
        }

        if !self.rates.url.contains(PAIR_PLACEHOLDER) {
            return Err(ReportError::ConfigError(format!(
                "rates url template `{}` is missing {}",
                self.rates.url, PAIR_PLACEHOLDER
            )));
        }

        Url::parse(&self.sendgrid_api_addr).map_err(|e| {
            ReportError::ConfigError(format!(
                "Invalid sendgrid_api_addr '{}': {}",
                self.sendgrid_api_addr, e
            ))
        })?;

        Ok(())
    }

    /// Builds the pool API URL for `action`
    ///
    /// Substitutes coin, action and API key at the positions their
    /// placeholders occupy in the template, percent-encoding each value.
    /// The template itself is left untouched, so the method can be called
    /// any number of times.
    pub fn format_pool_url(&self, action: &str) -> Result<Url, ReportError> {
        let url = fill_template(
            &self.url,
            &[
                (COIN_PLACEHOLDER, self.coin.as_str()),
                (ACTION_PLACEHOLDER, action),
                (API_KEY_PLACEHOLDER, self.api_key.as_str()),
            ],
        );
        Ok(Url::parse(&url)?)
    }

    /// Builds the conversion API URL for the `from` -> `to` pair
    pub fn format_rates_url(&self, from: &str, to: &str) -> Result<Url, ReportError> {
        let pair = currency_pair(from, to);
        let url = fill_template(&self.rates.url, &[(PAIR_PLACEHOLDER, pair.as_str())]);
        Ok(Url::parse(&url)?)
    }

    /// Generates a configuration template string
    ///
    /// # Returns
    /// String containing a commented TOML configuration template
    pub fn generate_template() -> String {
        let mut template = String::new();
        template.push_str("# Mining report configuration\n\n");
        template.push_str("# Coin identifier used by the pool API\n");
        template.push_str("coin = \"ethereum\"\n");
        template.push_str("# Pool API key\n");
        template.push_str("api_key = \"your_pool_api_key\"\n");
        template.push_str("# Pool API URL, {coin}, {action} and {api_key} are substituted\n");
        template.push_str(
            "url = \"https://{coin}.miningpoolhub.com/index.php?page=api&action={action}&api_key={api_key}\"\n",
        );
        template.push_str("# SendGrid API key used to deliver reports\n");
        template.push_str("sendgrid_api_key = \"your_sendgrid_api_key\"\n");
        template.push_str("sendgrid_api_addr = \"https://api.sendgrid.com\"\n\n");

        template.push_str("# Currency conversion\n");
        template.push_str("[rates]\n");
        template.push_str("# {pair} is substituted with FROM_TO, e.g. USD_CAD\n");
        template.push_str(
            "url = \"https://free.currencyconverterapi.com/api/v5/convert?q={pair}&compact=y\"\n",
        );
        template.push_str("crypto_symbol = \"ETH\"\n");
        template.push_str("local_currency = \"CAD\"\n\n");

        template.push_str("# Report email\n");
        template.push_str("[email]\n");
        template.push_str("from_name = \"mining-reports\"\n");
        template.push_str("from_email = \"reports@example.com\"\n");
        template.push_str("to_name = \"Mining Reports\"\n");
        template.push_str("to_email = \"reports@example.com\"\n");
        template.push_str("subject = \"Ethereum Mining Report\"\n");

        template
    }
}

/// Substitutes placeholders in a single left-to-right pass
///
/// Values are percent-encoded and never rescanned, so a value that happens
/// to contain a placeholder or URL delimiters stays inside its own slot.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    loop {
        let next = values
            .iter()
            .filter_map(|(placeholder, value)| {
                rest.find(*placeholder).map(|at| (at, *placeholder, *value))
            })
            .min_by_key(|(at, _, _)| *at);

        match next {
            Some((at, placeholder, value)) => {
                out.push_str(&rest[..at]);
                out.extend(form_urlencoded::byte_serialize(value.as_bytes()));
                rest = &rest[at + placeholder.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Formats a currency pair the way the conversion API keys it (`USD_CAD`)
pub fn currency_pair(from: &str, to: &str) -> String {
    format!("{}_{}", from.to_uppercase(), to.to_uppercase())
}
