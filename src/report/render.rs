// src/report/render.rs
use crate::pool::CreditRecord;
use crate::rates::ExchangeRates;

/// Mined amount of one reporting window and its fiat value
#[derive(Debug, Clone, PartialEq)]
pub struct CreditReport {
    /// Day of the window, when the pool reports one
    pub date: Option<String>,
    /// Coins mined
    pub mined: f64,
    /// `mined` valued in USD
    pub usd_value: f64,
    /// `usd_value` converted to the local currency
    pub local_value: f64,
}

impl CreditReport {
    /// Values `mined` with the given rates
    ///
    /// No rounding is applied: `local_value` is exactly
    /// `mined * crypto_usd * usd_local` under `f64` arithmetic.
    pub fn new(mined: f64, rates: &ExchangeRates) -> Self {
        let usd_value = mined * rates.crypto_usd;
        let local_value = usd_value * rates.usd_local;
        CreditReport {
            date: None,
            mined,
            usd_value,
            local_value,
        }
    }

    /// Values a pool credit record, keeping its date
    pub fn from_record(record: &CreditRecord, rates: &ExchangeRates) -> Self {
        CreditReport {
            date: record.date.clone(),
            ..Self::new(record.amount, rates)
        }
    }
}

/// Renders the HTML body of the 24-hour credit email
pub fn render_24hour_body(
    report: &CreditReport,
    crypto_symbol: &str,
    local_currency: &str,
) -> String {
    format!(
        "<br>{} Mined: {}<br>USD Value: {}<br>{} Value: {}",
        crypto_symbol, report.mined, report.usd_value, local_currency, report.local_value
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATES: ExchangeRates = ExchangeRates {
        crypto_usd: 480.25,
        usd_local: 1.3127,
    };

    #[test]
    fn test_values_are_chained_products() {
        for mined in [0.0, 0.01983214, 1.0, 3.5, 1e-9] {
            let report = CreditReport::new(mined, &RATES);
            assert_eq!(report.usd_value, mined * 480.25);
            assert_eq!(report.local_value, mined * 480.25 * 1.3127);
        }
    }

    #[test]
    fn test_from_record_keeps_date() {
        let record = CreditRecord {
            amount: 0.02,
            date: Some("2018-06-10".into()),
        };
        let report = CreditReport::from_record(&record, &RATES);
        assert_eq!(report.date.as_deref(), Some("2018-06-10"));
        assert_eq!(report.local_value, 0.02 * 480.25 * 1.3127);
    }

    #[test]
    fn test_render_24hour_body() {
        let report = CreditReport {
            date: None,
            mined: 0.5,
            usd_value: 240.125,
            local_value: 315.2,
        };
        assert_eq!(
            render_24hour_body(&report, "ETH", "CAD"),
            "<br>ETH Mined: 0.5<br>USD Value: 240.125<br>CAD Value: 315.2"
        );
    }
}
