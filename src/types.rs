// src/types.rs
use crate::utils::error::ReportError;
use std::fmt;
use std::str::FromStr;

/// Report kinds the dispatcher recognises
///
/// The string tags are the ones accepted on the command line and by
/// [`ReportManager::create_report_and_send`](crate::ReportManager::create_report_and_send).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReportMethod {
    /// Coins credited by the pool over the last 24 hours
    TwentyFourHourCredit,

    /// Day-by-day credit history
    ///
    /// Recognised by the dispatcher but not implemented as an email report.
    Credit,
}

impl ReportMethod {
    /// Every accepted method, in allow-list order
    pub const ALL: [ReportMethod; 2] = [ReportMethod::TwentyFourHourCredit, ReportMethod::Credit];

    /// String tag of this method
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportMethod::TwentyFourHourCredit => "24hour_credit",
            ReportMethod::Credit => "credit",
        }
    }

    /// String tags of every accepted method
    pub fn allowed() -> Vec<&'static str> {
        Self::ALL.iter().map(ReportMethod::as_str).collect()
    }
}

impl fmt::Display for ReportMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportMethod {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ReportError::UnsupportedMethod {
                method: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}
