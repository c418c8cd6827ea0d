// src/mail/mod.rs
//! Email delivery
//!
//! Reports are delivered through a transactional email API. The [`Mailer`]
//! trait only forwards the message and hands back the provider's status
//! code; deciding whether that code means success is left to the caller.

/// SendGrid HTTP client
pub mod client;

/// Email and address types
pub mod models;

/// SendGrid request payloads
pub mod requests;

pub use client::SendGridClient;
pub use models::{Address, Email, HTML_CONTENT_TYPE};

use crate::utils::error::ReportError;
use async_trait::async_trait;

/// Something that can deliver an [`Email`]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends `email` and returns the provider's HTTP status code
    async fn send(&self, email: &Email) -> Result<u16, ReportError>;
}
