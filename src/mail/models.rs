// src/mail/models.rs
use serde::{Deserialize, Serialize};

/// Content type of rendered reports
pub const HTML_CONTENT_TYPE: &str = "text/html";

/// A named email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Mailbox address
    pub email: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Address {
    /// Creates an address with a display name
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Address {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// A single-recipient email ready to be handed to a [`Mailer`](super::Mailer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Sender identity
    pub from: Address,
    /// Recipient identity
    pub to: Address,
    /// Subject line
    pub subject: String,
    /// MIME type of `body` (e.g. "text/html")
    pub content_type: String,
    /// Message body
    pub body: String,
}

impl Email {
    /// Creates an HTML email
    pub fn html(
        from: Address,
        to: Address,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Email {
            from,
            to,
            subject: subject.into(),
            content_type: HTML_CONTENT_TYPE.to_string(),
            body: body.into(),
        }
    }
}
