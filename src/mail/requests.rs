// src/mail/requests.rs
use super::models::{Address, Email};
use serde::{Deserialize, Serialize};

/// Body of a SendGrid v3 `mail/send` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendGridPayload {
    /// Recipient groups, one per delivered copy
    pub personalizations: Vec<Personalization>,
    /// Sender identity
    pub from: Address,
    /// Subject line
    pub subject: String,
    /// Message bodies, one per content type
    pub content: Vec<Content>,
}

/// Recipients of one copy of the message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personalization {
    /// Recipient addresses
    pub to: Vec<Address>,
}

/// One message body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// MIME type
    #[serde(rename = "type")]
    pub type_field: String,
    /// Body text
    pub value: String,
}

impl From<&Email> for SendGridPayload {
    fn from(email: &Email) -> Self {
        SendGridPayload {
            personalizations: vec![Personalization {
                to: vec![email.to.clone()],
            }],
            from: email.from.clone(),
            subject: email.subject.clone(),
            content: vec![Content {
                type_field: email.content_type.clone(),
                value: email.body.clone(),
            }],
        }
    }
}
