// src/mail/client.rs
use super::Mailer;
use super::models::Email;
use super::requests::SendGridPayload;
use crate::config::Config;
use crate::utils::error::ReportError;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Path of the SendGrid v3 send endpoint, relative to the API address
const SEND_MAIL_PATH: &str = "v3/mail/send";

/// Mailer backed by the SendGrid v3 HTTP API
pub struct SendGridClient {
    client: Client,
    api_key: String,
    send_url: Url,
}

impl SendGridClient {
    /// Creates a client from the configured API address and key
    ///
    /// # Errors
    /// Returns `ReportError::UrlError` if the API address cannot be joined
    /// with the send path.
    pub fn new(config: &Config, client: Client) -> Result<Self, ReportError> {
        let mut base = Url::parse(&config.sendgrid_api_addr)?;
        // join() replaces the last segment unless the base path ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(SendGridClient {
            client,
            api_key: config.sendgrid_api_key.clone(),
            send_url: base.join(SEND_MAIL_PATH)?,
        })
    }

    /// Full URL emails are posted to
    pub fn send_url(&self) -> &Url {
        &self.send_url
    }
}

#[async_trait]
impl Mailer for SendGridClient {
    async fn send(&self, email: &Email) -> Result<u16, ReportError> {
        let payload = SendGridPayload::from(email);
        log::debug!(
            "Sending '{}' to {} via {}",
            email.subject,
            email.to.email,
            self.send_url
        );

        let response = self
            .client
            .post(self.send_url.clone())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        log::debug!("SendGrid answered with status {}", status);
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::Address;
    use crate::utils::test_server::TestServer;

    fn config(addr: &str) -> Config {
        let mut config = Config::from_toml(&Config::generate_template()).unwrap();
        config.sendgrid_api_addr = addr.to_string();
        config
    }

    #[test]
    fn test_send_url_default() {
        let client =
            SendGridClient::new(&config("https://api.sendgrid.com"), Client::new()).unwrap();
        assert_eq!(client.send_url().as_str(), "https://api.sendgrid.com/v3/mail/send");
    }

    #[test]
    fn test_send_url_keeps_base_path() {
        let client =
            SendGridClient::new(&config("http://127.0.0.1:8080/proxy/"), Client::new()).unwrap();
        assert_eq!(
            client.send_url().as_str(),
            "http://127.0.0.1:8080/proxy/v3/mail/send"
        );
    }

    #[test]
    fn test_send_url_base_path_without_trailing_slash() {
        let client =
            SendGridClient::new(&config("http://127.0.0.1:8080/proxy"), Client::new()).unwrap();
        assert_eq!(
            client.send_url().as_str(),
            "http://127.0.0.1:8080/proxy/v3/mail/send",
            "the /proxy segment must be kept"
        );
    }

    #[test]
    fn test_invalid_address() {
        assert!(matches!(
            SendGridClient::new(&config("not a url"), Client::new()),
            Err(ReportError::UrlError(_))
        ));
    }

    fn report_email() -> Email {
        Email::html(
            Address::new("mining-reports", "reports@example.com"),
            Address::new("Mining Reports", "farm@example.com"),
            "Ethereum Mining Report",
            "<br>ETH Mined: 0.5",
        )
    }

    #[tokio::test]
    async fn test_send_posts_payload_with_bearer_auth() {
        let server = TestServer::start(vec![(202, String::new())]).await;
        let mut config = config(&server.base_url);
        config.sendgrid_api_key = "SG.secret".into();
        let client = SendGridClient::new(&config, Client::new()).unwrap();

        let status = client.send(&report_email()).await.unwrap();
        assert_eq!(status, 202);

        let requests = server.requests().await;
        let request = &requests[0];
        assert!(request.starts_with("POST /v3/mail/send "), "{request}");
        assert!(
            request.to_lowercase().contains("authorization: bearer sg.secret"),
            "missing bearer token: {request}"
        );
        assert!(request.contains(r#""subject":"Ethereum Mining Report""#), "{request}");
        assert!(request.contains(r#""email":"farm@example.com""#), "{request}");
    }

    #[tokio::test]
    async fn test_send_passes_status_through() {
        for status in [200, 401, 500] {
            let server = TestServer::start(vec![(status, "{}".to_string())]).await;
            let client = SendGridClient::new(&config(&server.base_url), Client::new()).unwrap();
            assert_eq!(
                client.send(&report_email()).await.unwrap(),
                status,
                "status {status} must be returned, not turned into an error"
            );
            server.requests().await;
        }
    }
}
