use crate::config::MailgunConfig;
use crate::error::{AppError, AppResult};
use reqwest::Client;
use std::time::Duration;

const SUBJECT: &str = "Verify Your Email Address";

#[derive(Clone)]
pub struct MailgunService {
    client: Client,
    config: MailgunConfig,
}

impl MailgunService {
    pub fn new(config: MailgunConfig) -> Self {
        let client = Client::builder()
            .user_agent("verification-worker/mailgun")
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {e}");
                Client::new()
            });
        Self { client, config }
    }

    /// Submit one verification email through the Mailgun messages API.
    ///
    /// `encoded_link` is the percent-encoded verification URL; the body
    /// embeds it in its escaped form.
    pub async fn send_verification_email(&self, to: &str, encoded_link: &str) -> AppResult<()> {
        let url = format!(
            "{}/{}/messages",
            self.config.api_base.trim_end_matches('/'),
            self.config.domain
        );

        let from = format!("New User Verification Mail <noreply@{}>", self.config.domain);
        let text = compose_body(encoded_link);

        let params = [
            ("from", from.as_str()),
            ("to", to),
            ("subject", SUBJECT),
            ("text", text.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.config.api_key))
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::DeliveryFailure(format!("Mailgun request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            log::info!("Mailgun API response: {}", status.as_u16());
            Ok(())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log::error!("Verification email failed to send: {to}, Error: {error_text}");
            Err(AppError::DeliveryFailure(format!(
                "Mailgun returned HTTP {}: {}",
                status.as_u16(),
                error_text
            )))
        }
    }
}

/// Fixed body text. The 2-minute notice is stated here and nowhere enforced.
fn compose_body(encoded_link: &str) -> String {
    format!(
        "Click the link below to verify your email address:\n{encoded_link}\n\nThis link will expire in 2 minutes."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_body_embeds_encoded_link() {
        let body = compose_body("https%3A%2F%2Fverify.example.com%2Fverify-email%3Ftoken%3D42");
        assert!(body.contains("https%3A%2F%2Fverify.example.com%2Fverify-email%3Ftoken%3D42"));
        assert!(body.starts_with("Click the link below to verify your email address:"));
        assert!(body.ends_with("This link will expire in 2 minutes."));
    }

    #[test]
    fn test_send_endpoint_and_sender_shape() {
        let config = MailgunConfig {
            api_key: "key-test".to_string(),
            domain: "mail.example.com".to_string(),
            api_base: "https://api.mailgun.net/v3".to_string(),
        };
        let url = format!(
            "{}/{}/messages",
            config.api_base.trim_end_matches('/'),
            config.domain
        );
        assert_eq!(url, "https://api.mailgun.net/v3/mail.example.com/messages");

        let from = format!("New User Verification Mail <noreply@{}>", config.domain);
        assert_eq!(from, "New User Verification Mail <noreply@mail.example.com>");
    }

    #[tokio::test]
    async fn test_transport_error_maps_to_delivery_failure() {
        let service = MailgunService::new(MailgunConfig {
            api_key: "key-test".to_string(),
            domain: "mail.example.com".to_string(),
            api_base: "http://127.0.0.1:1".to_string(),
        });
        let err = service
            .send_verification_email("alice", "https%3A%2F%2Fverify.example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DeliveryFailure(_)));
    }
}
