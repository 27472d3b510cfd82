//! Transactional mail client.
//!
//! Mail goes out through an HTTP mail API. Delivery failures are logged and
//! swallowed by the callers: a bid or invite must never fail because the mail
//! provider is down.

use serde::Serialize;

use crate::server::error::AppError;

#[derive(Debug, Serialize)]
struct MailPayload {
    from: String,
    to: String,
    subject: String,
    text: String,
}

/// Client for the transactional mail API.
///
/// Constructed once at startup and cloned into the state. When no API URL is
/// configured the client is disabled and every send becomes a logged no-op,
/// which keeps local development free of mail setup.
#[derive(Clone)]
pub struct Mailer {
    http_client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
    from: String,
}

impl Mailer {
    pub fn new(
        http_client: reqwest::Client,
        api_url: Option<String>,
        api_key: Option<String>,
        from: String,
    ) -> Self {
        if api_url.is_none() {
            tracing::warn!("MAIL_API_URL not set, outgoing mail is disabled");
        }

        Self {
            http_client,
            api_url,
            api_key,
            from,
        }
    }

    /// Sends a plain-text mail. Returns an error only for transport failures;
    /// a disabled mailer succeeds silently.
    pub async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), AppError> {
        let Some(api_url) = &self.api_url else {
            tracing::debug!("Mail disabled, dropping \"{}\" to {}", subject, to);
            return Ok(());
        };

        let payload = MailPayload {
            from: self.from.clone(),
            to: to.to_string(),
            subject: subject.to_string(),
            text: text.to_string(),
        };

        let mut request = self.http_client.post(api_url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(AppError::InternalError(format!(
                "Mail API returned {} for \"{}\"",
                response.status(),
                subject
            )));
        }

        Ok(())
    }

    /// Sends a mail and logs instead of propagating failures.
    pub async fn send_logged(&self, to: &str, subject: &str, text: &str) {
        if let Err(err) = self.send(to, subject, text).await {
            tracing::error!("Failed to send \"{}\" to {}: {}", subject, to, err);
        }
    }
}
