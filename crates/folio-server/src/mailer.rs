use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("failed to reach mail service: {0}")]
    Transport(String),

    #[error("mail service returned {status}: {reason}")]
    Rejected { status: u16, reason: String },
}

/// One outbound message, with both body renderings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// The interface to the managed mail-sending service.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// Dispatches through a JSON mail API with bearer authentication.
pub struct HttpMailer {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl HttpMailer {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let reason = resp
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(MailError::Rejected {
            status: status.as_u16(),
            reason: reason.chars().take(200).collect(),
        })
    }
}
