//! Streaming chat client for the folio server.
//!
//! Uses reqwest directly against the server's OpenAI-compatible SSE relay
//! and surfaces incremental text deltas through a callback.

use async_trait::async_trait;
use folio_common::error::ClientError;
use folio_common::protocol::{ChatMessage, ChatRequest};
use futures_util::StreamExt;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Receiver for incremental reply text.
pub type DeltaSink<'a> = &'a mut (dyn FnMut(&str) + Send);

/// The interface for any chat transport.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send the full visible history; stream deltas into `sink` and return
    /// the assembled reply.
    async fn send(
        &self,
        messages: &[ChatMessage],
        sink: DeltaSink<'_>,
    ) -> Result<String, ClientError>;
}

/// HTTP client for a folio server.
pub struct HttpChatBackend {
    http: Client,
    base_url: String,
}

impl HttpChatBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(
        &self,
        messages: &[ChatMessage],
        sink: DeltaSink<'_>,
    ) -> Result<String, ClientError> {
        let url = format!("{}/api/chat", self.base_url);
        let body = ChatRequest {
            messages: messages.to_vec(),
        };

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: text.chars().take(200).collect(),
            });
        }

        let mut stream = resp.bytes_stream();
        let mut buffer = String::new();
        let mut reply = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| ClientError::Transport(e.to_string()))?;
            buffer.push_str(&String::from_utf8_lossy(&chunk));

            // Events can split mid-line across chunks; only consume
            // complete lines and keep the remainder buffered.
            while let Some(pos) = buffer.find('\n') {
                let line = buffer[..pos].trim().to_string();
                buffer.drain(..=pos);

                let Some(payload) = line.strip_prefix("data:").map(str::trim) else {
                    continue;
                };
                if payload == "[DONE]" {
                    return Ok(reply);
                }
                let event: Value = serde_json::from_str(payload)
                    .map_err(|e| ClientError::Stream(e.to_string()))?;
                if let Some(delta) = event["choices"][0]["delta"]["content"].as_str() {
                    sink(delta);
                    reply.push_str(delta);
                }
            }
        }

        debug!(len = reply.len(), "stream ended without [DONE]");
        Ok(reply)
    }
}
