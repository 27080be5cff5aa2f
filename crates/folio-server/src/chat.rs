//! Streaming chat relay to the hosted completion upstream.

use folio_common::error::{ApiError, ErrorCode};
use folio_common::protocol::{ChatMessage, ChatRequest};
use reqwest::Client;
use serde_json::json;
use tracing::{error, info};

/// Guardrails for the portfolio concierge persona.
pub const SYSTEM_PROMPT: &str = "\
You are the \"Professional Portfolio Concierge\", an AI representative for Twan. \
Your sole purpose is to assist visitors in navigating Twan's professional \
background, projects, skills, and contact information.\n\
Guardrails and constraints:\n\
1. Strict domain limitation: only discuss topics explicitly related to the \
portfolio — past and current projects, professional experience, technical \
skills, education, and ways to contact or hire Twan.\n\
2. Off-topic handling: if a question is unrelated to the portfolio, politely \
decline and redirect the visitor back to the portfolio's content.\n\
3. No hallucinations: if a detail is not in your provided context, say you do \
not have that information and offer Twan's contact details instead.";

/// Send the visible history upstream with the concierge system prompt
/// prepended, requesting a streamed response.
pub async fn open_upstream_stream(
    http: &Client,
    base_url: &str,
    api_key: &str,
    model: &str,
    req: &ChatRequest,
) -> Result<reqwest::Response, ApiError> {
    let mut messages = Vec::with_capacity(req.messages.len() + 1);
    messages.push(ChatMessage::system(SYSTEM_PROMPT));
    messages.extend(req.messages.iter().cloned());

    let body = json!({
        "model": model,
        "messages": messages,
        "stream": true,
    });

    let url = format!("{}/chat/completions", base_url.trim_end_matches('/'));
    let resp = http
        .post(&url)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| {
            error!(error = %e, "chat upstream unreachable");
            ApiError::new(ErrorCode::Upstream, e.to_string())
        })?;

    let status = resp.status();
    if !status.is_success() {
        let text = resp
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        error!(status = status.as_u16(), "chat upstream rejected request");
        return Err(ApiError::new(
            ErrorCode::Upstream,
            format!("upstream returned {}: {}", status, truncate(&text, 200)),
        ));
    }

    info!(model, turns = req.messages.len(), "chat stream opened");
    Ok(resp)
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
#[path = "tests/chat_tests.rs"]
mod tests;
