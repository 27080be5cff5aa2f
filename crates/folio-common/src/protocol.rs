use serde::{Deserialize, Serialize};

use crate::route::Route;

/// Structured outcome of interpreting one input line.
///
/// `output` is a rendered transcript: line 0 appears above line 1. The
/// session controller must apply every field it receives; `should_clear`
/// and a non-empty `output` may co-occur and neither may be dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandResult {
    pub output: Vec<String>,
    #[serde(default)]
    pub should_clear: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Route>,
}

impl CommandResult {
    /// The no-op result for empty input.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self::lines([line.into()])
    }

    pub fn clear() -> Self {
        Self {
            should_clear: true,
            ..Self::default()
        }
    }

    pub fn navigate(route: Route) -> Self {
        Self {
            output: vec![format!("Navigating to {}...", route.as_path())],
            should_clear: false,
            navigation: Some(route),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Body of `POST /api/chat`: the full visible message history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}
