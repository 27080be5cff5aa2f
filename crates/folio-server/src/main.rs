use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use folio_common::error::{ApiError, ErrorCode};
use folio_common::protocol::{ChatRequest, ContactRequest};
use serde_json::json;
use tracing::info;

mod chat;
mod config;
mod contact;
mod mailer;

use config::{load_settings, Settings};
use mailer::{HttpMailer, Mailer};

#[derive(Clone)]
struct AppState {
    settings: Arc<Settings>,
    http: reqwest::Client,
    mailer: Arc<dyn Mailer>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = load_settings();
    let state = AppState {
        http: reqwest::Client::new(),
        mailer: Arc::new(HttpMailer::new(&settings.mail_endpoint, &settings.mail_key)),
        settings: Arc::new(settings),
    };

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/api/chat", post(chat_handler))
        .route("/api/contact", post(contact_handler))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind(&state.settings.bind).await?;
    info!(addr = %state.settings.bind, "folio server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthz() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        ErrorCode::Upstream => StatusCode::BAD_GATEWAY,
        ErrorCode::Mail | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: ApiError) -> Response {
    (status_for(err.code), Json(err)).into_response()
}

/// Relay the chat history to the completion upstream and pass the SSE
/// byte stream back unmodified.
async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Response {
    let settings = &state.settings;
    let upstream = match chat::open_upstream_stream(
        &state.http,
        &settings.upstream_url,
        &settings.upstream_key,
        &settings.model,
        &req,
    )
    .await
    {
        Ok(resp) => resp,
        Err(err) => return error_response(err),
    };

    match Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(upstream.bytes_stream()))
    {
        Ok(resp) => resp,
        Err(e) => error_response(ApiError::new(ErrorCode::Internal, e.to_string())),
    }
}

async fn contact_handler(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Response {
    let settings = &state.settings;
    match contact::handle_submission(
        state.mailer.as_ref(),
        &settings.mail_from,
        &settings.mail_to,
        &req,
    )
    .await
    {
        Ok(()) => Json(json!({ "message": "Email sent successfully" })).into_response(),
        Err(err) => error_response(err),
    }
}
