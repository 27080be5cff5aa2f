//! Contact-form submission: validate, render, dispatch.

use folio_common::error::{ApiError, ErrorCode};
use folio_common::protocol::ContactRequest;
use tracing::{error, info};

use crate::mailer::{Mailer, OutgoingEmail};

/// Escape user-supplied text before interpolation into the HTML body.
/// Contact fields are free text from an anonymous form; interpolating them
/// raw would let a submitter inject markup into the delivered email.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Name, email, and message are required; subject is optional.
pub fn validate(req: &ContactRequest) -> Result<(), ApiError> {
    let missing = req.name.trim().is_empty()
        || req.email.trim().is_empty()
        || req.message.trim().is_empty();
    if missing {
        return Err(ApiError::validation("Missing required fields"));
    }
    Ok(())
}

fn subject_line(req: &ContactRequest) -> String {
    let subject = req
        .subject
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("New Message");
    format!("Contact Form: {subject}")
}

fn text_body(req: &ContactRequest) -> String {
    format!(
        "Name: {}\nEmail: {}\nSubject: {}\n\n{}",
        req.name,
        req.email,
        req.subject.as_deref().unwrap_or(""),
        req.message
    )
}

fn html_body(req: &ContactRequest) -> String {
    let name = escape_html(&req.name);
    let email = escape_html(&req.email);
    let subject = escape_html(req.subject.as_deref().unwrap_or("No Subject"));
    let message = escape_html(&req.message);
    format!(
        concat!(
            "<div style=\"font-family: Arial, sans-serif; padding: 20px; color: #333;\">",
            "<h2>New Contact Form Submission</h2>",
            "<p><strong>Name:</strong> {name}</p>",
            "<p><strong>Email:</strong> {email}</p>",
            "<p><strong>Subject:</strong> {subject}</p>",
            "<hr />",
            "<p style=\"white-space: pre-wrap;\">{message}</p>",
            "</div>"
        ),
        name = name,
        email = email,
        subject = subject,
        message = message,
    )
}

/// Build the outbound email for a validated request.
pub fn render_email(req: &ContactRequest, from: &str, to: &str) -> OutgoingEmail {
    OutgoingEmail {
        from: from.to_string(),
        to: to.to_string(),
        reply_to: req.email.clone(),
        subject: subject_line(req),
        text_body: text_body(req),
        html_body: html_body(req),
    }
}

/// Full submission pipeline, transport-agnostic for testability.
pub async fn handle_submission(
    mailer: &dyn Mailer,
    from: &str,
    to: &str,
    req: &ContactRequest,
) -> Result<(), ApiError> {
    validate(req)?;
    let email = render_email(req, from, to);
    match mailer.send(&email).await {
        Ok(()) => {
            info!(reply_to = %email.reply_to, "contact form delivered");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "contact form delivery failed");
            Err(ApiError::new(ErrorCode::Mail, e.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
