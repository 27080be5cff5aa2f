//! Terminal session engine: the stateful side of the portfolio terminal.
//!
//! `session` owns the scrollback and the submission pipeline, `cli` drives
//! it from stdin, `pages` renders the navigable views, `ratelimit` gates
//! chat submissions, `chat` talks to the folio server.

pub mod chat;
pub mod cli;
pub mod pages;
pub mod ratelimit;
pub mod session;

pub use ratelimit::{Gate, RateLimitWindow};
pub use session::{Navigator, Session};
