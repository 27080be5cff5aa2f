//! Trailing-window rate limit for chat submissions.
//!
//! The window is an explicit value operating on injected instants, so the
//! gate is testable without wall-clock delays. Ownership is single-threaded
//! and per-process; two concurrent sessions can race past the cap. That is
//! an accepted limitation, not a defect.

use std::time::{Duration, Instant};

pub const DEFAULT_MAX_SUBMISSIONS: usize = 10;
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(10 * 60);

/// Verdict of a gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Allowed,
    Throttled { retry_after: Duration },
}

#[derive(Debug)]
pub struct RateLimitWindow {
    attempts: Vec<Instant>,
    cap: usize,
    period: Duration,
}

impl Default for RateLimitWindow {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SUBMISSIONS, DEFAULT_WINDOW)
    }
}

impl RateLimitWindow {
    pub fn new(cap: usize, period: Duration) -> Self {
        Self {
            attempts: Vec::new(),
            cap,
            period,
        }
    }

    /// Would a submission at `now` be admitted? Prunes expired entries
    /// lazily; does not record anything.
    pub fn check(&mut self, now: Instant) -> Gate {
        self.prune(now);
        // A zero cap admits nothing; there is no attempt whose expiry
        // could reopen the gate.
        if self.cap == 0 {
            return Gate::Throttled {
                retry_after: self.period,
            };
        }
        if self.attempts.len() < self.cap {
            return Gate::Allowed;
        }
        // The gate reopens when the oldest attempt still counting against
        // the cap slides out of the window.
        let blocking = self.attempts[self.attempts.len() - self.cap];
        let reopen = blocking + self.period;
        Gate::Throttled {
            retry_after: reopen.saturating_duration_since(now),
        }
    }

    /// Record one accepted submission at `now`.
    pub fn record(&mut self, now: Instant) {
        self.attempts.push(now);
    }

    fn prune(&mut self, now: Instant) {
        let period = self.period;
        self.attempts
            .retain(|t| now.saturating_duration_since(*t) < period);
    }
}

/// Whole minutes until the gate reopens, rounded up, never zero.
pub fn countdown_minutes(retry_after: Duration) -> u64 {
    (retry_after.as_millis().max(1)).div_ceil(60_000).max(1) as u64
}

/// The message surfaced instead of calling the endpoint.
pub fn throttle_message(retry_after: Duration) -> String {
    format!(
        "Rate limit reached. Try again in {} minute(s).",
        countdown_minutes(retry_after)
    )
}
