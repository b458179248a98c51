use std::time::{Duration, Instant};

use dashmap::DashMap;

const MAX_FAILURES: u32 = 5;
const WINDOW: Duration = Duration::from_secs(15 * 60);

struct FailureWindow {
    count: u32,
    opened: Instant,
}

/// Brute-force guard for the login endpoint. Tracks failed attempts per
/// email in a sliding window; a successful login resets the slate.
pub struct LoginRateLimiter {
    failures: DashMap<String, FailureWindow>,
}

impl LoginRateLimiter {
    pub fn new() -> Self {
        Self {
            failures: DashMap::new(),
        }
    }

    /// Whether a login attempt for this email may proceed. Err carries the
    /// seconds until the current window expires. Read-only; failures are
    /// counted separately via [`note_failure`](Self::note_failure).
    pub fn allow(&self, email: &str) -> Result<(), u64> {
        let Some(entry) = self.failures.get(&email.to_lowercase()) else {
            return Ok(());
        };

        let age = entry.opened.elapsed();
        if age > WINDOW || entry.count < MAX_FAILURES {
            return Ok(());
        }

        Err(WINDOW.as_secs().saturating_sub(age.as_secs()))
    }

    pub fn note_failure(&self, email: &str) {
        let mut entry = self
            .failures
            .entry(email.to_lowercase())
            .or_insert(FailureWindow {
                count: 0,
                opened: Instant::now(),
            });

        if entry.opened.elapsed() > WINDOW {
            entry.count = 1;
            entry.opened = Instant::now();
        } else {
            entry.count += 1;
        }
    }

    /// Forget an email's failure history after a successful login.
    pub fn clear(&self, email: &str) {
        self.failures.remove(&email.to_lowercase());
    }
}

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
