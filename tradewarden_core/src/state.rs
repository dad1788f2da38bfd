use serde::{Deserialize, Serialize};

/// Stream-level failure counter governing backoff pacing.
///
/// Starts at 1 so the first server-side failure pauses for exactly one base
/// interval. Reset only by a fully successful drain cycle, never while
/// backing off.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetryState {
    pub failed_attempts: u32,
}

impl Default for RetryState {
    fn default() -> Self {
        Self { failed_attempts: 1 }
    }
}

impl RetryState {
    #[inline]
    pub fn note_failure(&mut self) {
        self.failed_attempts = self.failed_attempts.saturating_add(1);
    }

    #[inline]
    pub fn note_success(&mut self) {
        self.failed_attempts = 1;
    }
}
