use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backoff schedule for webhook requests.
///
/// One attempt is made per entry in `base_delays_ms`, then `final_retries`
/// more attempts spaced `final_delay_ms` apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub base_delays_ms: Vec<u64>,
    pub final_retries: usize,
    pub final_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_delays_ms: vec![500, 1000, 2000],
            final_retries: 1,
            final_delay_ms: 5000,
        }
    }
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    #[must_use]
    pub fn none() -> Self {
        Self {
            base_delays_ms: Vec::new(),
            final_retries: 0,
            final_delay_ms: 0,
        }
    }

    /// Total number of attempts, never less than one.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        (self.base_delays_ms.len() + self.final_retries).max(1)
    }

    /// Delay to wait after the failed attempt number `attempt` (1-based).
    #[must_use]
    pub fn delay_after(&self, attempt: usize) -> Duration {
        let ms = self
            .base_delays_ms
            .get(attempt.saturating_sub(1))
            .copied()
            .unwrap_or(self.final_delay_ms);
        Duration::from_millis(ms)
    }
}
