//! Fixed-spacing request limiter

use crate::error::AppError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Where the rate limiter is applied while checking plays.
///
/// Only one throttling point is active per run so the budget is neither
/// exceeded nor applied twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ThrottleMode {
    /// Wait before every best-scores page request
    #[default]
    PerRequest,
    /// Wait once before each batch of concurrent checks
    PerBatch,
}

/// Spaces outbound requests by a fixed interval derived from a
/// requests-per-minute budget.
///
/// Each call to [`RateLimiter::wait`] reserves the next free slot, which is
/// `interval` after the previously reserved slot (or now, if that is later),
/// and sleeps until it. Spacing is therefore measured from the start of the
/// previous request, and concurrent callers are queued one interval apart.
/// There is no burst allowance.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    last_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Creates a limiter with an explicit spacing. `Duration::ZERO` disables waiting.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_slot: Mutex::new(None),
        }
    }

    /// Creates a limiter from a requests-per-minute budget (`60000ms / rpm`).
    pub fn from_requests_per_minute(requests_per_minute: u32) -> Result<Self, AppError> {
        if requests_per_minute == 0 {
            return Err(AppError::config_error(
                "Requests per minute must be greater than zero",
            ));
        }
        let interval = Duration::from_millis(60_000 / u64::from(requests_per_minute));
        Ok(Self::new(interval))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Suspends the caller until its reserved request slot.
    pub async fn wait(&self) {
        let slot = {
            let mut last_slot = self.last_slot.lock().await;
            let now = Instant::now();
            let slot = match *last_slot {
                Some(previous) => (previous + self.interval).max(now),
                None => now,
            };
            *last_slot = Some(slot);
            slot
        };

        let now = Instant::now();
        if slot > now {
            debug!("Rate limiter: waiting {:?}", slot - now);
            tokio::time::sleep_until(slot).await;
        }
    }
}
