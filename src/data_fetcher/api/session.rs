//! Authorized API session shared by all fetchers of a run

use crate::data_fetcher::rate_limiter::RateLimiter;
use reqwest::Client;
use std::sync::Arc;

/// Everything a fetcher needs to talk to the API: the authorized client,
/// the API host and the run-wide rate limiter.
///
/// Cloning is cheap; the client and limiter are shared.
#[derive(Debug, Clone)]
pub struct ApiSession {
    pub client: Client,
    pub base_url: String,
    pub limiter: Arc<RateLimiter>,
}

impl ApiSession {
    pub fn new(client: Client, base_url: impl Into<String>, limiter: Arc<RateLimiter>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            limiter,
        }
    }
}
