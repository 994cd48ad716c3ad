//! HTTP client creation and configuration utilities

use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;

/// Creates a properly configured HTTP client with connection pooling and timeout handling.
///
/// The timeout applies to every single request, so one hung request fails on its
/// own instead of stalling a whole batch.
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates an HTTP client that sends `Authorization: Bearer <token>` on every request.
///
/// The client is built once after the token exchange and then shared read-only
/// by all concurrent requests of the run.
pub fn create_authorized_client(timeout_seconds: u64, token: &str) -> Result<Client, AppError> {
    let mut auth_value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| AppError::auth_error("Access token contains invalid header characters"))?;
    auth_value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth_value);

    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorized_client_rejects_invalid_token() {
        let result = create_authorized_client(5, "bad\ntoken");
        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[test]
    fn test_authorized_client_accepts_jwt_like_token() {
        let result = create_authorized_client(5, "eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9.payload.sig");
        assert!(result.is_ok());
    }
}
