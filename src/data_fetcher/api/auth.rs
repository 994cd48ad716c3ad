//! Client-credentials token exchange

use reqwest::Client;
use tracing::{error, info, instrument};

use super::fetch_utils::{parse_body, status_error, transport_error};
use super::urls::build_token_url;
use crate::data_fetcher::models::TokenResponse;
use crate::error::AppError;

/// Exchanges OAuth client credentials for a bearer token.
///
/// Sends one `POST /oauth/token` with `grant_type=client_credentials` and
/// `scope=public`. Any failure is reported as `AppError::Auth`; there is no retry
/// and the caller cannot continue without a token.
///
/// # Arguments
/// * `client` - Unauthenticated HTTP client
/// * `base_url` - API host, e.g. `https://osu.ppy.sh`
/// * `client_id` - OAuth application id
/// * `client_secret` - OAuth application secret
#[instrument(skip(client, client_secret))]
pub async fn get_token(
    client: &Client,
    base_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String, AppError> {
    let url = build_token_url(base_url);
    info!("Requesting access token from {url}");

    let form = [
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("grant_type", "client_credentials"),
        ("scope", "public"),
    ];

    let response = client
        .post(&url)
        .form(&form)
        .send()
        .await
        .map_err(|e| AppError::auth_error(transport_error(e, &url).to_string()))?;

    let status = response.status();
    if !status.is_success() {
        error!("Token request rejected with HTTP {}", status.as_u16());
        return Err(AppError::auth_error(status_error(status, &url).to_string()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::auth_error(transport_error(e, &url).to_string()))?;
    let token: TokenResponse =
        parse_body(&body, &url).map_err(|e| AppError::auth_error(e.to_string()))?;

    match token.access_token {
        Some(access_token) if !access_token.is_empty() => {
            info!("Access token acquired");
            Ok(access_token)
        }
        _ => Err(AppError::auth_error(
            "Token response did not contain an access_token",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_string_contains, method, path},
    };

    #[tokio::test]
    async fn test_get_token_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("scope=public"))
            .and(body_string_contains("client_id=12345"))
            .and(body_string_contains("client_secret=s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token_type": "Bearer",
                "expires_in": 86400,
                "access_token": "token-abc"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let token = get_token(&client, &mock_server.uri(), "12345", "s3cret")
            .await
            .unwrap();

        assert_eq!(token, "token-abc");
    }

    #[tokio::test]
    async fn test_get_token_rejected_credentials() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "invalid_client"
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = get_token(&client, &mock_server.uri(), "12345", "wrong").await;

        match result {
            Err(AppError::Auth(message)) => assert!(message.contains("401")),
            other => panic!("Expected auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_token_missing_access_token() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"token_type": "Bearer"})),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = get_token(&client, &mock_server.uri(), "12345", "s3cret").await;

        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_get_token_non_json_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = get_token(&client, &mock_server.uri(), "12345", "s3cret").await;

        assert!(matches!(result, Err(AppError::Auth(_))));
    }
}
