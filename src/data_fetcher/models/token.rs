use serde::Deserialize;

/// Body of a successful `POST /oauth/token` response.
///
/// Every field is optional so that a body without `access_token` decodes and
/// can be reported as an authentication failure instead of a parse error.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_deserialization() {
        let json = r#"{"token_type":"Bearer","expires_in":86400,"access_token":"abc.def"}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.access_token.as_deref(), Some("abc.def"));
        assert_eq!(response.token_type.as_deref(), Some("Bearer"));
        assert_eq!(response.expires_in, Some(86400));
    }

    #[test]
    fn test_token_response_without_access_token() {
        let response: TokenResponse = serde_json::from_str(r#"{"error":"invalid_client"}"#).unwrap();
        assert!(response.access_token.is_none());
    }
}
