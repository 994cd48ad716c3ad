use crate::error::AppError;
use crate::mods::ModExclusionSet;
use std::path::Path;

/// Validates the configuration settings that do not involve credentials
///
/// # Validation Rules
/// - API base URL must start with http:// or https://
/// - HTTP timeout and request budget must be positive
/// - Excluded mods must form a valid, non-empty set
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(
    api_base_url: &str,
    http_timeout_seconds: u64,
    requests_per_minute: u32,
    excluded_mods: &[String],
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }
    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if requests_per_minute == 0 {
        return Err(AppError::config_error(
            "Requests per minute must be greater than zero",
        ));
    }

    ModExclusionSet::new(excluded_mods)?;

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Checks that both OAuth credentials are present
pub fn validate_credentials(client_id: &str, client_secret: &str) -> Result<(), AppError> {
    if client_id.trim().is_empty() {
        return Err(AppError::config_error(
            "Client id is missing. Set OSU_CLIENT_ID or run with --configure",
        ));
    }
    if !client_id.trim().chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::config_error("Client id must be numeric"));
    }
    if client_secret.trim().is_empty() {
        return Err(AppError::config_error(
            "Client secret is missing. Set OSU_CLIENT_SECRET or run with --configure",
        ));
    }
    Ok(())
}
