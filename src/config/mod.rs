use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_credentials;
use validation::{validate_config, validate_credentials};

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// OAuth client id of the registered osu! application.
    #[serde(default)]
    pub client_id: String,
    /// OAuth client secret of the registered osu! application.
    #[serde(default)]
    pub client_secret: String,
    /// API host without trailing slash. Defaults to https://osu.ppy.sh.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for every API request. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Request budget used to space requests. Defaults to 240 per minute.
    #[serde(default = "default_requests_per_minute")]
    pub requests_per_minute: u32,
    /// Mods that disqualify a player. Defaults to DT and NC.
    #[serde(default = "default_excluded_mods")]
    pub excluded_mods: Vec<String>,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_requests_per_minute() -> u32 {
    constants::DEFAULT_REQUESTS_PER_MINUTE
}

fn default_excluded_mods() -> Vec<String> {
    constants::crawl::DEFAULT_EXCLUDED_MODS
        .iter()
        .map(|m| m.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            client_id: String::new(),
            client_secret: String::new(),
            api_base_url: default_api_base_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            requests_per_minute: default_requests_per_minute(),
            excluded_mods: default_excluded_mods(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists and no credentials are set in the environment,
    /// prompts for the OAuth credentials and creates the file.
    ///
    /// # Environment Variables
    /// - `OSU_CLIENT_ID` / `OSU_CLIENT_SECRET` - Override credentials
    /// - `OSU_API_BASE_URL` - Override API host
    /// - `OSU_MOD_FILTER_LOG_FILE` - Override log file path
    /// - `OSU_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `OSU_REQUESTS_PER_MINUTE` - Override request budget
    ///
    /// # Notes
    /// - Environment variables take precedence over the config file
    /// - Credentials are not validated here, see [`Config::credentials`]
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else if std::env::var(env_vars::CLIENT_ID).is_ok()
            && std::env::var(env_vars::CLIENT_SECRET).is_ok()
        {
            Config::default()
        } else {
            let (client_id, client_secret) = prompt_for_credentials().await?;
            let config = Config {
                client_id,
                client_secret,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of the current values.
    /// Unparsable numeric values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(client_id) = std::env::var(env_vars::CLIENT_ID) {
            self.client_id = client_id;
        }

        if let Ok(client_secret) = std::env::var(env_vars::CLIENT_SECRET) {
            self.client_secret = client_secret;
        }

        if let Ok(api_base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = api_base_url.trim_end_matches('/').to_string();
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Some(rpm) = std::env::var(env_vars::REQUESTS_PER_MINUTE)
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
        {
            self.requests_per_minute = rpm;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_base_url,
            self.http_timeout_seconds,
            self.requests_per_minute,
            &self.excluded_mods,
            &self.log_file_path,
        )
    }

    /// Returns the client id and secret, or a configuration error if either is missing.
    pub fn credentials(&self) -> Result<(&str, &str), AppError> {
        validate_credentials(&self.client_id, &self.client_secret)?;
        Ok((self.client_id.trim(), self.client_secret.trim()))
    }

    /// Prompts for new credentials and saves them to the default config file,
    /// keeping every other stored setting.
    pub async fn configure() -> Result<Self, AppError> {
        let config_path = get_config_path();
        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        let (client_id, client_secret) = prompt_for_credentials().await?;
        validate_credentials(&client_id, &client_secret)?;
        config.client_id = client_id;
        config.client_secret = client_secret;

        config.save().await?;
        Ok(config)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Client secret with everything but the last four characters hidden
    pub fn masked_secret(&self) -> String {
        let count = self.client_secret.chars().count();
        if count <= 4 {
            return "*".repeat(count);
        }
        let visible: String = self.client_secret.chars().skip(count - 4).collect();
        format!("{}{visible}", "*".repeat(count - 4))
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - The client secret is masked
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let mut config = Self::load_from_path(&config_path).await?;
            config.apply_env_overrides();
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Client Id:");
            println!("{}", config.client_id);
            println!("Client Secret:");
            println!("{}", config.masked_secret());
            println!("────────────────────────────────────");
            println!("API Base URL:");
            println!("{}", config.api_base_url);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("Request Budget:");
            println!("{} requests per minute", config.requests_per_minute);
            println!("Excluded Mods:");
            println!("{}", config.excluded_mods.join(", "));
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/osu_mod_filter.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips trailing
    /// slashes from the API base URL.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn sample_config() -> Config {
        Config {
            client_id: "12345".to_string(),
            client_secret: "abcdefghijkl".to_string(),
            ..Config::default()
        }
    }

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::CLIENT_ID);
            std::env::remove_var(env_vars::CLIENT_SECRET);
            std::env::remove_var(env_vars::API_BASE_URL);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
            std::env::remove_var(env_vars::REQUESTS_PER_MINUTE);
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
client_id = "12345"
client_secret = "s3cret"
requests_per_minute = 120
excluded_mods = ["HR"]
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.client_id, "12345");
        assert_eq!(config.client_secret, "s3cret");
        assert_eq!(config.requests_per_minute, 120);
        assert_eq!(config.excluded_mods, vec!["HR".to_string()]);
        assert_eq!(config.api_base_url, "https://osu.ppy.sh");
        assert_eq!(config.http_timeout_seconds, 30);
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_load_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.excluded_mods, vec!["DT".to_string(), "NC".to_string()]);
    }

    #[tokio::test]
    async fn test_config_save_and_load() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("osu_mod_filter");
        let config_path = config_dir.join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config = Config {
            api_base_url: "http://localhost:8080/".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            ..sample_config()
        };
        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_dir.exists());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(content.contains("client_id = \"12345\""));
        assert!(content.contains("log_file_path = \"/custom/log/path\""));

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.api_base_url, "http://localhost:8080");
        assert_eq!(loaded.client_secret, "abcdefghijkl");
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let toml_string = toml::to_string_pretty(&sample_config()).unwrap();
        assert!(!toml_string.contains("log_file_path"));
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let invalid_content = r#"
client_id = "12345"
excluded_mods = ["DT", "unclosed
"#;
        let result: Result<Config, _> = toml::from_str(invalid_content);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("osu_mod_filter"));
        assert!(config_path.ends_with("config.toml"));

        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("osu_mod_filter"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    fn test_validation() {
        assert!(sample_config().validate().is_ok());

        let invalid_configs = vec![
            Config {
                api_base_url: String::new(),
                ..sample_config()
            },
            Config {
                api_base_url: "osu.ppy.sh".to_string(),
                ..sample_config()
            },
            Config {
                http_timeout_seconds: 0,
                ..sample_config()
            },
            Config {
                requests_per_minute: 0,
                ..sample_config()
            },
            Config {
                excluded_mods: vec![],
                ..sample_config()
            },
            Config {
                log_file_path: Some(String::new()),
                ..sample_config()
            },
        ];

        for config in invalid_configs {
            assert!(
                config.validate().is_err(),
                "Config should be invalid: {config:?}"
            );
        }
    }

    #[test]
    fn test_credentials() {
        let sample = sample_config();
        let (id, secret) = sample.credentials().unwrap();
        assert_eq!(id, "12345");
        assert_eq!(secret, "abcdefghijkl");

        assert!(Config::default().credentials().is_err());
        let non_numeric = Config {
            client_id: "abc".to_string(),
            ..sample_config()
        };
        assert!(non_numeric.credentials().is_err());
    }

    #[test]
    fn test_masked_secret() {
        assert_eq!(sample_config().masked_secret(), "********ijkl");
        let short = Config {
            client_secret: "abc".to_string(),
            ..sample_config()
        };
        assert_eq!(short.masked_secret(), "***");
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::CLIENT_ID, "999");
            std::env::set_var(env_vars::CLIENT_SECRET, "from-env");
            std::env::set_var(env_vars::API_BASE_URL, "http://127.0.0.1:9000/");
            std::env::set_var(env_vars::REQUESTS_PER_MINUTE, "60");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "not-a-number");
        }

        let mut config = sample_config();
        config.apply_env_overrides();

        assert_eq!(config.client_id, "999");
        assert_eq!(config.client_secret, "from-env");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.requests_per_minute, 60);
        // Unparsable values keep the previous setting
        assert_eq!(config.http_timeout_seconds, 30);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_no_environment_keeps_file_values() {
        clear_env();

        let mut config = sample_config();
        config.apply_env_overrides();

        assert_eq!(config, sample_config());
    }
}
