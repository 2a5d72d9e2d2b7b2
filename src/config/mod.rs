use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS, env_vars, tournament};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_key;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the golf statistics API, without trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Subscription key sent with every request as the `key` query parameter.
    pub api_key: String,
    /// Base tournament identifier for the current-tournament leaderboard.
    #[serde(default = "default_current_tournament_id")]
    pub current_tournament_id: i32,
    /// Base tournament identifier for the next-tournament info box.
    #[serde(default = "default_next_tournament_id")]
    pub next_tournament_id: i32,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_current_tournament_id() -> i32 {
    tournament::DEFAULT_CURRENT_TOURNAMENT_ID
}

fn default_next_tournament_id() -> i32 {
    tournament::DEFAULT_NEXT_TOURNAMENT_ID
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            api_key: String::new(),
            current_tournament_id: default_current_tournament_id(),
            next_tournament_id: default_next_tournament_id(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, the API key is taken from the environment or
    /// prompted for, and a new config file is written.
    ///
    /// # Environment Variables
    /// - `GOLF_API_KEY` - Override API key
    /// - `GOLF_API_BASE_URL` - Override API base URL
    /// - `GOLF_LOG_FILE` - Override log file path
    /// - `GOLF_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// Environment variables take precedence over config file values.
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            Config {
                api_key,
                ..Config::default()
            }
        } else {
            let config = Config {
                api_key: prompt_for_api_key().await?,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `GOLF_*` environment variable overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Ok(api_base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = api_base_url;
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
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_base_url,
            &self.api_key,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Returns the API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let visible = 4;
        let count = self.api_key.chars().count();
        if count <= visible {
            return "*".repeat(count);
        }
        let tail: String = self.api_key.chars().skip(count - visible).collect();
        format!("{}{}", "*".repeat(count - visible), tail)
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The API key is masked; handles the case when no config file exists.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Base URL:");
            println!("{}", config.api_base_url);
            println!("────────────────────────────────────");
            println!("API Key:");
            println!("{}", config.masked_api_key());
            println!("────────────────────────────────────");
            println!("Tournament IDs (current / next):");
            println!(
                "{} / {}",
                config.current_tournament_id, config.next_tournament_id
            );
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/golf_teletext.log");
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
    /// Creates the parent directory if it doesn't exist, strips a trailing
    /// slash from the base URL and prefixes it with https:// when no scheme
    /// is given.
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
            api_base_url: normalize_base_url(&self.api_base_url),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Adds an https:// scheme when missing and drops trailing slashes.
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
