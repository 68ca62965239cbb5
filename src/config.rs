//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Example
//!
//! ```bash
//! export PORT=3000
//! export OPENAI_API_KEY="sk-..."
//! export DATA_DIR="data"
//! ```
//!
//! ## Optional Variables
//!
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `PORT` - Bind port (default: `3000`)
//! - `OPENAI_API_KEY` - Language model key; without it every insight degrades to its fallback
//! - `OPENAI_BASE_URL` - Chat completions base URL (default: `https://api.openai.com/v1`)
//! - `OPENAI_MODEL` - Model name (default: `gpt-4.1-mini`)
//! - `MODEL_TIMEOUT_SECONDS` - Timeout of one model call (default: 30)
//! - `DATA_DIR` - Directory holding the CSV files (default: `data`)
//! - `CACHE_ENABLED` - `false` disables the response cache (default: `true`)
//! - `CACHE_TTL_SECONDS` - Lifetime of cached model responses (default: 3600)
//! - `RATE_LIMIT_ENABLED` - `false` disables per-IP limiting of model routes (default: `true`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-mini";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    /// Timeout applied to each outbound model request.
    pub model_timeout_seconds: u64,
    pub data_dir: PathBuf,
    pub cache_enabled: bool,
    /// Lifetime of a cached response. Entries past it are dropped on the next read.
    pub cache_ttl_seconds: u64,
    pub rate_limit_enabled: bool,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            model_timeout_seconds: 30,
            data_dir: PathBuf::from("data"),
            cache_enabled: true,
            cache_ttl_seconds: 3600,
            rate_limit_enabled: true,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            Err(_) => defaults.port,
        };

        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let openai_base_url = env::var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url);
        let openai_model = env::var("OPENAI_MODEL").unwrap_or(defaults.openai_model);

        let model_timeout_seconds = env::var("MODEL_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.model_timeout_seconds);

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let cache_enabled = env::var("CACHE_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.cache_enabled);

        let cache_ttl_seconds = env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.cache_ttl_seconds);

        let rate_limit_enabled = env::var("RATE_LIMIT_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.rate_limit_enabled);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            host,
            port,
            openai_api_key,
            openai_base_url,
            openai_model,
            model_timeout_seconds,
            data_dir,
            cache_enabled,
            cache_ttl_seconds,
            rate_limit_enabled,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `openai_base_url` is not an http(s) URL
    /// - `openai_model` is empty
    /// - `cache_ttl_seconds` or `model_timeout_seconds` is 0
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        let base_url = Url::parse(&self.openai_base_url)
            .with_context(|| format!("OPENAI_BASE_URL is not a valid URL: '{}'", self.openai_base_url))?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            anyhow::bail!(
                "OPENAI_BASE_URL must use http or https, got '{}'",
                base_url.scheme()
            );
        }

        if self.openai_model.trim().is_empty() {
            anyhow::bail!("OPENAI_MODEL must not be empty");
        }

        if self.cache_ttl_seconds == 0 {
            anyhow::bail!("CACHE_TTL_SECONDS must be greater than 0");
        }

        if self.model_timeout_seconds == 0 {
            anyhow::bail!("MODEL_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Socket address string the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Data directory: {}", self.data_dir.display());
        tracing::info!("  Model: {} via {}", self.openai_model, self.openai_base_url);

        match self.openai_api_key {
            Some(ref key) => tracing::info!("  API key: {}", mask_secret(key)),
            None => tracing::warn!("  API key: not set (insights will use fallbacks)"),
        }

        if self.cache_enabled {
            tracing::info!("  Cache: enabled (TTL {}s)", self.cache_ttl_seconds);
        } else {
            tracing::info!("  Cache: disabled");
        }

        if !self.rate_limit_enabled {
            tracing::warn!("  Rate limiting: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Anything but `false` or `0` enables a flag.
fn parse_flag(value: &str) -> bool {
    !(value.eq_ignore_ascii_case("false") || value == "0")
}

/// Masks a secret for logging, keeping only its first and last 4 characters.
///
/// Secrets of 12 characters or fewer are fully masked.
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 12 {
        return "***".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}***{tail}")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "HOST",
        "PORT",
        "OPENAI_API_KEY",
        "OPENAI_BASE_URL",
        "OPENAI_MODEL",
        "MODEL_TIMEOUT_SECONDS",
        "DATA_DIR",
        "CACHE_ENABLED",
        "CACHE_TTL_SECONDS",
        "RATE_LIMIT_ENABLED",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("sk-abcdefghijklmnop1234"), "sk-a***1234");
        assert_eq!(mask_secret("short"), "***");
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("FALSE"));
        assert!(!parse_flag("0"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.openai_base_url = "ftp://models.example.com".to_string();
        assert!(config.validate().is_err());

        config.openai_base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.openai_base_url = "http://localhost:8080/v1".to_string();
        assert!(config.validate().is_ok());

        config.cache_ttl_seconds = 0;
        assert!(config.validate().is_err());

        config.cache_ttl_seconds = 60;
        config.model_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_from_empty_env() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.openai_model, DEFAULT_OPENAI_MODEL);
        assert_eq!(config.cache_ttl_seconds, 3600);
        assert!(config.cache_enabled);
        assert!(config.rate_limit_enabled);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("PORT", "8080");
            env::set_var("OPENAI_API_KEY", "sk-test");
            env::set_var("CACHE_ENABLED", "false");
            env::set_var("CACHE_TTL_SECONDS", "120");
            env::set_var("DATA_DIR", "/srv/data");
            env::set_var("RATE_LIMIT_ENABLED", "0");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert!(!config.cache_enabled);
        assert_eq!(config.cache_ttl_seconds, 120);
        assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
        assert!(!config.rate_limit_enabled);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_api_key_is_ignored() {
        clear_env();
        unsafe {
            env::set_var("OPENAI_API_KEY", "   ");
        }

        let config = Config::from_env().unwrap();
        assert!(config.openai_api_key.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_rejected() {
        clear_env();
        unsafe {
            env::set_var("PORT", "not-a-port");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
