//! Configuration module
//!
//! Runtime configuration for the relay service, read from the environment
//! (with `.env` support) and validated before the server starts.

use std::env;
use std::path::PathBuf;

use crate::constants::DEFAULT_USER_AGENT;

// Common constants
const DEFAULT_PORT: u16 = 3000;
const MAX_UPLOAD_SIZE_MB: usize = 500;
const DEFAULT_SETTINGS_PATH: &str = "data/settings.json";

/// Megabyte count from `MAX_UPLOAD_SIZE_MB`, converted to bytes
fn upload_limit_bytes(raw: &str) -> Result<usize, anyhow::Error> {
    let megabytes: usize = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be a valid number"))?;

    megabytes
        .checked_mul(1024 * 1024)
        .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB is too large"))
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Upper bound for a whole multipart submission
    pub max_upload_size_bytes: usize,
    /// Endpoint suggested to clients that have not saved one yet
    pub default_webhook_url: Option<String>,
    /// JSON file backing the webhook settings store
    pub settings_path: PathBuf,
    pub relay_user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            max_upload_size_bytes: MAX_UPLOAD_SIZE_MB * 1024 * 1024,
            default_webhook_url: None,
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            relay_user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            max_upload_size_bytes: upload_limit_bytes(
                &env::var("MAX_UPLOAD_SIZE_MB").unwrap_or_else(|_| MAX_UPLOAD_SIZE_MB.to_string()),
            )?,
            default_webhook_url: env::var("DEFAULT_WEBHOOK_URL")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            settings_path: env::var("SETTINGS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH)),
            relay_user_agent: env::var("RELAY_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }

        if let Some(url) = &self.default_webhook_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(anyhow::anyhow!(
                    "DEFAULT_WEBHOOK_URL must start with http:// or https://"
                ));
            }
        }

        if self.relay_user_agent.trim().is_empty() {
            return Err(anyhow::anyhow!("RELAY_USER_AGENT cannot be empty"));
        }

        Ok(())
    }
}
