use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use portfolio_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON output; also forced by `ENVIRONMENT=production`
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `RESEND_API_KEY` (SMTP password of the delivery service)
    /// 2. Environment variables (PORTFOLIO__EMAIL__SMTP_HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("email.smtp_host", "localhost")?
            .set_default("email.smtp_port", 1025)?
            .set_default("email.smtp_username", "")?
            .set_default("email.smtp_password", "")?
            .set_default("email.from_address", "onboarding@portfolio.localhost")?
            .set_default("email.contact_address", "owner@portfolio.localhost")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("email.smtp_password", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        self.email.validate()
    }
}
