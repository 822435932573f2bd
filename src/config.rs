use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Optional on-disk configuration, merged between defaults and environment.
pub const CONFIG_FILE: &str = "quizbuddy.toml";

/// Prefix for environment overrides, e.g. `QUIZBUDDY_SMTP__HOST`.
pub const ENV_PREFIX: &str = "QUIZBUDDY_";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    /// Recipient notified of every submission.
    pub teacher_email: String,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Empty disables SMTP AUTH.
    pub username: String,
    pub password: String,
    pub starttls: bool,
    /// Fixed `From:` address of every outgoing message.
    pub sender: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://quizbuddy.db".to_string(),
            listen_addr: "127.0.0.1:5000".to_string(),
            loglevel: "info".to_string(),
            teacher_email: "teacher@example.com".to_string(),
            smtp: SmtpConfig::default(),
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "your-email@example.com".to_string(),
            password: String::new(),
            starttls: true,
            sender: "your-email@example.com".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then `quizbuddy.toml` if present, then `QUIZBUDDY_*` env vars.
    pub fn load() -> Result<Self, QuizError> {
        Self::figment()
            .extract()
            .map_err(|e| QuizError::Config(e.to_string()))
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
