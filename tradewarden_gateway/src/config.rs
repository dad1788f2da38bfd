//! Environment-driven settings for the embedding application.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use tradewarden_core::BonusPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Settings the surrounding application reads once at startup and passes
/// into the core as plain data.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub webhook_url: String,
    pub webhook_username: String,
    /// Per-call budget for outbound HTTP clients.
    pub request_timeout: Duration,
    /// Badge template applied to authors without one.
    pub badge_template_id: Option<String>,
    pub bonus: BonusPolicy,
}

impl GatewayConfig {
    /// Load from the process environment, reading a `.env` file first when
    /// one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Ok(Self {
            webhook_url: require("ALERT_WEBHOOK_URL")?,
            webhook_username: env::var("ALERT_WEBHOOK_USERNAME")
                .unwrap_or_else(|_| "tradewarden".to_string()),
            request_timeout: Duration::from_millis(parse_or("REQUEST_TIMEOUT_MS", 30_000)?),
            badge_template_id: env::var("BADGE_TEMPLATE_ID").ok(),
            bonus: BonusPolicy {
                enabled: parse_or("ANNOTATION_BONUS_ENABLED", false)?,
                amount: parse_or("ANNOTATION_BONUS_AMOUNT", 0)?,
            },
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(default),
    }
}
