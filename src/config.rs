use std::time::Duration;

use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub auth_token: String,
    pub application_id: String,
    pub event_types: Vec<String>,
    pub target_url: String,
    pub application_secret: Option<String>,
    pub timeout: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let base_url = env_required("LOADTEST_BASE_URL")?;
        let auth_token = env_required("LOADTEST_AUTH_TOKEN")?;
        let application_id = env_required("LOADTEST_APPLICATION_ID")?;
        let target_url = env_required("LOADTEST_TARGET_URL")?;

        let event_types: Vec<String> = env_required("LOADTEST_EVENT_TYPES")?
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
        if event_types.is_empty() {
            return Err(Error::Config(
                "LOADTEST_EVENT_TYPES must list at least one event type".to_string(),
            ));
        }

        let application_secret = std::env::var("LOADTEST_APPLICATION_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let timeout_secs: u64 = env_or("LOADTEST_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| Error::Config(format!("Invalid LOADTEST_TIMEOUT_SECS: {e}")))?;

        let log_level = env_or("LOADTEST_LOG_LEVEL", "info");

        Ok(Config {
            base_url,
            auth_token,
            application_id,
            event_types,
            target_url,
            application_secret,
            timeout: Duration::from_secs(timeout_secs),
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, Error> {
    std::env::var(key)
        .map_err(|_| Error::Config(format!("Missing required environment variable: {key}")))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
