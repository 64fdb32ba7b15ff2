use std::env;

use crate::store::DEFAULT_CAPACITY;

#[derive(Clone, Debug)]
pub struct Config {
    pub notifications_path: String,
    pub max_notifications: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let notifications_path = env::var("NOTIFICATIONS_PATH")
            .unwrap_or_else(|_| "notifications.json".to_string());

        let max_notifications = env::var("NOTIFICATIONS_MAX")
            .unwrap_or_else(|_| DEFAULT_CAPACITY.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidCapacity)?;

        if max_notifications == 0 {
            return Err(ConfigError::InvalidCapacity);
        }

        Ok(Config {
            notifications_path,
            max_notifications,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("NOTIFICATIONS_MAX must be a positive integer")]
    InvalidCapacity,
}
