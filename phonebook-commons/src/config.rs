use std::time::Duration;

use failure::Fail;

use serde::{Deserialize, Serialize};
use serde_json;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/persons";
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 3000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub notification_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }
}

#[derive(Debug, Fail)]
pub enum ConfigurationError {
    #[fail(display = "Invalid format: {}", message)]
    FormatError {
        message: String,
        #[fail(cause)]
        cause: serde_json::Error,
    },
}

/// Parses a serialised configuration, no configuration at all yields the defaults.
pub fn load_config(serialised_config: Option<&str>) -> Result<ClientConfig, ConfigurationError> {
    match serialised_config {
        Some(serialised) => serde_json::from_str(serialised).map_err(|e| {
            ConfigurationError::FormatError { message: "Configuration".to_string(), cause: e }
        }),
        None => Ok(ClientConfig::default()),
    }
}
