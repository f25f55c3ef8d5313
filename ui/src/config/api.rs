use imdev_server::session::HttpSessionConfig;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:10086/api";

/// Backend API configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    /// Value sent in the `X-Token` header
    token: Option<String>,
}

impl ApiConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs.unwrap_or(10)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn http_session_config(&self) -> HttpSessionConfig {
        HttpSessionConfig {
            base_url: self.base_url().to_string(),
            timeout: self.request_timeout(),
            token: self.token().map(str::to_string),
        }
    }
}
