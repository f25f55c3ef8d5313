use imdev_server::session::SessionCacheConfig;
use serde::Deserialize;
use std::time::Duration;

/// Session cache configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    dedup_window_ms: Option<u64>,
    max_retries: Option<u32>,
    retry_delay_ms: Option<u64>,
}

impl SessionConfig {
    pub fn dedup_window_ms(&self) -> u64 {
        self.dedup_window_ms.unwrap_or(60_000)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries.unwrap_or(0)
    }

    pub fn retry_delay_ms(&self) -> u64 {
        self.retry_delay_ms.unwrap_or(500)
    }

    pub fn cache_config(&self) -> SessionCacheConfig {
        SessionCacheConfig {
            dedup_window: Duration::from_millis(self.dedup_window_ms()),
            max_retries: self.max_retries(),
            retry_delay: Duration::from_millis(self.retry_delay_ms()),
        }
    }
}
