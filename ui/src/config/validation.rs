/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid api.base_url: '{value}' (must start with http:// or https://)")]
    BaseUrl { value: String },
    #[error("Invalid api.request_timeout_secs: {configured} (min: {min_limit}, max: {max_limit})")]
    RequestTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid session.dedup_window_ms: {configured} (limit: {limit})")]
    DedupWindow { configured: u64, limit: u64 },
    #[error("Invalid session.max_retries: {configured} (limit: {limit})")]
    MaxRetries { configured: u32, limit: u32 },
    #[error("Invalid session.retry_delay_ms: {configured} (limit: {limit})")]
    RetryDelay { configured: u64, limit: u64 },
    #[error("Invalid ui.primary_color: '{value}'")]
    PrimaryColor { value: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::BaseUrl { value } => {
                format!(
                    "API base URL is not an HTTP URL!\n\n\
                    Your configured value: {value}\n\n\
                    Please update api.base_url in config.toml, e.g. http://localhost:10086/api."
                )
            }
            ConfigValidationError::RequestTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Request timeout out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update api.request_timeout_secs in config.toml."
                )
            }
            ConfigValidationError::DedupWindow { configured, limit } => {
                format!(
                    "Session dedup window too long!\n\n\
                    Your configured value: {configured} ms\n\
                    Maximum: {limit} ms\n\n\
                    Please update session.dedup_window_ms in config.toml."
                )
            }
            ConfigValidationError::MaxRetries { configured, limit } => {
                format!(
                    "Too many session retries!\n\n\
                    Your configured value: {configured}\n\
                    Maximum: {limit}\n\n\
                    Please update session.max_retries in config.toml."
                )
            }
            ConfigValidationError::RetryDelay { configured, limit } => {
                format!(
                    "Session retry delay too long!\n\n\
                    Your configured value: {configured} ms\n\
                    Maximum: {limit} ms\n\n\
                    Please update session.retry_delay_ms in config.toml."
                )
            }
            ConfigValidationError::PrimaryColor { value } => {
                format!(
                    "Primary colour is not a colour!\n\n\
                    Your configured value: {value}\n\n\
                    Please set ui.primary_color to a hex colour such as #2196f3 or a colour keyword."
                )
            }
        }
    }
}
