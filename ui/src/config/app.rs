use super::{
    LoggingConfig, api::ApiConfig, limits::*, session::SessionConfig, storage::StorageConfig,
    ui::UIConfig, validation::ConfigValidationError,
};
use crate::theme::validation::ColorTokenValidator;
use crate::validation::Validator;
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    api: ApiConfig,
    #[serde(default)]
    session: SessionConfig,
    #[serde(default)]
    ui: UIConfig,
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let base_url = self.api.base_url();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(ConfigValidationError::BaseUrl {
                value: base_url.to_string(),
            });
        }

        let timeout = self.api.request_timeout_secs();
        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS).contains(&timeout) {
            errors.push(ConfigValidationError::RequestTimeout {
                configured: timeout,
                min_limit: MIN_REQUEST_TIMEOUT_SECS,
                max_limit: MAX_REQUEST_TIMEOUT_SECS,
            });
        }

        if self.session.dedup_window_ms() > MAX_DEDUP_WINDOW_MS {
            errors.push(ConfigValidationError::DedupWindow {
                configured: self.session.dedup_window_ms(),
                limit: MAX_DEDUP_WINDOW_MS,
            });
        }

        if self.session.max_retries() > MAX_SESSION_RETRIES {
            errors.push(ConfigValidationError::MaxRetries {
                configured: self.session.max_retries(),
                limit: MAX_SESSION_RETRIES,
            });
        }

        if self.session.retry_delay_ms() > MAX_RETRY_DELAY_MS {
            errors.push(ConfigValidationError::RetryDelay {
                configured: self.session.retry_delay_ms(),
                limit: MAX_RETRY_DELAY_MS,
            });
        }

        let primary = self.ui.primary_color();
        if ColorTokenValidator.validate(&primary).is_err() {
            errors.push(ConfigValidationError::PrimaryColor {
                value: primary.as_str().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    // Configuration section accessors
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    pub fn ui(&self) -> &UIConfig {
        &self.ui
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}
