use crate::error::{AppError, AppResult};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

pub mod api;
pub mod app;
pub mod limits;
pub mod session;
pub mod storage;
pub mod ui;
pub mod validation;

pub use app::AppConfig;
pub use validation::ConfigValidationError;

/// Prefix of environment overrides, e.g. `IMDEV__API__BASE_URL`.
pub const ENV_PREFIX: &str = "IMDEV";

/// Default configuration file, read when present.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Loads configuration from `path` (or `config.toml` when it exists) and
/// `IMDEV__*` environment variables, then validates it.
pub fn load_config(path: Option<&Path>) -> AppResult<AppConfig> {
    dotenv::dotenv().ok();

    let file_source = match path {
        Some(path) => File::from(path).format(FileFormat::Toml).required(true),
        None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
    };
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true);

    let config = Config::builder()
        .add_source(file_source)
        .add_source(env_source) // environment entries override file values
        .build()
        .map_err(|e| {
            AppError::Config(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ))
        })?;

    finish(config)
}

/// Parses configuration from TOML text alone, without environment overrides.
pub fn load_config_from_str(toml: &str) -> AppResult<AppConfig> {
    let config = Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .map_err(|e| AppError::Config(format!("Configuration loading failed: {e}")))?;

    finish(config)
}

fn finish(config: Config) -> AppResult<AppConfig> {
    let app_config = config
        .try_deserialize::<AppConfig>()
        .map_err(|e| AppError::Config(format!("Failed to deserialize config: {e}")))?;

    if let Err(validation_errors) = app_config.validate() {
        let error_messages: Vec<String> =
            validation_errors.iter().map(|e| e.user_message()).collect();
        return Err(AppError::Config(format!(
            "Configuration validation failed:\n{}",
            error_messages.join("\n\n")
        )));
    }

    Ok(app_config)
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MenuMode, ThemeMode};
    use std::time::Duration;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = load_config_from_str("").unwrap();

        assert_eq!(config.api().base_url(), "http://localhost:10086/api");
        assert_eq!(config.api().request_timeout(), Duration::from_secs(10));
        assert_eq!(config.api().token(), None);
        assert_eq!(config.session().cache_config().dedup_window, Duration::from_secs(60));
        assert_eq!(config.session().max_retries(), 0);
        assert_eq!(config.logging().level(), "info");
        assert!(config.ui().fallback_language().is_none());

        let state = config.ui().initial_state();
        assert_eq!(state.theme(), ThemeMode::Light);
        assert_eq!(state.primary_color().as_str(), "#2196f3");
        assert_eq!(state.locale().as_str(), "zh_CN");
        assert_eq!(state.language().as_str(), "zh");
    }

    #[test]
    fn test_sections_are_read() {
        let config = load_config_from_str(
            r##"
[api]
base_url = "https://im.dev/api"
token = "abc"

[session]
dedup_window_ms = 1000
max_retries = 2

[ui]
dark_mode = true
primary_color = "#ff0000"
language = "en"
menu_mode = "horizontal"
fallback_language = "en"
"##,
        )
        .unwrap();

        assert_eq!(config.api().token(), Some("abc"));
        assert_eq!(config.session().cache_config().max_retries, 2);
        let state = config.ui().initial_state();
        assert_eq!(state.theme(), ThemeMode::Dark);
        assert_eq!(state.menu_mode(), MenuMode::Horizontal);
        assert_eq!(state.language().as_str(), "en");
        assert_eq!(config.ui().fallback_language().unwrap().as_str(), "en");
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let toml = r##"
[api]
base_url = "localhost"
request_timeout_secs = 0

[session]
dedup_window_ms = 700000
max_retries = 9

[ui]
primary_color = "#12"
"##;
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(matches!(errors[0], ConfigValidationError::BaseUrl { .. }));

        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(AppError::Config(ref msg)) if msg.contains("validation failed")));
    }

    #[test]
    fn test_load_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imdev.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.logging().level(), "debug");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
