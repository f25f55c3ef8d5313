use crate::config::ConfigValidationError;
use crate::storage::StorageError;
use imdev_server::session::SessionError;
use std::fmt::Display;

/// Application-wide error types for the im.dev client state layer.
///
/// Most of this layer is cosmetic and never fails: unknown locales and
/// colours degrade to an absent bundle or an untouched style variable. The
/// variants below cover the parts that can fail for real.
///
/// # Error Categories
///
/// - [`Config`] - Configuration loading and validation errors
/// - [`Storage`] - Preference store reads, writes and serialization
/// - [`Session`] - Session check or sign-out failures
/// - [`Theme`] - Palette files that cannot be read or fail validation
/// - [`Locale`] - Message bundles that cannot be parsed
/// - [`State`] - Store wiring problems
///
/// # Examples
///
/// ```no_run
/// use imdev::error::{AppError, AppResult};
///
/// fn describe(result: AppResult<()>) -> String {
///     match result {
///         Ok(()) => "ok".to_string(),
///         Err(AppError::Storage(msg)) => format!("preferences unavailable: {msg}"),
///         Err(other) => other.to_string(),
///     }
/// }
/// ```
///
/// [`Config`]: AppError::Config
/// [`Storage`]: AppError::Storage
/// [`Session`]: AppError::Session
/// [`Theme`]: AppError::Theme
/// [`Locale`]: AppError::Locale
/// [`State`]: AppError::State
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration loading and validation errors.
    Config(String),

    /// Key-value preference store failures.
    ///
    /// Reading a key that is absent or holds invalid JSON ends up here;
    /// callers that treat preferences as optional should check existence
    /// first.
    Storage(String),

    /// Session check or sign-out failures. The session cache has already
    /// left its state untouched by the time this is seen.
    Session(String),

    /// Palette loading and validation errors.
    Theme(String),

    /// Message bundle loading errors.
    Locale(String),

    /// Application state wiring errors.
    State(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Storage(msg) => write!(f, "Storage Error: {msg}"),
            AppError::Session(msg) => write!(f, "Session Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::Locale(msg) => write!(f, "Locale Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::Session(err.to_string())
    }
}

impl From<ConfigValidationError> for AppError {
    fn from(err: ConfigValidationError) -> Self {
        AppError::Config(err.user_message())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
