use thiserror::Error;

/// HTTP-related errors with detailed context for network operations.
///
/// Every variant only carries owned strings and numbers so the error is
/// `Clone`. The session cache relies on this: a single failed request is
/// reported to every caller that joined it.
///
/// # Error Categories
///
/// ## Client Configuration Errors
/// - [`ClientCreation`] - HTTP client initialization failures
///
/// ## Request Execution Errors
/// - [`RequestFailed`] - General request failures with URL and reason
/// - [`Timeout`] - Request timeout with duration and target URL
/// - [`Status`] - The server answered with a non-success status code
/// - [`InvalidResponse`] - Unexpected response format or content
///
/// # Examples
///
/// ```no_run
/// use server::common::errors::HttpError;
///
/// fn describe(error: &HttpError) -> &'static str {
///     match error {
///         HttpError::Timeout { .. } => "backend is slow",
///         HttpError::Status { status: 401, .. } => "signed out",
///         _ => "backend unavailable",
///     }
/// }
/// ```
///
/// [`ClientCreation`]: HttpError::ClientCreation
/// [`RequestFailed`]: HttpError::RequestFailed
/// [`Timeout`]: HttpError::Timeout
/// [`Status`]: HttpError::Status
/// [`InvalidResponse`]: HttpError::InvalidResponse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("Failed to create HTTP client: {reason}")]
    ClientCreation { reason: String },

    #[error("Request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    #[error("Request to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid response: expected {expected}, got {actual}")]
    InvalidResponse { expected: String, actual: String },
}

impl HttpError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            HttpError::Timeout { .. } | HttpError::RequestFailed { .. } => true,
            HttpError::Status { status, .. } => *status >= 500 || *status == 429,
            HttpError::ClientCreation { .. } | HttpError::InvalidResponse { .. } => false,
        }
    }
}
