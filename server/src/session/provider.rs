use super::types::Session;
use crate::common::HttpError;
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a session check or sign-out call.
///
/// Not classified further: the cache treats every variant the same way and
/// simply leaves its state unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session request failed: {0}")]
    Http(#[from] HttpError),

    #[error("Session provider error: {0}")]
    Provider(String),
}

impl SessionError {
    pub fn is_transient(&self) -> bool {
        match self {
            SessionError::Http(e) => e.is_transient(),
            SessionError::Provider(_) => true,
        }
    }
}

/// Backend calls the session cache is built on.
///
/// # Examples
///
/// ```no_run
/// use async_trait::async_trait;
/// use server::session::{Session, SessionError, SessionProvider};
///
/// struct SignedOut;
///
/// #[async_trait]
/// impl SessionProvider for SignedOut {
///     async fn fetch_session(&self) -> Result<Option<Session>, SessionError> {
///         Ok(None)
///     }
///
///     async fn logout(&self) -> Result<(), SessionError> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Asks the backend for the current session. `Ok(None)` means signed out.
    async fn fetch_session(&self) -> Result<Option<Session>, SessionError>;

    /// Ends the session on the backend.
    async fn logout(&self) -> Result<(), SessionError>;
}
