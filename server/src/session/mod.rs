//! Session check, sign-out and the cache that sits in front of them.
//!
//! The backend exposes `GET /user/session` (returns the signed-in session or
//! `null`) and `POST /user/logout`. Components across the UI all want to know
//! the current session; [`SessionCache`] makes sure they share one request
//! and one answer, and that signing out wins over any answer still in flight.

pub mod cache;
pub mod http;
pub mod provider;
pub mod types;

pub use cache::{SessionCache, SessionCacheConfig, SessionPhase};
pub use http::{HttpSessionConfig, HttpSessionProvider};
pub use provider::{SessionError, SessionProvider};
pub use types::{ApiResponse, Session, SessionUser};
