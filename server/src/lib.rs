//! # im.dev Server Client Library
//!
//! Backend-facing half of the im.dev client state layer. This crate knows how
//! to ask the backend who is signed in, how to sign out, and how to keep the
//! answer cached so that a page full of components asking the same question
//! results in a single request.
//!
//! ## Modules
//!
//! - [`session`] - Session types, providers and the deduplicating [`session::SessionCache`]
//! - [`common`] - Shared plumbing: errors, subscriber lists and the clock abstraction

pub mod common;
pub mod session;

pub use session::{Session, SessionCache, SessionCacheConfig, SessionError, SessionProvider};
