//! # im.dev Client State Library
//!
//! The client-state layer behind the im.dev front-ends: theme (light/dark and
//! accent colour), locale, sidebar chrome and the signed-in session.
//!
//! ## Modules
//!
//! - [`state`] - Application state, actions, reducer and the observable store
//! - [`theme`] - Palettes, theme projection and style injection
//! - [`locale`] - Message bundles and the language resolver
//! - [`storage`] - Namespaced JSON preference store and persisted preferences
//! - [`app`] - Wiring of all of the above plus the session cache
//! - [`config`] - Configuration loading and validation
//! - [`cli`] - Command-line definitions for the `imdev` binary
//! - [`error`] - Error types
//! - [`logger`] - Logging setup
//! - [`validation`] - The validator trait used by config and palettes

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod locale;
pub mod logger;
pub mod state;
pub mod storage;
pub mod theme;
pub mod validation;

pub use app::Application;
pub use error::{AppError, AppResult};
pub use state::{Action, AppState, AppStore};
pub use validation::Validator;
