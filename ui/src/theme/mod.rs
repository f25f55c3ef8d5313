//! # Theme Projection
//!
//! Turns the `(theme, primaryColor)` part of the application state into a flat
//! table of CSS custom properties and hands it to a [`StyleInjector`].
//!
//! - [`ThemeProjector`] holds one [`Palette`] per mode and derives a fresh
//!   [`ThemeVariableTable`] on every call.
//! - [`PaletteLoader`] reads replacement palettes from `light.toml` and
//!   `dark.toml`, validating variable names and values.
//! - [`bind_theme`] wires a projector and injector to an [`AppStore`].
//!
//! ```no_run
//! use imdev::state::AppStore;
//! use imdev::theme::{CssVariableSheet, ThemeProjector, bind_theme};
//! use std::sync::Arc;
//!
//! let mut store = AppStore::default();
//! let sheet = Arc::new(CssVariableSheet::new());
//! bind_theme(&store, ThemeProjector::builtin(), sheet.clone());
//!
//! store.toggle_dark_mode();
//! println!("{}", sheet.render());
//! ```
//!
//! [`AppStore`]: crate::state::AppStore

pub mod injector;
pub mod loader;
pub mod palette;
pub mod projector;
pub mod validation;

pub use injector::{CssVariableSheet, StyleInjector, bind_theme, render_root_block};
pub use loader::PaletteLoader;
pub use palette::{Palette, PaletteMetadata, builtin_palette};
pub use projector::{PRIMARY_COLOR_VAR, ThemeProjector, ThemeVariableTable, project};
