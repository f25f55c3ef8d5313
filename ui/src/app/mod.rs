//! # Application Wiring
//!
//! [`Application`] assembles the client-state layer: it restores stored
//! preferences into a fresh [`AppStore`], persists later changes, keeps the
//! style injector in step with the theme and owns the locale resolver and the
//! session cache.

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::locale::{LocaleBundle, LocaleResolver};
use crate::state::{Action, AppState, AppStore};
use crate::storage::preferences::{persist_on_change, restore_preferences};
use crate::storage::{KeyValueBackend, PreferenceStore};
use crate::theme::{PaletteLoader, StyleInjector, ThemeProjector, ThemeVariableTable, bind_theme};
use imdev_server::session::{SessionCache, SessionProvider};
use log::{error, info};
use std::sync::Arc;

/// Outcome of loading the configured palettes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteInitializationResult {
    /// Configured or built-in palettes loaded
    Success,
    /// Configured palettes were unusable; built-in ones are in use
    FallbackSuccess { error_message: String },
}

pub struct Application {
    config: AppConfig,
    store: AppStore,
    preferences: PreferenceStore,
    projector: ThemeProjector,
    palette_status: PaletteInitializationResult,
    locales: LocaleResolver,
    sessions: SessionCache,
}

impl Application {
    pub fn new(
        config: AppConfig,
        backend: Arc<dyn KeyValueBackend>,
        provider: Arc<dyn SessionProvider>,
        injector: Arc<dyn StyleInjector>,
    ) -> AppResult<Self> {
        let preferences = PreferenceStore::new(backend);
        let initial = restore_preferences(&preferences, config.ui().initial_state());
        let store = AppStore::new(initial);
        store.subscribe(persist_on_change(preferences.clone()));

        let (projector, palette_status) = Self::initialize_palettes(&config);
        bind_theme(&store, projector.clone(), injector);

        let locales = LocaleResolver::builtin()?;
        let sessions = SessionCache::with_config(provider, config.session().cache_config());

        info!(
            "Application ready: theme={}, language={}",
            store.state().theme(),
            store.state().language()
        );

        Ok(Self {
            config,
            store,
            preferences,
            projector,
            palette_status,
            locales,
            sessions,
        })
    }

    fn initialize_palettes(config: &AppConfig) -> (ThemeProjector, PaletteInitializationResult) {
        let Some(dir) = config.ui().palette_dir() else {
            return (ThemeProjector::builtin(), PaletteInitializationResult::Success);
        };

        match PaletteLoader::new(dir).load_projector() {
            Ok(projector) => (projector, PaletteInitializationResult::Success),
            Err(e) => {
                error!("Failed to load palettes from {}: {}", dir.display(), e);
                (
                    ThemeProjector::builtin(),
                    PaletteInitializationResult::FallbackSuccess {
                        error_message: e.to_string(),
                    },
                )
            }
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut AppStore {
        &mut self.store
    }

    pub fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn palette_status(&self) -> &PaletteInitializationResult {
        &self.palette_status
    }

    pub fn locales(&self) -> &LocaleResolver {
        &self.locales
    }

    /// Bundle for the current language, or the configured fallback.
    pub fn messages(&self) -> Option<Arc<LocaleBundle>> {
        let fallback = self.config.ui().fallback_language();
        self.locales
            .resolve_or_fallback(self.state().language(), fallback.as_ref())
    }

    pub fn translate(&self, key: &str) -> Option<String> {
        self.messages()
            .and_then(|bundle| bundle.get(key).map(str::to_string))
    }

    /// Variable table for the current state.
    pub fn theme_variables(&self) -> ThemeVariableTable {
        let state = self.state();
        self.projector.project(state.theme(), state.primary_color())
    }

    pub fn sessions(&self) -> &SessionCache {
        &self.sessions
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("state", self.state())
            .field("palette_status", &self.palette_status)
            .finish_non_exhaustive()
    }
}
