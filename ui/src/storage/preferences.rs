//! Persisted slices of [`AppState`].

use super::{PreferenceStore, StorageError};
use crate::state::{AppState, ColorToken, LanguageTag, LocaleTag, StateChange};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub const THEME_KEY: &str = "theme";
pub const SIDEBAR_KEY: &str = "sidebar";
pub const LOCALE_KEY: &str = "locale";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    pub dark_mode: bool,
    pub primary_color: ColorToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarPreference {
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalePreference {
    pub locale: LocaleTag,
    pub language: LanguageTag,
}

impl From<&AppState> for ThemePreference {
    fn from(state: &AppState) -> Self {
        Self {
            dark_mode: state.dark_mode(),
            primary_color: state.primary_color().clone(),
        }
    }
}

impl From<&AppState> for SidebarPreference {
    fn from(state: &AppState) -> Self {
        Self {
            collapsed: state.collapsed(),
        }
    }
}

impl From<&AppState> for LocalePreference {
    fn from(state: &AppState) -> Self {
        Self {
            locale: state.locale().clone(),
            language: state.language().clone(),
        }
    }
}

fn read_optional<T: DeserializeOwned>(store: &PreferenceStore, key: &str) -> Option<T> {
    match store.contains(key) {
        Ok(false) => return None,
        Ok(true) => {}
        Err(e) => {
            log::warn!("Could not check stored preference '{key}': {e}");
            return None;
        }
    }
    match store.get(key) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring stored preference '{key}': {e}");
            None
        }
    }
}

/// Overlays whatever preferences are stored on top of `base`.
///
/// Missing entries keep the base value; malformed ones are logged and skipped.
pub fn restore_preferences(store: &PreferenceStore, base: AppState) -> AppState {
    let theme = read_optional::<ThemePreference>(store, THEME_KEY)
        .unwrap_or_else(|| ThemePreference::from(&base));
    let locale = read_optional::<LocalePreference>(store, LOCALE_KEY)
        .unwrap_or_else(|| LocalePreference::from(&base));
    let sidebar = read_optional::<SidebarPreference>(store, SIDEBAR_KEY)
        .unwrap_or_else(|| SidebarPreference::from(&base));

    AppState::new(
        theme.dark_mode,
        theme.primary_color,
        locale.locale,
        locale.language,
        base.menu_mode(),
    )
    .with_collapsed(sidebar.collapsed)
}

/// Writes the slices of `change` that differ from the previous state.
pub fn persist_change(store: &PreferenceStore, change: &StateChange) -> Result<(), StorageError> {
    let (previous, current) = (&change.previous, &change.current);

    if ThemePreference::from(previous) != ThemePreference::from(current) {
        store.set(THEME_KEY, &ThemePreference::from(current))?;
    }
    if previous.collapsed() != current.collapsed() {
        store.set(SIDEBAR_KEY, &SidebarPreference::from(current))?;
    }
    if change.locale_changed() {
        store.set(LOCALE_KEY, &LocalePreference::from(current))?;
    }
    Ok(())
}

/// Subscriber callback that persists every change, logging failures.
pub fn persist_on_change(store: PreferenceStore) -> impl Fn(&StateChange) + Send + Sync + 'static {
    move |change: &StateChange| {
        if let Err(e) = persist_change(&store, change) {
            log::warn!("Failed to persist preferences after {:?}: {e}", change.action);
        }
    }
}
