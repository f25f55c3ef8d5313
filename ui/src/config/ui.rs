use crate::state::{AppState, ColorToken, LanguageTag, LocaleTag, MenuMode};
use crate::state::types::{DEFAULT_LANGUAGE, DEFAULT_LOCALE, DEFAULT_PRIMARY_COLOR};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Initial UI state and theme/locale sources
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UIConfig {
    dark_mode: Option<bool>,
    primary_color: Option<String>,
    locale: Option<String>,
    language: Option<String>,
    menu_mode: Option<MenuMode>,
    /// Language used when the selected one has no bundle (default: none)
    fallback_language: Option<String>,
    /// Directory holding `light.toml` / `dark.toml` palettes
    palette_dir: Option<PathBuf>,
}

impl UIConfig {
    pub fn dark_mode(&self) -> bool {
        self.dark_mode.unwrap_or(false)
    }

    pub fn primary_color(&self) -> ColorToken {
        ColorToken::new(self.primary_color.as_deref().unwrap_or(DEFAULT_PRIMARY_COLOR))
    }

    pub fn locale(&self) -> LocaleTag {
        LocaleTag::new(self.locale.as_deref().unwrap_or(DEFAULT_LOCALE))
    }

    pub fn language(&self) -> LanguageTag {
        LanguageTag::new(self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE))
    }

    pub fn menu_mode(&self) -> MenuMode {
        self.menu_mode.unwrap_or_default()
    }

    pub fn fallback_language(&self) -> Option<LanguageTag> {
        self.fallback_language.as_deref().map(LanguageTag::from)
    }

    pub fn palette_dir(&self) -> Option<&Path> {
        self.palette_dir.as_deref()
    }

    /// State before any stored preferences are applied.
    pub fn initial_state(&self) -> AppState {
        AppState::new(
            self.dark_mode(),
            self.primary_color(),
            self.locale(),
            self.language(),
            self.menu_mode(),
        )
    }
}
