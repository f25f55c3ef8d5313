//! # Application State
//!
//! The cross-cutting UI state of the front-ends: theme, accent colour,
//! locale and the sidebar/drawer chrome. State lives in a plain [`AppState`]
//! value; every change goes through [`reduce`] as an [`Action`], and the
//! [`AppStore`] notifies its subscribers synchronously after each one.
//!
//! ```no_run
//! use imdev::state::{AppState, AppStore};
//!
//! let mut store = AppStore::new(AppState::default());
//! store.subscribe(|change| {
//!     if change.theme_changed() {
//!         println!("theme is now {}", change.current.theme());
//!     }
//! });
//! store.toggle_dark_mode();
//! ```

pub mod store;
pub mod types;

pub use store::{AppStore, StateChange};
pub use types::{ColorToken, LanguageTag, LocaleTag, MenuMode, ThemeMode};

use serde::Serialize;

/// Snapshot of the UI chrome state.
///
/// Fields are private: the only way to change them is an [`Action`].
/// `theme` is always `Dark` exactly when `dark_mode` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    dark_mode: bool,
    collapsed: bool,
    drawer_open: bool,
    menu_mode: MenuMode,
    theme: ThemeMode,
    primary_color: ColorToken,
    locale: LocaleTag,
    language: LanguageTag,
}

impl AppState {
    pub fn new(
        dark_mode: bool,
        primary_color: ColorToken,
        locale: LocaleTag,
        language: LanguageTag,
        menu_mode: MenuMode,
    ) -> Self {
        Self {
            dark_mode,
            collapsed: false,
            drawer_open: false,
            menu_mode,
            theme: ThemeMode::from_dark_mode(dark_mode),
            primary_color,
            locale,
            language,
        }
    }

    /// Same state with the sidebar collapsed or expanded.
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn menu_mode(&self) -> MenuMode {
        self.menu_mode
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn primary_color(&self) -> &ColorToken {
        &self.primary_color
    }

    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    pub fn language(&self) -> &LanguageTag {
        &self.language
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            false,
            ColorToken::default(),
            LocaleTag::default(),
            LanguageTag::default(),
            MenuMode::default(),
        )
    }
}

/// Every way the state can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleDarkMode,
    ToggleCollapsed,
    ToggleDrawer,
    SetPrimaryColor(ColorToken),
    SetLocale(LocaleTag),
    SetLanguage(LanguageTag),
    SetMenuMode(MenuMode),
}

/// Applies `action` to `state` and returns the new state.
///
/// Never fails: colours and tags are taken as given, and anything unusable
/// shows up later as a missing bundle or an unchanged style variable.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::ToggleDarkMode => {
            next.dark_mode = !state.dark_mode;
            next.theme = ThemeMode::from_dark_mode(next.dark_mode);
        }
        Action::ToggleCollapsed => next.collapsed = !state.collapsed,
        Action::ToggleDrawer => next.drawer_open = !state.drawer_open,
        Action::SetPrimaryColor(color) => next.primary_color = color.clone(),
        Action::SetLocale(locale) => next.locale = locale.clone(),
        Action::SetLanguage(language) => next.language = language.clone(),
        Action::SetMenuMode(mode) => next.menu_mode = *mode,
    }
    next
}
