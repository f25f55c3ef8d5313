use super::types::{ColorToken, LanguageTag, LocaleTag, MenuMode};
use super::{Action, AppState, reduce};
use imdev_server::common::{SubscriptionId, Subscribers};

/// What an action did, handed to every subscriber.
#[derive(Debug, Clone)]
pub struct StateChange {
    pub action: Action,
    pub previous: AppState,
    pub current: AppState,
}

impl StateChange {
    /// Whether the inputs of the theme projection changed.
    pub fn theme_changed(&self) -> bool {
        self.previous.theme() != self.current.theme()
            || self.previous.primary_color() != self.current.primary_color()
    }

    pub fn locale_changed(&self) -> bool {
        self.previous.locale() != self.current.locale()
            || self.previous.language() != self.current.language()
    }
}

/// Owner of the application state.
///
/// Constructed explicitly and passed to whatever needs it; several
/// independent stores can coexist. Each action method runs the reducer and
/// then calls every subscriber before returning.
#[derive(Debug)]
pub struct AppStore {
    state: AppState,
    subscribers: Subscribers<StateChange>,
}

impl AppStore {
    pub fn new(initial: AppState) -> Self {
        Self::with_subscribers(initial, Subscribers::new())
    }

    pub fn with_subscribers(initial: AppState, subscribers: Subscribers<StateChange>) -> Self {
        Self {
            state: initial,
            subscribers,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn dispatch(&mut self, action: Action) {
        log::debug!("Dispatching {action:?}");
        let next = reduce(&self.state, &action);
        let previous = std::mem::replace(&mut self.state, next);
        let change = StateChange {
            action,
            previous,
            current: self.state.clone(),
        };
        self.subscribers.notify(&change);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dispatch(Action::ToggleDarkMode);
    }

    pub fn toggle_collapsed(&mut self) {
        self.dispatch(Action::ToggleCollapsed);
    }

    pub fn toggle_drawer(&mut self) {
        self.dispatch(Action::ToggleDrawer);
    }

    pub fn set_primary_color(&mut self, color: impl Into<ColorToken>) {
        self.dispatch(Action::SetPrimaryColor(color.into()));
    }

    pub fn set_locale(&mut self, locale: impl Into<LocaleTag>) {
        self.dispatch(Action::SetLocale(locale.into()));
    }

    pub fn set_language(&mut self, language: impl Into<LanguageTag>) {
        self.dispatch(Action::SetLanguage(language.into()));
    }

    pub fn set_menu_mode(&mut self, mode: MenuMode) {
        self.dispatch(Action::SetMenuMode(mode));
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ThemeMode;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_subscribers_run_before_action_returns() {
        let mut store = AppStore::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |change| {
            sink.lock().unwrap().push(change.current.theme());
        });

        store.toggle_dark_mode();
        assert_eq!(*seen.lock().unwrap(), vec![ThemeMode::Dark]);

        store.toggle_dark_mode();
        assert_eq!(*seen.lock().unwrap(), vec![ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn test_change_flags() {
        let mut store = AppStore::default();
        let flags = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&flags);
        store.subscribe(move |change| {
            sink.lock()
                .unwrap()
                .push((change.theme_changed(), change.locale_changed()));
        });

        store.toggle_collapsed();
        store.set_primary_color("#ff0000");
        store.set_language("en");

        assert_eq!(
            *flags.lock().unwrap(),
            vec![(false, false), (true, false), (false, true)]
        );
    }

    #[test]
    fn test_independent_stores_do_not_share_state() {
        let mut a = AppStore::default();
        let b = AppStore::default();
        a.toggle_drawer();
        assert!(a.state().drawer_open());
        assert!(!b.state().drawer_open());
    }

    #[test]
    fn test_unsubscribed_callback_is_not_called() {
        let mut store = AppStore::default();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_| *counter.lock().unwrap() += 1);

        store.toggle_drawer();
        assert!(store.unsubscribe(id));
        store.toggle_drawer();

        assert_eq!(*calls.lock().unwrap(), 1);
    }
}
