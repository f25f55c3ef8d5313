use super::projector::{ThemeProjector, ThemeVariableTable};
use crate::state::AppStore;
use imdev_server::common::SubscriptionId;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex, PoisonError};

/// Render target that accepts a full variable table per projection run.
pub trait StyleInjector: Send + Sync {
    fn inject(&self, variables: &ThemeVariableTable);
}

/// Injector that keeps the last table and renders it as a `:root` rule.
#[derive(Debug, Default)]
pub struct CssVariableSheet {
    current: Mutex<ThemeVariableTable>,
    injections: Mutex<usize>,
}

impl CssVariableSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variables(&self) -> ThemeVariableTable {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of tables injected so far.
    pub fn injection_count(&self) -> usize {
        *self.injections.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn render(&self) -> String {
        render_root_block(&self.variables())
    }
}

impl StyleInjector for CssVariableSheet {
    fn inject(&self, variables: &ThemeVariableTable) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = variables.clone();
        *self.injections.lock().unwrap_or_else(PoisonError::into_inner) += 1;
    }
}

pub fn render_root_block(variables: &ThemeVariableTable) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in variables {
        let _ = writeln!(css, "  {name}: {value};");
    }
    css.push('}');
    css
}

/// Injects the projection of the store's current state, then re-injects on
/// every change to theme or primary colour.
pub fn bind_theme(
    store: &AppStore,
    projector: ThemeProjector,
    injector: Arc<dyn StyleInjector>,
) -> SubscriptionId {
    let state = store.state();
    injector.inject(&projector.project(state.theme(), state.primary_color()));

    store.subscribe(move |change| {
        if !change.theme_changed() {
            return;
        }
        let state = &change.current;
        log::debug!(
            "Injecting {} theme with primary colour {}",
            state.theme(),
            state.primary_color()
        );
        injector.inject(&projector.project(state.theme(), state.primary_color()));
    })
}
