use super::palette::{Palette, builtin_palette};
use crate::state::{ColorToken, ThemeMode};
use std::collections::BTreeMap;

/// CSS custom property name -> value.
pub type ThemeVariableTable = BTreeMap<String, String>;

pub const PRIMARY_COLOR_VAR: &str = "--primary-color";

/// Derives the full variable table for a (mode, primary colour) pair.
///
/// Holds one palette per mode; every call copies the palette and sets the
/// primary entry, so output depends only on the arguments.
#[derive(Debug, Clone)]
pub struct ThemeProjector {
    light: Palette,
    dark: Palette,
}

impl ThemeProjector {
    pub fn new(light: Palette, dark: Palette) -> Self {
        Self { light, dark }
    }

    pub fn builtin() -> Self {
        Self::new(
            builtin_palette(ThemeMode::Light).clone(),
            builtin_palette(ThemeMode::Dark).clone(),
        )
    }

    pub fn palette(&self, mode: ThemeMode) -> &Palette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    pub fn project(&self, mode: ThemeMode, primary_color: &ColorToken) -> ThemeVariableTable {
        with_primary(self.palette(mode), primary_color)
    }
}

impl Default for ThemeProjector {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Projection against the built-in palettes.
pub fn project(mode: ThemeMode, primary_color: &ColorToken) -> ThemeVariableTable {
    with_primary(builtin_palette(mode), primary_color)
}

fn with_primary(palette: &Palette, primary_color: &ColorToken) -> ThemeVariableTable {
    let mut table = palette.variables.clone();
    if primary_color.is_valid() {
        table.insert(PRIMARY_COLOR_VAR.to_string(), primary_color.as_str().to_string());
    } else {
        log::debug!("Keeping palette primary colour, '{primary_color}' is not a colour");
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_entry_is_overwritten() {
        let table = project(ThemeMode::Light, &ColorToken::from("#ff0000"));
        assert_eq!(table[PRIMARY_COLOR_VAR], "#ff0000");
    }

    #[test]
    fn test_invalid_colour_leaves_palette_entry() {
        let projector = ThemeProjector::builtin();
        let table = projector.project(ThemeMode::Dark, &ColorToken::from("#zzz"));
        assert_eq!(
            table[PRIMARY_COLOR_VAR],
            builtin_palette(ThemeMode::Dark).variables[PRIMARY_COLOR_VAR]
        );
    }

    #[test]
    fn test_mode_switch_does_not_leak_keys() {
        let mut light = Palette {
            metadata: Default::default(),
            variables: ThemeVariableTable::new(),
        };
        light
            .variables
            .insert("--only-light".to_string(), "1".to_string());
        let dark = Palette {
            metadata: Default::default(),
            variables: ThemeVariableTable::new(),
        };
        let projector = ThemeProjector::new(light, dark);
        let color = ColorToken::default();

        assert!(projector.project(ThemeMode::Light, &color).contains_key("--only-light"));
        let table = projector.project(ThemeMode::Dark, &color);
        assert!(!table.contains_key("--only-light"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_free_function_matches_builtin_projector() {
        let color = ColorToken::from("teal");
        assert_eq!(
            project(ThemeMode::Dark, &color),
            ThemeProjector::builtin().project(ThemeMode::Dark, &color)
        );
    }
}
