use super::projector::{PRIMARY_COLOR_VAR, ThemeVariableTable};
use crate::state::ThemeMode;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
}

/// Static style-variable overrides for one theme mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default)]
    pub metadata: PaletteMetadata,
    pub variables: ThemeVariableTable,
}

impl Palette {
    fn builtin(name: &str, description: &str, entries: &[(&str, &str)]) -> Self {
        Self {
            metadata: PaletteMetadata {
                name: name.to_string(),
                description: description.to_string(),
                author: "imdev".to_string(),
            },
            variables: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

static LIGHT: Lazy<Palette> = Lazy::new(|| {
    Palette::builtin(
        "light",
        "Default light palette",
        &[
            (PRIMARY_COLOR_VAR, "#2196f3"),
            ("--body-background", "#ffffff"),
            ("--component-background", "#ffffff"),
            ("--layout-header-background", "#ffffff"),
            ("--layout-sider-background", "#fafafa"),
            ("--text-color", "rgba(0, 0, 0, 0.85)"),
            ("--text-color-secondary", "rgba(0, 0, 0, 0.45)"),
            ("--heading-color", "rgba(0, 0, 0, 0.85)"),
            ("--border-color-base", "#d9d9d9"),
            ("--border-color-split", "#f0f0f0"),
            ("--item-hover-bg", "#f5f5f5"),
            ("--shadow-color", "rgba(0, 0, 0, 0.15)"),
        ],
    )
});

static DARK: Lazy<Palette> = Lazy::new(|| {
    Palette::builtin(
        "dark",
        "Default dark palette",
        &[
            (PRIMARY_COLOR_VAR, "#177ddc"),
            ("--body-background", "#000000"),
            ("--component-background", "#141414"),
            ("--layout-header-background", "#1f1f1f"),
            ("--layout-sider-background", "#141414"),
            ("--text-color", "rgba(255, 255, 255, 0.85)"),
            ("--text-color-secondary", "rgba(255, 255, 255, 0.45)"),
            ("--heading-color", "rgba(255, 255, 255, 0.85)"),
            ("--border-color-base", "#434343"),
            ("--border-color-split", "#303030"),
            ("--item-hover-bg", "rgba(255, 255, 255, 0.08)"),
            ("--shadow-color", "rgba(0, 0, 0, 0.45)"),
        ],
    )
});

/// Built-in palette for `mode`.
pub fn builtin_palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &*LIGHT,
        ThemeMode::Dark => &*DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_palettes_share_variable_names() {
        let light: Vec<_> = builtin_palette(ThemeMode::Light).variables.keys().collect();
        let dark: Vec<_> = builtin_palette(ThemeMode::Dark).variables.keys().collect();
        assert_eq!(light, dark);
        assert!(light.iter().all(|name| name.starts_with("--")));
    }
}
