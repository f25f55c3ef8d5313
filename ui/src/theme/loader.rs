use crate::error::{AppError, AppResult};
use crate::state::ThemeMode;
use crate::theme::palette::{Palette, builtin_palette};
use crate::theme::projector::ThemeProjector;
use crate::theme::validation::{PalettePathValidator, PaletteValidator};
use crate::validation::Validator;
use std::{fs, path::PathBuf};

/// Loads `light.toml` / `dark.toml` palettes from a directory.
pub struct PaletteLoader {
    palette_dir: PathBuf,
    path_validator: PalettePathValidator,
    palette_validator: PaletteValidator,
}

impl PaletteLoader {
    pub fn new(palette_dir: impl Into<PathBuf>) -> Self {
        Self {
            palette_dir: palette_dir.into(),
            path_validator: PalettePathValidator,
            palette_validator: PaletteValidator,
        }
    }

    pub fn palette_path(&self, mode: ThemeMode) -> PathBuf {
        self.palette_dir.join(format!("{}.toml", mode.as_str()))
    }

    pub fn load_palette(&self, mode: ThemeMode) -> AppResult<Palette> {
        let path = self.palette_path(mode);
        self.path_validator.validate(&path)?;

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Theme(format!(
                "Failed to read palette file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut palette: Palette = toml::from_str(&content).map_err(|e| {
            AppError::Theme(format!(
                "Failed to parse palette file '{}': {}",
                path.display(),
                e
            ))
        })?;

        if palette.metadata.name.is_empty() {
            palette.metadata.name = mode.as_str().to_string();
        }

        self.palette_validator.validate(&palette)?;
        log::info!(
            "Loaded {} palette '{}' from {}",
            mode,
            palette.metadata.name,
            path.display()
        );
        Ok(palette)
    }

    /// Palette for `mode`, falling back to the built-in one when the file is
    /// absent. A file that exists but is invalid is an error.
    pub fn load_or_builtin(&self, mode: ThemeMode) -> AppResult<Palette> {
        if self.palette_path(mode).exists() {
            self.load_palette(mode)
        } else {
            log::debug!("No {} palette in {}, using built-in", mode, self.palette_dir.display());
            Ok(builtin_palette(mode).clone())
        }
    }

    pub fn load_projector(&self) -> AppResult<ThemeProjector> {
        Ok(ThemeProjector::new(
            self.load_or_builtin(ThemeMode::Light)?,
            self.load_or_builtin(ThemeMode::Dark)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DARK: &str = r##"
[metadata]
name = "midnight"
description = "Deep blue"

[variables]
"--primary-color" = "#3f51b5"
"--body-background" = "#0b0d17"
"##;

    #[test]
    fn test_loads_palette_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("dark.toml"), DARK).unwrap();

        let palette = PaletteLoader::new(dir.path())
            .load_palette(ThemeMode::Dark)
            .unwrap();
        assert_eq!(palette.metadata.name, "midnight");
        assert_eq!(palette.variables["--body-background"], "#0b0d17");
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let loader = PaletteLoader::new(dir.path());

        assert!(loader.load_palette(ThemeMode::Light).is_err());
        assert_eq!(
            &loader.load_or_builtin(ThemeMode::Light).unwrap(),
            builtin_palette(ThemeMode::Light)
        );
    }

    #[test]
    fn test_invalid_variable_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("light.toml"),
            "[variables]\n\"primary-color\" = \"#fff\"\n",
        )
        .unwrap();

        let result = PaletteLoader::new(dir.path()).load_or_builtin(ThemeMode::Light);
        assert!(matches!(result, Err(AppError::Theme(ref msg)) if msg.contains("primary-color")));
    }

    #[test]
    fn test_projector_mixes_file_and_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("dark.toml"), DARK).unwrap();

        let projector = PaletteLoader::new(dir.path()).load_projector().unwrap();
        assert_eq!(projector.palette(ThemeMode::Dark).variables.len(), 2);
        assert_eq!(
            projector.palette(ThemeMode::Light),
            builtin_palette(ThemeMode::Light)
        );
    }
}
