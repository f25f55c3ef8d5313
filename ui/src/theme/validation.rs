use super::palette::Palette;
use crate::error::AppError;
use crate::state::ColorToken;
use crate::validation::Validator;
use std::path::PathBuf;

/// Validation errors specific to palette files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteValidationError {
    InvalidVariableName { name: String, reason: String },
    EmptyValue { name: String },
    InvalidPalettePath { path: String, reason: String },
    InvalidFileExtension { path: String, expected: String },
    InvalidColor { value: String },
    EmptyPalette,
}

impl PaletteValidationError {
    pub fn user_message(&self) -> String {
        match self {
            PaletteValidationError::InvalidVariableName { name, reason } => {
                format!(
                    "Invalid style variable name: '{}'\n\n\
                    Reason: {}\n\n\
                    Variable names look like '--primary-color'.",
                    name, reason
                )
            }
            PaletteValidationError::EmptyValue { name } => {
                format!("Style variable '{}' has an empty value.", name)
            }
            PaletteValidationError::InvalidPalettePath { path, reason } => {
                format!(
                    "Invalid palette path: '{}'\n\n\
                    Reason: {}\n\n\
                    Please ensure the path exists and is accessible.",
                    path, reason
                )
            }
            PaletteValidationError::InvalidFileExtension { path, expected } => {
                format!(
                    "Invalid file extension for: '{}'\n\n\
                    Expected: '{}' files",
                    path, expected
                )
            }
            PaletteValidationError::InvalidColor { value } => {
                format!(
                    "Invalid colour: '{}'\n\n\
                    Use a hex colour such as '#2196f3' or a colour keyword.",
                    value
                )
            }
            PaletteValidationError::EmptyPalette => {
                "Palette defines no style variables.".to_string()
            }
        }
    }
}

impl From<PaletteValidationError> for AppError {
    fn from(error: PaletteValidationError) -> Self {
        AppError::Theme(error.user_message())
    }
}

/// Validator for CSS custom property names
pub struct VariableNameValidator;

impl Validator<str> for VariableNameValidator {
    type Error = PaletteValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| PaletteValidationError::InvalidVariableName {
            name: input.to_string(),
            reason: reason.to_string(),
        };

        let Some(body) = input.strip_prefix("--") else {
            return Err(invalid("Name must start with '--'"));
        };

        if body.is_empty() {
            return Err(invalid("Name cannot be just '--'"));
        }

        if input.len() > 64 {
            return Err(invalid("Name too long (max 64 characters)"));
        }

        if !body
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(invalid(
                "Name contains invalid characters (only ASCII alphanumeric, hyphens, and underscores allowed)",
            ));
        }

        Ok(())
    }
}

/// Validator for palette file paths
pub struct PalettePathValidator;

impl Validator<PathBuf> for PalettePathValidator {
    type Error = PaletteValidationError;

    fn validate(&self, input: &PathBuf) -> Result<(), Self::Error> {
        if !input.exists() {
            return Err(PaletteValidationError::InvalidPalettePath {
                path: input.display().to_string(),
                reason: "Path does not exist".to_string(),
            });
        }

        if !input.is_file() {
            return Err(PaletteValidationError::InvalidPalettePath {
                path: input.display().to_string(),
                reason: "Path is not a file".to_string(),
            });
        }

        if input.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(PaletteValidationError::InvalidFileExtension {
                path: input.display().to_string(),
                expected: "toml".to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for accent colours supplied through configuration
pub struct ColorTokenValidator;

impl Validator<ColorToken> for ColorTokenValidator {
    type Error = PaletteValidationError;

    fn validate(&self, input: &ColorToken) -> Result<(), Self::Error> {
        if input.is_valid() {
            Ok(())
        } else {
            Err(PaletteValidationError::InvalidColor {
                value: input.as_str().to_string(),
            })
        }
    }
}

/// Validator for loaded palette content
pub struct PaletteValidator;

impl Validator<Palette> for PaletteValidator {
    type Error = PaletteValidationError;

    fn validate(&self, input: &Palette) -> Result<(), Self::Error> {
        if input.variables.is_empty() {
            return Err(PaletteValidationError::EmptyPalette);
        }

        let name_validator = VariableNameValidator;
        for (name, value) in &input.variables {
            name_validator.validate(name)?;
            if value.trim().is_empty() {
                return Err(PaletteValidationError::EmptyValue { name: name.clone() });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeVariableTable;

    #[test]
    fn test_variable_name_validator() {
        let validator = VariableNameValidator;

        assert!(validator.validate("--primary-color").is_ok());
        assert!(validator.validate("--text_color2").is_ok());

        assert!(validator.validate("").is_err());
        assert!(validator.validate("--").is_err());
        assert!(validator.validate("primary-color").is_err());
        assert!(validator.validate("--bad name").is_err());
        assert!(validator.validate(&format!("--{}", "a".repeat(63))).is_err());
    }

    #[test]
    fn test_palette_validator_rejects_empty_values() {
        let mut variables = ThemeVariableTable::new();
        variables.insert("--text-color".to_string(), "  ".to_string());
        let palette = Palette {
            metadata: Default::default(),
            variables,
        };

        assert_eq!(
            PaletteValidator.validate(&palette),
            Err(PaletteValidationError::EmptyValue {
                name: "--text-color".to_string()
            })
        );
    }

    #[test]
    fn test_color_token_validator() {
        assert!(ColorTokenValidator.validate(&"#2196f3".into()).is_ok());
        assert!(ColorTokenValidator.validate(&"#12".into()).is_err());
    }

    #[test]
    fn test_errors_convert_to_theme_errors() {
        let error: AppError = PaletteValidationError::EmptyPalette.into();
        assert!(matches!(error, AppError::Theme(_)));
    }
}
