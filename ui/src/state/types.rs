use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Light or dark rendering of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuMode {
    #[default]
    Inline,
    Vertical,
    Horizontal,
}

impl MenuMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuMode::Inline => "inline",
            MenuMode::Vertical => "vertical",
            MenuMode::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for MenuMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inline" => Ok(MenuMode::Inline),
            "vertical" => Ok(MenuMode::Vertical),
            "horizontal" => Ok(MenuMode::Horizontal),
            other => Err(format!(
                "Unknown menu mode '{other}' (expected inline, vertical or horizontal)"
            )),
        }
    }
}

/// Accent colour as given by the user, e.g. `#2196f3` or `teal`.
///
/// The store accepts any token. Whether it is usable is decided when the
/// theme is projected: see [`ColorToken::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `#rgb`, `#rrggbb`, `#rrggbbaa` or a bare CSS colour keyword.
    pub fn is_valid(&self) -> bool {
        let value = self.0.trim();
        if let Some(hex) = value.strip_prefix('#') {
            matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        } else {
            !value.is_empty() && value.len() <= 32 && value.chars().all(|c| c.is_ascii_alphabetic())
        }
    }
}

impl Default for ColorToken {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_COLOR)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

pub const DEFAULT_PRIMARY_COLOR: &str = "#2196f3";
pub const DEFAULT_LOCALE: &str = "zh_CN";
pub const DEFAULT_LANGUAGE: &str = "zh";

/// Regional locale such as `zh_CN` or `en-GB`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTag(String);

impl LocaleTag {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language part of the tag: `zh_CN` and `zh-TW` both give `zh`.
    pub fn language(&self) -> LanguageTag {
        let language = self
            .0
            .split(|c| c == '_' || c == '-')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        LanguageTag::new(language)
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Two-letter UI language code such as `en` or `zh`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
