//! Command-line definitions for the `imdev` binary.

use crate::state::MenuMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "imdev",
    version,
    about = "Inspect and drive the im.dev client state: theme, locale, sidebar and session"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: ./config.toml when present).
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Preference store file (overrides storage.path).
    #[arg(long, value_name = "PATH", global = true)]
    pub storage: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current state as JSON.
    State,

    /// Switch between light and dark theme.
    ToggleDark,

    /// Collapse or expand the sidebar.
    ToggleCollapsed,

    /// Open or close the settings drawer.
    ToggleDrawer,

    /// Set the accent colour, e.g. '#ff0000'.
    SetPrimary { color: String },

    /// Set the regional locale, e.g. 'en_GB'.
    SetLocale {
        locale: String,
        /// Also switch the UI language to the locale's language.
        #[arg(long)]
        with_language: bool,
    },

    /// Set the UI language, e.g. 'en'.
    SetLanguage { language: String },

    /// Set the navigation menu layout.
    SetMenuMode { mode: MenuMode },

    /// Print the projected theme variables.
    Theme {
        /// Render as a CSS `:root` block.
        #[arg(long)]
        css: bool,
    },

    /// Look up a message in the current language.
    Translate { key: String },

    /// Show who is signed in.
    Session {
        /// Ignore the dedup window and ask the backend again.
        #[arg(long)]
        refresh: bool,
    },

    /// Sign out and clear the cached session.
    Logout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_menu_mode() {
        let cli = Cli::try_parse_from(["imdev", "set-menu-mode", "horizontal"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::SetMenuMode {
                mode: MenuMode::Horizontal
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_menu_mode() {
        assert!(Cli::try_parse_from(["imdev", "set-menu-mode", "diagonal"]).is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["imdev", "theme", "--css", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Command::Theme { css: true }));
    }
}
