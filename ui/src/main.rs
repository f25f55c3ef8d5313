use anyhow::Context;
use clap::Parser;
use imdev::Application;
use imdev::cli::{Cli, Command};
use imdev::config::load_config;
use imdev::error::AppError;
use imdev::logger::setup_logger;
use imdev::state::{Action, LocaleTag};
use imdev::storage::FileBackend;
use imdev::theme::CssVariableSheet;
use imdev_server::session::HttpSessionProvider;
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    setup_logger(config.logging()).context("Failed to initialise logging")?;

    let storage_path = cli
        .storage
        .clone()
        .unwrap_or_else(|| config.storage().path());
    info!("Using preference store at {}", storage_path.display());

    let backend = Arc::new(FileBackend::new(storage_path));
    let provider = Arc::new(HttpSessionProvider::new(
        config.api().http_session_config(),
    )?);
    let sheet = Arc::new(CssVariableSheet::new());

    let mut app = Application::new(config, backend, provider, sheet.clone())?;
    run(cli.command, &mut app, &sheet).await
}

async fn run(
    command: Command,
    app: &mut Application,
    sheet: &CssVariableSheet,
) -> anyhow::Result<()> {
    match command {
        Command::State => print_state(app)?,
        Command::ToggleDark => {
            app.dispatch(Action::ToggleDarkMode);
            print_state(app)?;
        }
        Command::ToggleCollapsed => {
            app.dispatch(Action::ToggleCollapsed);
            print_state(app)?;
        }
        Command::ToggleDrawer => {
            app.dispatch(Action::ToggleDrawer);
            print_state(app)?;
        }
        Command::SetPrimary { color } => {
            app.dispatch(Action::SetPrimaryColor(color.as_str().into()));
            if !app.state().primary_color().is_valid() {
                eprintln!("'{color}' is not a colour; the theme keeps its palette accent");
            }
            print_state(app)?;
        }
        Command::SetLocale {
            locale,
            with_language,
        } => {
            let locale = LocaleTag::new(locale);
            if with_language {
                app.dispatch(Action::SetLanguage(locale.language()));
            }
            app.dispatch(Action::SetLocale(locale));
            print_state(app)?;
        }
        Command::SetLanguage { language } => {
            app.dispatch(Action::SetLanguage(language.as_str().into()));
            if app.messages().is_none() {
                eprintln!("No messages for language '{language}'");
            }
            print_state(app)?;
        }
        Command::SetMenuMode { mode } => {
            app.dispatch(Action::SetMenuMode(mode));
            print_state(app)?;
        }
        Command::Theme { css } => {
            if css {
                println!("{}", sheet.render());
            } else {
                for (name, value) in app.theme_variables() {
                    println!("{name}: {value}");
                }
            }
        }
        Command::Translate { key } => match app.translate(&key) {
            Some(message) => println!("{message}"),
            None => anyhow::bail!(
                "No message for '{}' in language '{}'",
                key,
                app.state().language()
            ),
        },
        Command::Session { refresh } => {
            let sessions = app.sessions();
            let session = if refresh {
                sessions.revalidate().await
            } else {
                sessions.get_session().await
            }
            .map_err(AppError::from)?;

            match session {
                Some(session) => println!(
                    "{} ({})",
                    session.user.display_name(),
                    session.role().unwrap_or("Normal")
                ),
                None => println!(
                    "{}",
                    app.translate("nav.signIn")
                        .unwrap_or_else(|| "signed out".to_string())
                ),
            }
        }
        Command::Logout => {
            app.sessions().logout().await.map_err(AppError::from)?;
            println!("{}", app.translate("nav.signOut").unwrap_or_default());
        }
    }
    Ok(())
}

fn print_state(app: &Application) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(app.state())
        .map_err(|e| AppError::State(format!("Failed to render state: {e}")))?;
    println!("{json}");
    Ok(())
}
