//! Settings CLI commands

use clap::Subcommand;

use crate::config::{SaldoPaths, Settings, Theme};
use crate::error::{SaldoError, SaldoResult};

/// Settings subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings
    Show,
    /// Toggle the theme, or set it explicitly
    Theme {
        /// Theme to set (light, dark); omit to toggle
        theme: Option<String>,
    },
    /// Set the profile image URL
    Avatar {
        /// Image URL or data-URL
        url: String,
    },
    /// Mark the session as started
    Start,
    /// End the session
    Logout,
}

/// Handle a settings command
pub fn handle_config_command(paths: &SaldoPaths, cmd: ConfigCommands) -> SaldoResult<()> {
    let mut settings = Settings::load_or_create(paths)?;

    match cmd {
        ConfigCommands::Show => {
            println!("Sessão iniciada: {}", if settings.started { "sim" } else { "não" });
            println!("Tema:            {}", settings.theme);
            println!("Avatar:          {}", settings.profile_image);
            println!("Moeda:           {}", settings.currency_symbol);
        }

        ConfigCommands::Theme { theme } => {
            settings.theme = match theme {
                Some(s) => Theme::parse(&s).ok_or_else(|| {
                    SaldoError::Validation(format!("Invalid theme: '{}'. Valid: light, dark", s))
                })?,
                None => settings.theme.toggle(),
            };
            settings.save(paths)?;
            println!("Tema: {}", settings.theme);
        }

        ConfigCommands::Avatar { url } => {
            settings.profile_image = url;
            settings.save(paths)?;
            println!("Avatar atualizado");
        }

        ConfigCommands::Start => {
            settings.started = true;
            settings.save(paths)?;
            println!("Sessão iniciada");
        }

        ConfigCommands::Logout => {
            settings.started = false;
            settings.save(paths)?;
            println!("Sessão encerrada");
        }
    }

    Ok(())
}
