use std::{
    io::{self, IsTerminal},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use tracing_subscriber::EnvFilter;
use weather_core::{Config, config::DEFAULT_CONFIG_FILE};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for wherever you are")]
pub struct Cli {
    /// Path to the JSON settings file.
    #[arg(long, short, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Detect the current location and print its weather (default).
    Show,

    /// Store the OpenWeather API key in the settings file.
    Configure {
        /// Key to store; prompted for when absent.
        #[arg(long)]
        api_key: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Show) {
            Command::Show => {
                let mut stdout = io::stdout().lock();
                weather_core::run(&self.config, &mut stdout).await?;
            }
            Command::Configure { api_key } => configure(&self.config, api_key)?,
        }

        Ok(())
    }
}

fn configure(path: &Path, api_key: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(path)?;

    let api_key = match api_key {
        Some(key) => key,
        None => Password::new("OpenWeather API key:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?,
    };

    let api_key = api_key.trim().to_string();
    anyhow::ensure!(!api_key.is_empty(), "API key must not be empty");

    config.set_api_key(api_key);
    config.save(path)?;

    tracing::info!(path = %path.display(), "saved configuration");
    println!("Saved API key to {}", path.display());
    Ok(())
}

/// Log to stderr so stdout carries only the report. `RUST_LOG` wins over `-v`.
///
/// Stage failures are only logged at debug level; `main` prints the diagnostic line.
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}
