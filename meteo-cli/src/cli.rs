use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::InquireError;
use std::io::IsTerminal;

use meteo_core::{BackendClient, Config, WeatherFetcher};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Météo en terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up current weather for a city or village.
    Lookup {
        /// City or village name.
        city: String,

        /// Override the configured backend base URL.
        #[arg(long)]
        backend_url: Option<String>,
    },

    /// Interactive prompt: look up cities until Esc or Ctrl-C.
    Prompt {
        /// Override the configured backend base URL.
        #[arg(long)]
        backend_url: Option<String>,
    },

    /// Show the reference cities on the world map.
    Map,

    /// Configure the backend base URL.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Lookup { city, backend_url } => {
                let mut fetcher = fetcher_from_config(backend_url)?;
                // Lookup failures are rendered, recovered states, not
                // process failures: the exit code stays 0.
                fetcher.submit(&city, render::render_state).await;
            }

            Command::Prompt { backend_url } => {
                let mut fetcher = fetcher_from_config(backend_url)?;
                loop {
                    match inquire::Text::new("Ville ou village ?").prompt() {
                        Ok(input) => fetcher.submit(&input, render::render_state).await,
                        Err(
                            InquireError::OperationCanceled
                            | InquireError::OperationInterrupted,
                        ) => break,
                        Err(err) => return Err(err).context("Prompt failed"),
                    }
                }
            }

            Command::Map => {
                render::print_grid();
                // The geo view needs a real terminal as its surface; when
                // stdout is piped the grid alone is shown.
                if std::io::stdout().is_terminal() {
                    let mut surface = render::TerminalMapSurface::new();
                    meteo_core::render_geo(&mut surface);
                    surface.print();
                }
            }

            Command::Configure => configure()?,
        }

        Ok(())
    }
}

fn fetcher_from_config(backend_url: Option<String>) -> anyhow::Result<WeatherFetcher> {
    let config = Config::load()?;
    let base_url = backend_url.unwrap_or_else(|| config.backend_url().to_string());
    tracing::debug!(base_url, "weather backend selected");
    Ok(WeatherFetcher::new(Box::new(BackendClient::new(base_url))))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;
    let current = config.backend_url().to_string();

    let input = inquire::Text::new("URL du backend météo :")
        .with_default(&current)
        .prompt()
        .context("Configuration prompt failed")?;

    let url = reqwest::Url::parse(input.trim())
        .with_context(|| format!("'{}' is not a valid URL", input.trim()))?;

    config.set_backend_url(url.as_str().trim_end_matches('/').to_string());
    config.save()?;

    println!("Configuration enregistrée : {}", config.backend_url());
    Ok(())
}
