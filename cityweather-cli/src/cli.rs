use anyhow::{Context, bail};
use clap::{ArgAction, Parser, Subcommand};
use cityweather_core::{
    Config, InputEvent, Key, LookupController, RequestState, provider_from_config,
};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};

use crate::output::render_state;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for a city")]
pub struct Cli {
    /// OpenWeather API key; overrides the one in the config file.
    #[arg(long, global = true, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Store the API key and the city shown on start.
    Configure,

    /// Show the weather for one city and exit.
    Show {
        /// City name, passed to the provider unchanged.
        city: String,

        /// Print the snapshot as JSON instead of the panel.
        #[arg(long)]
        json: bool,
    },

    /// Search cities interactively, starting with the configured city.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Show { city, json } => {
                let config = Config::load()?.with_api_key(self.api_key);
                show(&config, city, json).await
            }
            Command::Interactive => {
                let config = Config::load()?.with_api_key(self.api_key);
                interactive(&config).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Leave empty to keep the current key")
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let initial_query = Text::new("City to show on start:")
        .with_default(&config.initial_query)
        .prompt()
        .context("Failed to read initial city")?;
    config.initial_query = initial_query;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn controller_for(config: &Config) -> anyhow::Result<LookupController> {
    let provider = provider_from_config(config).context("Failed to set up weather provider")?;
    Ok(LookupController::new(config, provider))
}

async fn show(config: &Config, city: String, json: bool) -> anyhow::Result<()> {
    let mut ctrl = controller_for(config)?;
    ctrl.set_query(city);

    match ctrl.submit().await {
        RequestState::Success(snapshot) if json => {
            println!("{}", serde_json::to_string_pretty(snapshot)?);
        }
        state @ RequestState::Success(_) => {
            if let Some(text) = render_state(state) {
                println!("{text}");
            }
        }
        state => {
            bail!(render_state(state).unwrap_or_default());
        }
    }
    Ok(())
}

async fn interactive(config: &Config) -> anyhow::Result<()> {
    let mut ctrl = controller_for(config)?;

    print_state(ctrl.on_mount().await);

    loop {
        let current = ctrl.query().to_string();
        let input = tokio::task::spawn_blocking(move || {
            Text::new("Search city")
                .with_placeholder("city name")
                .with_default(&current)
                .with_help_message("Enter to search, Esc to quit")
                .prompt()
        })
        .await
        .context("Prompt task failed")?;

        let event = match input {
            Ok(text) => {
                ctrl.handle(InputEvent::Edit(text));
                InputEvent::Key(Key::Enter)
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                InputEvent::Key(Key::Escape)
            }
            Err(err) => return Err(err).context("Failed to read search input"),
        };

        let Some(ticket) = ctrl.handle(event) else {
            break;
        };

        print_state(ctrl.state());
        let completion = ctrl.fetch(ticket).await;
        ctrl.apply(completion);
        print_state(ctrl.state());
    }

    Ok(())
}

fn print_state(state: &RequestState) {
    if let Some(text) = render_state(state) {
        println!("{text}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["cityweather"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn show_parses_city_and_json_flag() {
        let cli = Cli::try_parse_from(["cityweather", "show", "New York", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Show { city: "New York".into(), json: true })
        );
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli =
            Cli::try_parse_from(["cityweather", "show", "jaffna", "-vv", "--api-key", "KEY"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.api_key.as_deref(), Some("KEY"));
    }

    #[test]
    fn show_requires_a_city() {
        assert!(Cli::try_parse_from(["cityweather", "show"]).is_err());
    }
}
