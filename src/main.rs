use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use user_effects::api::HttpUserApi;
use user_effects::config::Config;
use user_effects::coordinator::{EffectCoordinator, Outcome};
use user_effects::model::{AppState, GroupId, GroupsWithOwner};
use user_effects::mvi::UserIntent;
use user_effects::notify::ChannelNotifier;
use user_effects::store::{InMemoryStore, StateStore};
use user_effects::telemetry::init_tracing;

/// Run user profile and alias effects against the user API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL from the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Refresh a user's profile and print the resulting state
    Profile { name: String },

    /// Change a user's alias and print the resulting group state
    Alias {
        target_user: String,
        alias: String,

        /// Group to focus after the change
        #[arg(long)]
        group: GroupId,

        /// JSON file with the current group hierarchy (array of owner groups)
        #[arg(long)]
        groups: Option<PathBuf>,
    },

    /// Route an API error message to the notifier
    Error { message: String },
}

impl Command {
    fn intent(&self) -> UserIntent {
        match self {
            Command::Profile { name } => UserIntent::update(name.as_str()),
            Command::Alias {
                target_user,
                alias,
                group,
                ..
            } => UserIntent::alias_update(target_user.as_str(), alias.as_str(), *group),
            Command::Error { message } => UserIntent::api_error(message),
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) if !path.exists() => bail!("Config file '{}' does not exist", path.display()),
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate()?;
    }
    Ok(config)
}

fn load_groups(path: &Path) -> Result<Vec<GroupsWithOwner>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read groups file '{}'", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse groups file '{}'", path.display()))
}

fn initial_state(command: &Command) -> Result<AppState> {
    let mut state = AppState::default();
    if let Command::Alias {
        groups: Some(path), ..
    } = command
    {
        state.group.groups = load_groups(path)?;
    }
    Ok(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.logging);

    let store = InMemoryStore::with_state(initial_state(&cli.command)?);
    let api = HttpUserApi::new(&config.api)?;
    let (notifier, mut notifications) = ChannelNotifier::new();
    let coordinator = EffectCoordinator::new(api, store.clone(), notifier);

    let outcome = coordinator
        .dispatch(cli.command.intent())
        .await
        .context("Effect handler panicked")?;
    drop(coordinator);

    while let Ok(notification) = notifications.try_recv() {
        eprintln!("error: {}", notification.message);
    }
    println!("{}", serde_json::to_string_pretty(&store.read())?);

    if outcome == Outcome::Failed {
        std::process::exit(1);
    }
    Ok(())
}
