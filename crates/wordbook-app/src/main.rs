use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordbook_app::settings::{self, default_config_path, init_config};
use wordbook_app::{AppController, AppState, Command, ConsolePresenter};

#[derive(Parser)]
#[command(name = "wordbook", version, about = "Personal vocabulary word book")]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Word book file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Config file (default: <config dir>/wordbook/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Add a word and its meaning
    Add {
        word: String,
        #[arg(required = true, num_args = 1..)]
        meaning: Vec<String>,
    },
    /// Remove a word
    Remove { word: String },
    /// Show the meaning of a word
    Find { word: String },
    /// List every word
    List,
    /// Look a word up in the online dictionary
    Lookup { word: String },
    /// Quiz yourself on every word once
    Review,
    /// Show commands and the help link
    Help,
    /// Print the effective configuration
    Config {
        /// Write the default config file if it does not exist
        #[arg(long)]
        init: bool,
    },
    /// Interactive shell (the default)
    Shell,
}

impl Cmd {
    fn into_command(self) -> Option<Command> {
        let command = match self {
            Cmd::Add { word, meaning } => Command::Add {
                word,
                meaning: meaning.join(" "),
            },
            Cmd::Remove { word } => Command::Remove(word),
            Cmd::Find { word } => Command::Find(word),
            Cmd::List => Command::List,
            Cmd::Lookup { word } => Command::Lookup(word),
            Cmd::Review => Command::Review,
            Cmd::Help => Command::Help,
            Cmd::Config { .. } | Cmd::Shell => return None,
        };
        Some(command)
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = settings::load_config(cli.config.as_deref())?;
    if let Some(file) = cli.file {
        config.store.path = file;
    }

    if let Some(Cmd::Config { init }) = &cli.command {
        if *init {
            let path = match cli.config.clone().or_else(default_config_path) {
                Some(path) => path,
                None => anyhow::bail!("No config directory on this platform, pass --config"),
            };
            if init_config(&path)? {
                println!("Wrote {}", path.display());
            } else {
                println!("{} already exists", path.display());
            }
        }
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let initial = cli.command.and_then(Cmd::into_command);

    let state = AppState::new(config).context("Failed to start")?;
    let controller = AppController::new();
    let mut shell = controller.shell(state, ConsolePresenter::new());

    controller.run(&mut shell, initial).await
}
