//! Wordle Session - CLI
//!
//! Play Wordle against a persistent per-user session store, in a TUI or as
//! one-shot commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use wordle_session::{
    commands::{ShowFormat, guess, new_game, run_simple, show, stats},
    config::EngineConfig,
    logging::{self, LogTarget},
    session::{SessionEngine, UserId},
    store::JsonFileStore,
};

#[derive(Parser)]
#[command(
    name = "wordle_session",
    about = "Play Wordle with games saved per user",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Player name; defaults to $USER
    #[arg(short, long, global = true, env = "WORDLE_USER")]
    user: Option<String>,

    /// Session file (default: <data dir>/wordle_session/sessions.json)
    #[arg(short, long, global = true, env = "WORDLE_STORE")]
    store: Option<PathBuf>,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Submit a single guess
    Guess {
        /// The 5-letter guess
        word: String,
    },

    /// Show the current game
    Show {
        /// Print the game as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,

        /// Print the board without colors
        #[arg(long)]
        plain: bool,
    },

    /// Abandon the current game and start another
    New {
        /// Use this answer instead of a random one
        #[arg(short, long)]
        answer: Option<String>,
    },

    /// Show win/loss statistics
    Stats,
}

fn default_store_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("no data directory; pass --store")?;
    Ok(base.join("wordle_session").join("sessions.json"))
}

fn default_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "player".to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it only logs to a file
    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(log_target)?;

    let config = EngineConfig::from_source(&cli.wordlist)
        .with_context(|| format!("loading wordlist '{}'", cli.wordlist))?;
    let store_path = match cli.store {
        Some(path) => path,
        None => default_store_path()?,
    };
    debug!(path = %store_path.display(), "opening session store");
    let store = JsonFileStore::open(&store_path)
        .with_context(|| format!("opening session store {}", store_path.display()))?;

    let engine = SessionEngine::new(config, store);
    let user = UserId::new(cli.user.unwrap_or_else(default_user));

    match command {
        Commands::Play => run_play_command(&engine, user),
        Commands::Simple => run_simple(&engine, &user),
        Commands::Guess { word } => guess(&engine, &user, &word),
        Commands::Show { json, plain } => {
            let format = if json {
                ShowFormat::Json
            } else if plain {
                ShowFormat::Plain
            } else {
                ShowFormat::Colored
            };
            show(&engine, &user, format)
        }
        Commands::New { answer } => new_game(&engine, &user, answer.as_deref()),
        Commands::Stats => stats(&engine, &user),
    }
}

fn run_play_command(engine: &SessionEngine<JsonFileStore>, user: UserId) -> Result<()> {
    use wordle_session::interactive::{App, run_tui};

    let app = App::new(engine, user)?;
    run_tui(app)
}
