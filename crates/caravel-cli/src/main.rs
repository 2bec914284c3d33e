use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use caravel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "caravel")]
#[command(author, version, about = "A breakpoint-aware slide carousel for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck file to present (shorthand for `run`)
    #[arg(short = 'd', long = "deck")]
    deck: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Present a deck (the default command)
    Run {
        /// Deck file; the built-in demo deck when omitted
        deck: Option<PathBuf>,
    },
    /// Write a sample deck and default configuration
    Init {
        /// Directory for the sample deck (default: current directory)
        dir: Option<PathBuf>,
    },
    /// Validate configuration and deck without presenting
    Check {
        /// Deck file; the built-in demo deck when omitted
        deck: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging; RUST_LOG overrides the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Some(Commands::Run { deck }) => commands::run::run(config, deck.or(cli.deck)),
        Some(Commands::Init { dir }) => commands::init::run(dir),
        Some(Commands::Check { deck }) => commands::check::run(&config, deck.or(cli.deck)),
        None => commands::run::run(config, cli.deck),
    }
}
