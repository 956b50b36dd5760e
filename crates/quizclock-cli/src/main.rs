//! quizclock CLI — a timed question/answer quiz on the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "quizclock",
    version,
    about = "Timed question/answer quiz",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

/// Options for running a quiz (the default when no subcommand is given).
#[derive(Args)]
struct RunArgs {
    /// CSV file in the format 'question,answer' [default: problems.csv]
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Time limit for the whole quiz, in seconds [default: 30]
    #[arg(long)]
    time: Option<u64>,

    /// Shuffle the questions before starting
    #[arg(long)]
    shuffle: bool,

    /// Seed for a reproducible shuffle
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a quiz file without running it
    Validate {
        /// CSV file in the format 'question,answer' [default: problems.csv]
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout belongs to the quiz dialogue.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizclock=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Validate { csv, config }) => commands::validate::execute(csv, config),
        None => {
            let RunArgs {
                csv,
                time,
                shuffle,
                seed,
                config,
            } = cli.run;
            commands::run::execute(csv, time, shuffle, seed, config).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
