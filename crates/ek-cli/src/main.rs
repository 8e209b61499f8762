//! CLI frontend for the Erdkunde geography quiz.

mod commands;
mod prompt;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ek",
    about = "Erdkunde — a terminal geography quiz",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive quiz for one or more players
    Play {
        /// RNG seed for reproducible question shuffles
        #[arg(short, long)]
        seed: Option<u64>,

        /// Ask every player this many questions instead of prompting
        #[arg(short, long)]
        count: Option<usize>,

        /// Also print final standings as json, markdown, or text
        #[arg(short, long)]
        export: Option<String>,
    },

    /// List the question bank
    Questions {
        /// Include the correct-answer column
        #[arg(short, long)]
        answers: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            seed,
            count,
            export,
        } => commands::play::run(seed, count, export.as_deref()),
        Commands::Questions { answers } => commands::questions::run(answers),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
