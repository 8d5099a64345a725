use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Reservoir simulation deck inspector.
#[derive(Parser)]
#[command(
    name = "petra",
    version,
    about = "Parse reservoir simulation decks and list their calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML file with the parse policy.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse a deck and report diagnostics.
    Check(DeckArgs),
    /// Print a deck in canonical form.
    Dump(DeckArgs),
    /// Print the time steps of a deck.
    Schedule(DeckArgs),
}

/// Arguments shared by every subcommand.
#[derive(clap::Args)]
pub struct DeckArgs {
    /// Path to the deck file.
    pub deck: PathBuf,
}
