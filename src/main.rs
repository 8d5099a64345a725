mod cli;
mod commands;
mod config;
mod convert;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let context = convert::load_parse_context(cli.config.as_deref())?;
    match cli.command {
        Command::Check(args) => commands::check(&args, &context),
        Command::Dump(args) => commands::dump(&args, &context),
        Command::Schedule(args) => commands::schedule(&args, &context),
    }
}
