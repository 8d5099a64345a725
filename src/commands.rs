//! Subcommands: read a deck file, parse it and report.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use petra_calendar::TimeMap;
use petra_deck::Deck;
use petra_parser::Parser;
use petra_schema::{MessageContainer, ParseContext};

use crate::cli::DeckArgs;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parse a deck and print its diagnostics.
pub fn check(args: &DeckArgs, context: &ParseContext) -> Result<()> {
    let _cmd = info_span!("check").entered();
    let (deck, messages) = load_deck(&args.deck, context)?;
    for message in &messages {
        println!("{message}");
    }
    println!(
        "{}: {} keywords, {} warnings",
        args.deck.display(),
        deck.size(),
        messages.warnings().count()
    );
    Ok(())
}

/// Parse a deck and print it in canonical form.
pub fn dump(args: &DeckArgs, context: &ParseContext) -> Result<()> {
    let _cmd = info_span!("dump").entered();
    let (deck, _) = load_deck(&args.deck, context)?;
    print!("{deck}");
    Ok(())
}

/// Parse a deck and print one line per time point: index, time and the
/// length in days of the step that starts there.
pub fn schedule(args: &DeckArgs, context: &ParseContext) -> Result<()> {
    let _cmd = info_span!("schedule").entered();
    let (deck, _) = load_deck(&args.deck, context)?;
    let map = TimeMap::from_deck(&deck).context("failed to build the time map")?;
    for (index, time) in map.times().iter().enumerate() {
        match map.get_time_step_length(index) {
            Ok(seconds) => println!("{index:>5}  {time}  {:>10.3}", seconds / SECONDS_PER_DAY),
            Err(_) => println!("{index:>5}  {time}"),
        }
    }
    info!(n_steps = map.num_timesteps(), "listed schedule");
    Ok(())
}

fn load_deck(path: &Path, context: &ParseContext) -> Result<(Deck, MessageContainer)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read deck: {}", path.display()))?;
    let parser = Parser::new().context("failed to build the keyword registry")?;
    let mut messages = MessageContainer::new();
    let mut deck = parser
        .parse_string(&text, context, &mut messages)
        .with_context(|| format!("failed to parse deck: {}", path.display()))?;
    deck.set_data_file(path.display().to_string());
    info!(path = %path.display(), n_keywords = deck.size(), "loaded deck");
    Ok((deck, messages))
}
