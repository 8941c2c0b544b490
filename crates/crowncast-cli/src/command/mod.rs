use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, classify_deck::ClassifyDeckArg, matchup::MatchupArg};

mod analyze;
mod classify_deck;
mod matchup;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Run the full retention analysis for one player's battle history
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Classify an eight-card deck into a known archetype
    ClassifyDeck(#[clap(flatten)] ClassifyDeckArg),
    /// Look up the matchup win rate between two archetypes
    Matchup(#[clap(flatten)] MatchupArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::ClassifyDeck(arg) => classify_deck::run(&arg)?,
        Mode::Matchup(arg) => matchup::run(&arg)?,
    }
    Ok(())
}
