use std::path::PathBuf;

use anyhow::ensure;
use crowncast_deck::{ArchetypeDatabase, Classification, MatcherConfig, classify_archetype};
use crowncast_model::{CardDatabase, CardId, DECK_SIZE};
use serde::Serialize;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ClassifyDeckArg {
    /// Comma-separated list of eight card identifiers
    #[arg(long)]
    cards: String,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ClassifyReport {
    deck: Vec<CardId>,
    classification: Classification,
}

pub(crate) fn run(arg: &ClassifyDeckArg) -> anyhow::Result<()> {
    let deck = parse_deck(&arg.cards)?;
    let classification = classify_archetype(
        &deck,
        &ArchetypeDatabase::builtin(),
        &CardDatabase::builtin(),
        &MatcherConfig::default(),
    );
    let report = ClassifyReport {
        deck,
        classification,
    };
    Output::from_output_path(arg.output.clone()).save_json(&report)
}

/// Splits the `--cards` argument into card identifiers.
///
/// Only the count is checked here; unknown identifiers and duplicates
/// are the classifier's concern and degrade to an unknown archetype.
fn parse_deck(cards: &str) -> anyhow::Result<Vec<CardId>> {
    let deck: Vec<CardId> = cards
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(CardId::from)
        .collect();
    ensure!(
        deck.len() == DECK_SIZE,
        "expected {DECK_SIZE} card identifiers, got {}",
        deck.len()
    );
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_deck_trims_and_counts() {
        let deck = parse_deck("a, b,c ,d,e,f,g,h").unwrap();
        assert_eq!(deck.len(), 8);
        assert_eq!(deck[1], CardId::from("b"));
    }

    #[test]
    fn parse_deck_rejects_wrong_count() {
        assert!(parse_deck("a,b,c").is_err());
        assert!(parse_deck("").is_err());
    }
}
