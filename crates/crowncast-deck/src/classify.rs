//! Deck-to-archetype classification.

use std::collections::BTreeSet;

use crowncast_model::{CardDatabase, CardId, DECK_SIZE};
use serde::{Deserialize, Serialize};

use crate::{archetype::ArchetypeDatabase, config::MatcherConfig};

/// Result of classifying one deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    /// The deck matched a known archetype with similarity at or above
    /// the floor.
    Matched {
        archetype: String,
        /// Jaccard similarity to the archetype's representative card
        /// set, in `[0, 1]`.
        similarity: f32,
        average_elixir: f32,
    },
    /// No archetype matched well enough, the deck was malformed, or it
    /// contained cards the database does not know.
    Unknown,
}

impl Classification {
    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

/// Classifies a deck against the known archetypes.
///
/// Classification is total and never fails: a deck with fewer than
/// eight distinct cards, with cards missing from `cards`, or without a
/// sufficiently similar archetype classifies as
/// [`Classification::Unknown`].
///
/// The best archetype is the one with the highest Jaccard similarity
/// between the deck and its representative card set; on equal
/// similarity the archetype whose average elixir is closest to the
/// deck's wins, so the result is independent of database ordering.
#[must_use]
pub fn classify_archetype(
    deck: &[CardId],
    archetypes: &ArchetypeDatabase,
    cards: &CardDatabase,
    config: &MatcherConfig,
) -> Classification {
    let deck_set: BTreeSet<&CardId> = deck.iter().collect();
    if deck_set.len() != DECK_SIZE {
        return Classification::Unknown;
    }
    if !deck.iter().all(|id| cards.contains(id)) {
        return Classification::Unknown;
    }
    let Some(average_elixir) = cards.average_elixir(deck) else {
        return Classification::Unknown;
    };

    let mut best: Option<(&str, f32, f32)> = None;
    for archetype in archetypes.iter() {
        let similarity = jaccard(&deck_set, &archetype.representative_cards);
        let elixir_distance = (average_elixir - archetype.average_elixir).abs();
        let better = match best {
            None => true,
            Some((_, best_similarity, best_distance)) => {
                similarity > best_similarity
                    || (similarity == best_similarity && elixir_distance < best_distance)
            }
        };
        if better {
            best = Some((&archetype.name, similarity, elixir_distance));
        }
    }

    match best {
        Some((name, similarity, _)) if similarity >= config.similarity_floor => {
            Classification::Matched {
                archetype: name.to_owned(),
                similarity,
                average_elixir,
            }
        }
        _ => Classification::Unknown,
    }
}

#[expect(clippy::cast_precision_loss)]
fn jaccard(deck: &BTreeSet<&CardId>, representative: &BTreeSet<CardId>) -> f32 {
    let intersection = deck
        .iter()
        .filter(|id| representative.contains(**id))
        .count();
    let union = deck.len() + representative.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f32 / union as f32
}
