//! Static card reference data.
//!
//! The card database maps opaque [`CardId`]s to elixir cost, rarity, and
//! card type. It is loaded once at process start (from the upstream API
//! in production, or [`CardDatabase::builtin`] for the seed set) and
//! treated as immutable for the remainder of the process.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::battle::CardId;

/// Card rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Broad card category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Troop,
    Spell,
    Building,
}

/// One card's static properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub elixir_cost: u8,
    pub rarity: Rarity,
    pub card_type: CardType,
}

/// Immutable card lookup table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardDatabase {
    cards: BTreeMap<CardId, Card>,
}

impl CardDatabase {
    /// Builds a database from an arbitrary card list.
    pub fn new<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self {
            cards: cards
                .into_iter()
                .map(|card| (card.id.clone(), card))
                .collect(),
        }
    }

    /// The built-in seed set used when no upstream database is supplied.
    #[must_use]
    pub fn builtin() -> Self {
        let seed: &[(&str, u8, Rarity, CardType)] = &[
            ("hog-rider", 4, Rarity::Rare, CardType::Troop),
            ("royal-giant", 6, Rarity::Common, CardType::Troop),
            ("giant", 5, Rarity::Rare, CardType::Troop),
            ("balloon", 5, Rarity::Epic, CardType::Troop),
            ("fireball", 4, Rarity::Rare, CardType::Spell),
            ("zap", 2, Rarity::Common, CardType::Spell),
            ("lightning", 6, Rarity::Epic, CardType::Spell),
            ("wizard", 5, Rarity::Rare, CardType::Troop),
            ("musketeer", 4, Rarity::Rare, CardType::Troop),
            ("valkyrie", 4, Rarity::Rare, CardType::Troop),
            ("cannon", 3, Rarity::Common, CardType::Building),
            ("tesla", 4, Rarity::Common, CardType::Building),
            ("ice-spirit", 1, Rarity::Common, CardType::Troop),
            ("skeletons", 1, Rarity::Common, CardType::Troop),
        ];
        Self::new(seed.iter().map(|&(id, elixir_cost, rarity, card_type)| {
            Card {
                id: CardId::from(id),
                elixir_cost,
                rarity,
                card_type,
            }
        }))
    }

    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Mean elixir cost over the cards of `deck` known to the database.
    ///
    /// Returns `None` when none of the identifiers are known, so the
    /// caller can fall back to neutral classification instead of scoring
    /// an all-unknown deck as zero-cost.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn average_elixir(&self, deck: &[CardId]) -> Option<f32> {
        let costs: Vec<u8> = deck
            .iter()
            .filter_map(|id| self.get(id))
            .map(|card| card.elixir_cost)
            .collect();
        if costs.is_empty() {
            return None;
        }
        let total: u32 = costs.iter().copied().map(u32::from).sum();
        Some(total as f32 / costs.len() as f32)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_database_knows_its_seed_cards() {
        let db = CardDatabase::builtin();
        assert!(db.contains(&CardId::from("hog-rider")));
        assert_eq!(db.get(&CardId::from("zap")).unwrap().elixir_cost, 2);
        assert!(!db.contains(&CardId::from("mystery-card")));
    }

    #[test]
    fn average_elixir_ignores_unknown_cards() {
        let db = CardDatabase::builtin();
        let deck = [
            CardId::from("zap"),        // 2
            CardId::from("fireball"),   // 4
            CardId::from("not-a-card"), // skipped
        ];
        assert_eq!(db.average_elixir(&deck), Some(3.0));
    }

    #[test]
    fn average_elixir_of_fully_unknown_deck_is_none() {
        let db = CardDatabase::builtin();
        let deck = [CardId::from("a"), CardId::from("b")];
        assert_eq!(db.average_elixir(&deck), None);
    }
}
