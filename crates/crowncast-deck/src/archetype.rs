//! Static archetype reference data.
//!
//! An archetype is a named category of deck compositions sharing a core
//! card set and strategy. The database is loaded once (from upstream
//! meta statistics in production, or [`ArchetypeDatabase::builtin`] for
//! the seed set) and read-only afterwards.

use std::collections::BTreeSet;

use crowncast_model::{CardId, SkillLevel};
use serde::{Deserialize, Serialize};

/// One known deck archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckArchetype {
    /// Archetype name, unique within the database.
    pub name: String,
    /// The card set that defines the archetype.
    pub representative_cards: BTreeSet<CardId>,
    /// Typical average elixir cost of the archetype.
    pub average_elixir: f32,
    /// Minimum skill bracket required to pilot the archetype.
    pub min_skill: SkillLevel,
}

/// Immutable archetype lookup table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchetypeDatabase {
    archetypes: Vec<DeckArchetype>,
}

impl ArchetypeDatabase {
    #[must_use]
    pub fn new(archetypes: Vec<DeckArchetype>) -> Self {
        Self { archetypes }
    }

    /// The built-in seed archetypes, composed from the built-in card
    /// database.
    #[must_use]
    pub fn builtin() -> Self {
        fn archetype(
            name: &str,
            cards: [&str; 8],
            average_elixir: f32,
            min_skill: SkillLevel,
        ) -> DeckArchetype {
            DeckArchetype {
                name: name.to_owned(),
                representative_cards: cards.iter().copied().map(CardId::from).collect(),
                average_elixir,
                min_skill,
            }
        }

        Self::new(vec![
            archetype(
                "hog-cycle",
                [
                    "hog-rider",
                    "ice-spirit",
                    "skeletons",
                    "cannon",
                    "musketeer",
                    "fireball",
                    "zap",
                    "valkyrie",
                ],
                2.875,
                SkillLevel::Intermediate,
            ),
            archetype(
                "royal-giant",
                [
                    "royal-giant",
                    "lightning",
                    "wizard",
                    "valkyrie",
                    "musketeer",
                    "zap",
                    "cannon",
                    "ice-spirit",
                ],
                3.875,
                SkillLevel::Beginner,
            ),
            archetype(
                "giant-beatdown",
                [
                    "giant",
                    "wizard",
                    "musketeer",
                    "valkyrie",
                    "fireball",
                    "zap",
                    "tesla",
                    "skeletons",
                ],
                3.625,
                SkillLevel::Beginner,
            ),
            archetype(
                "lavaloon",
                [
                    "balloon",
                    "lightning",
                    "wizard",
                    "valkyrie",
                    "tesla",
                    "zap",
                    "ice-spirit",
                    "fireball",
                ],
                3.875,
                SkillLevel::Advanced,
            ),
        ])
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DeckArchetype> {
        self.archetypes.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeckArchetype> {
        self.archetypes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crowncast_model::CardDatabase;

    use super::*;

    #[test]
    fn builtin_archetypes_use_known_cards() {
        let cards = CardDatabase::builtin();
        let archetypes = ArchetypeDatabase::builtin();
        assert!(!archetypes.is_empty());
        for archetype in archetypes.iter() {
            assert_eq!(archetype.representative_cards.len(), 8, "{}", archetype.name);
            for card in &archetype.representative_cards {
                assert!(cards.contains(card), "{} uses unknown {card}", archetype.name);
            }
        }
    }

    #[test]
    fn builtin_elixir_matches_the_card_database() {
        let cards = CardDatabase::builtin();
        for archetype in ArchetypeDatabase::builtin().iter() {
            let deck: Vec<CardId> = archetype.representative_cards.iter().cloned().collect();
            let average = cards.average_elixir(&deck).unwrap();
            assert!(
                (average - archetype.average_elixir).abs() < 1e-6,
                "{}: {average} != {}",
                archetype.name,
                archetype.average_elixir
            );
        }
    }
}
