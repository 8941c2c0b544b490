//! Raw battle records as delivered by the data-fetch layer.
//!
//! A [`BattleRecord`] is one finished match. The pipeline expects the
//! battle list for one player to be ordered by timestamp ascending and
//! validates that ordering once, up front, with
//! [`validate_battle_order`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 8;

/// Opaque card identifier.
///
/// Card identifiers come from the upstream card database; the pipeline
/// never interprets them beyond equality and ordering.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct CardId(pub String);

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// One finished match, immutable once produced by the data-fetch layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    /// When the battle finished.
    pub timestamp: DateTime<Utc>,
    /// Whether the player won.
    pub won: bool,
    /// Crowns taken by the player.
    pub crowns_for: u8,
    /// Crowns taken by the opponent.
    pub crowns_against: u8,
    /// Signed trophy delta for this battle (zero in tournaments).
    pub trophy_change: i32,
    /// The eight cards the player brought to this battle.
    pub deck_cards: [CardId; DECK_SIZE],
    /// Whether this was a tournament battle.
    pub is_tournament: bool,
}

impl BattleRecord {
    /// Crown differential, positive when the player out-crowned the opponent.
    #[must_use]
    pub fn crown_difference(&self) -> i16 {
        i16::from(self.crowns_for) - i16::from(self.crowns_against)
    }
}

/// Checks that `battles` is sorted by timestamp ascending.
///
/// Equal adjacent timestamps are accepted; the segmenter treats them as
/// a zero-length gap. An empty or single-element list is trivially
/// ordered.
pub fn validate_battle_order(battles: &[BattleRecord]) -> Result<(), ValidationError> {
    for (index, pair) in battles.windows(2).enumerate() {
        if pair[1].timestamp < pair[0].timestamp {
            return Err(ValidationError::TimestampsNotAscending { index: index + 1 });
        }
    }
    Ok(())
}
