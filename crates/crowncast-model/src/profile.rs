//! Player-level aggregates: metadata, retention factors, and the profile
//! summary returned to the caller.

use serde::{Deserialize, Serialize};

use crate::{
    battle::{CardId, DECK_SIZE},
    session::SessionMetrics,
};

/// Skill bracket derived from trophy count.
///
/// Ordered so that skill requirements can be compared directly
/// (`Beginner < Intermediate < Advanced < Expert`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Classifies a trophy count into a skill bracket.
    #[must_use]
    pub fn from_trophies(trophies: u32) -> Self {
        match trophies {
            0..2000 => Self::Beginner,
            2000..4000 => Self::Intermediate,
            4000..6000 => Self::Advanced,
            _ => Self::Expert,
        }
    }
}

/// Play style derived from average elixir cost and crown differential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayStyle {
    Aggressive,
    Defensive,
    Balanced,
    Control,
}

/// Player metadata from the upstream API, used only to seed skill and
/// style classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMeta {
    /// Opaque player identifier.
    pub player_tag: String,
    /// Current ladder trophy count.
    pub trophies: u32,
    /// Account experience level.
    pub experience_level: u32,
    /// Clan tag, if the player is in a clan.
    pub clan: Option<String>,
    /// The deck currently equipped, if known.
    pub current_deck: Option<[CardId; DECK_SIZE]>,
}

/// Stable behavioral factors derived from sessions and battles.
///
/// A pure function of the session list and raw battle history; fully
/// recomputed on each analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionFactors {
    /// Consecutive losses the player has been observed to survive
    /// without the session ending in frustration.
    pub loss_tolerance: u32,
    /// Likelihood of returning to play after a frustrated session,
    /// in `[0, 1]`.
    pub comeback_potential: f32,
    /// One minus the normalized variance of per-session win rate,
    /// in `[0, 1]`. Higher means more stable performance.
    pub win_rate_consistency: f32,
    /// Robust central tendency (median) of session durations, minutes.
    pub preferred_session_length_min: f32,
    /// Weighted combination of session frequency, battles per session,
    /// and win-rate consistency, in `[0, 1]`.
    pub engagement_score: f32,
    /// False when the history was below the minimum battle count and
    /// the factors are neutral defaults rather than derived values.
    pub confident: bool,
}

impl RetentionFactors {
    /// Neutral defaults for players with insufficient history.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            loss_tolerance: 3,
            comeback_potential: 0.5,
            win_rate_consistency: 0.5,
            preferred_session_length_min: 15.0,
            engagement_score: 0.5,
            confident: false,
        }
    }
}

/// Read-only per-player summary returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Opaque player identifier.
    pub player_tag: String,
    /// Skill bracket from trophies.
    pub skill_level: SkillLevel,
    /// Style from average elixir cost and crown differential.
    pub play_style: PlayStyle,
    /// Churn-risk estimate in `[0, 100]`, higher means more likely to
    /// stop playing.
    pub churn_risk: f32,
    /// Derived behavioral factors.
    pub factors: RetentionFactors,
    /// The most recent session, if any battles were recorded.
    pub last_session: Option<SessionMetrics>,
    /// Total battles analyzed.
    pub total_battles: usize,
    /// Win rate over the full history, in `[0, 1]`.
    pub overall_win_rate: f32,
    /// Win rate over the recent window, in `[0, 1]`.
    pub recent_win_rate: f32,
}
