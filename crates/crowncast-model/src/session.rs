//! Play-session metrics derived from battle history.
//!
//! A session is a contiguous run of battles with no inactivity gap
//! exceeding the segmenter's threshold. [`SessionMetrics`] is derived,
//! recomputed fresh on every analysis, and never mutated after creation.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Why a session most likely ended.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum SessionEndReason {
    /// Ended on a consecutive-win streak at or above the satisfaction
    /// threshold.
    Satisfied,
    /// Ended on a consecutive-loss streak at or above the frustration
    /// threshold.
    Frustrated,
    /// Ran longer than the long-session threshold without a qualifying
    /// streak.
    TimeLimit,
    /// No pattern matched.
    Unknown,
}

/// Metrics for one contiguous block of battles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMetrics {
    /// Position of this session in the player's history, starting at 0.
    pub session_id: usize,
    /// Timestamp of the first battle in the session.
    pub start_time: DateTime<Utc>,
    /// Timestamp of the last battle in the session.
    pub end_time: DateTime<Utc>,
    /// Number of battles in the session.
    pub battle_count: usize,
    /// Battles won.
    pub wins: usize,
    /// Battles lost.
    pub losses: usize,
    /// Sum of trophy deltas over the session.
    pub net_trophy_change: i32,
    /// Consecutive losses at the very end of the session.
    pub trailing_loss_streak: u32,
    /// Classified end reason.
    pub end_reason: SessionEndReason,
    /// Estimated player satisfaction, in `[0, 1]`.
    pub satisfaction_score: f32,
}

impl SessionMetrics {
    /// Wall-clock span from first to last battle.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }

    /// Session duration in minutes.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn duration_minutes(&self) -> f32 {
        self.duration().num_seconds() as f32 / 60.0
    }

    /// Fraction of battles won, in `[0, 1]`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn win_rate(&self) -> f32 {
        if self.battle_count == 0 {
            return 0.0;
        }
        self.wins as f32 / self.battle_count as f32
    }
}
