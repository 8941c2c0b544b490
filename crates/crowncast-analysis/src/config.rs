//! Tunable thresholds for segmentation and factor derivation.
//!
//! All values are fixed configuration, not learned. `Default` carries
//! the documented defaults; callers construct custom configs only when
//! experimenting with thresholds.

use chrono::TimeDelta;

/// Thresholds for session segmentation and end-reason classification.
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    /// Inactivity gap that closes a session.
    pub gap: TimeDelta,
    /// Trailing consecutive losses that classify a session end as
    /// frustrated.
    pub frustration_loss_streak: u32,
    /// Trailing consecutive wins that classify a session end as
    /// satisfied.
    pub satisfaction_win_streak: u32,
    /// Session duration beyond which an otherwise unclassified end is
    /// attributed to running out of time.
    pub long_session: TimeDelta,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            gap: TimeDelta::minutes(30),
            frustration_loss_streak: 3,
            satisfaction_win_streak: 2,
            long_session: TimeDelta::minutes(90),
        }
    }
}

/// Thresholds for retention-factor derivation.
#[derive(Debug, Clone)]
pub struct FactorConfig {
    /// Minimum battle count for a confident result; below this the
    /// engine returns neutral factors flagged as low-confidence.
    pub min_battles: usize,
    /// How soon after a frustrated session the next session must start
    /// to count as a comeback.
    pub comeback_window: TimeDelta,
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            min_battles: 10,
            comeback_window: TimeDelta::hours(48),
        }
    }
}
