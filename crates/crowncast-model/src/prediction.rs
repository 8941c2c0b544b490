//! Retention prediction output.
//!
//! [`RetentionPrediction`] is produced once per prediction call and is
//! immutable. The [`Signal`] map records every named contribution to the
//! outcome decision so the recommendation stays explainable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Recommended outcome for the player's next match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[display("win")]
    Win,
    #[display("loss")]
    Loss,
}

/// Named signals contributing to the outcome decision.
///
/// Positive contributions push toward recommending a win, negative
/// toward a loss.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    #[display("recent_satisfaction")]
    RecentSatisfaction,
    #[display("end_reason")]
    EndReason,
    #[display("win_rate_band")]
    WinRateBand,
    #[display("comeback_potential")]
    ComebackPotential,
    #[display("loss_tolerance")]
    LossTolerance,
    #[display("churn_risk")]
    ChurnRisk,
    #[display("new_player")]
    NewPlayer,
}

/// Prediction of how to keep the player playing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionPrediction {
    /// Outcome to present in the next match.
    pub optimal_outcome: Outcome,
    /// Confidence in the recommendation, in `[0, 1]`.
    pub confidence: f32,
    /// Probability the player starts another session today, in `[0, 1]`.
    pub next_session_probability: f32,
    /// Probability the player plays tomorrow, in `[0, 1]`.
    pub next_day_probability: f32,
    /// Probability the player plays within the week, in `[0, 1]`.
    pub next_week_probability: f32,
    /// Signed contribution of each signal to the decision score.
    pub factors: BTreeMap<Signal, f32>,
    /// Human-readable summary of the recommended action.
    pub recommended_action: String,
}
