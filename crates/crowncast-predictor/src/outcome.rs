//! Next-match outcome decision.
//!
//! Computes a total score from named, signed signal contributions and
//! recommends the outcome for the player's next match:
//!
//! - **Win-rate band**: recent win rate below the engagement sweet spot
//!   pushes toward a win (+0.6), above it toward a loss (-0.4), inside
//!   it slightly toward a win (+0.1).
//! - **End reason**: a frustrated last session pushes strongly toward a
//!   win (+0.8); a satisfied one tolerates a loss (-0.2).
//! - **Loss tolerance**: a trailing loss streak at or over the player's
//!   tolerance pushes strongly toward a win (+0.7); otherwise each
//!   trailing loss nudges toward a loss (-0.1 each).
//! - **Recent satisfaction**, **comeback potential**, **churn risk**:
//!   smaller corrections in the same positive-means-win convention.
//!
//! `optimal_outcome` is `win` above +0.2, `loss` below -0.2, and `win`
//! on a tie — the retention-positive default. Confidence grows with the
//! score magnitude and is capped at a low ceiling when the history is
//! below the minimum battle count.

use std::collections::BTreeMap;

use crowncast_model::{
    Outcome, PlayerProfile, RetentionPrediction, SessionEndReason, SessionMetrics, Signal,
};

use crate::config::OutcomeConfig;

/// Largest achievable total-score magnitude, used to normalize
/// confidence.
const MAX_SCORE: f32 = 2.95;

/// Predicts the optimal outcome of the player's next match.
///
/// Never fails: a profile with no session history gets the fixed
/// new-player recommendation, and thin history only caps the
/// confidence.
#[must_use]
pub fn predict_optimal_outcome(
    profile: &PlayerProfile,
    config: &OutcomeConfig,
) -> RetentionPrediction {
    let Some(last_session) = profile.last_session.as_ref() else {
        return new_player_prediction(profile, config);
    };

    let mut factors = BTreeMap::new();
    factors.insert(
        Signal::RecentSatisfaction,
        (0.5 - last_session.satisfaction_score) * 0.4,
    );
    factors.insert(Signal::EndReason, end_reason_push(last_session.end_reason));
    factors.insert(
        Signal::WinRateBand,
        win_rate_band_push(profile.recent_win_rate, config),
    );
    factors.insert(
        Signal::LossTolerance,
        loss_tolerance_push(last_session, profile.factors.loss_tolerance),
    );
    factors.insert(
        Signal::ComebackPotential,
        (0.5 - profile.factors.comeback_potential) * 0.3,
    );
    factors.insert(Signal::ChurnRisk, profile.churn_risk / 100.0 * 0.5);

    let total_score: f32 = factors.values().sum();

    let optimal_outcome = if total_score < -config.decision_margin {
        Outcome::Loss
    } else {
        // Positive score or a tie inside the margin: ties favor the
        // retention-positive outcome.
        Outcome::Win
    };
    let mut confidence = if total_score.abs() > config.decision_margin {
        (0.5 + total_score.abs() / MAX_SCORE).min(0.95)
    } else {
        0.5
    };
    if profile.total_battles < config.min_battles {
        confidence = confidence.min(config.low_confidence_cap);
    }

    let (next_session, next_day, next_week) =
        return_probabilities(profile.churn_risk, last_session.satisfaction_score);

    RetentionPrediction {
        optimal_outcome,
        confidence,
        next_session_probability: next_session,
        next_day_probability: next_day,
        next_week_probability: next_week,
        factors,
        recommended_action: recommended_action(optimal_outcome, confidence),
    }
}

fn end_reason_push(end_reason: SessionEndReason) -> f32 {
    match end_reason {
        SessionEndReason::Frustrated => 0.8,
        SessionEndReason::Satisfied => -0.2,
        SessionEndReason::TimeLimit | SessionEndReason::Unknown => 0.0,
    }
}

fn win_rate_band_push(recent_win_rate: f32, config: &OutcomeConfig) -> f32 {
    if recent_win_rate < config.sweet_spot_low {
        0.6
    } else if recent_win_rate > config.sweet_spot_high {
        -0.4
    } else {
        0.1
    }
}

#[expect(clippy::cast_precision_loss)]
fn loss_tolerance_push(last_session: &SessionMetrics, loss_tolerance: u32) -> f32 {
    if last_session.trailing_loss_streak >= loss_tolerance {
        0.7
    } else {
        -0.1 * last_session.trailing_loss_streak as f32
    }
}

/// Heuristic return probabilities, each a monotonically decreasing
/// transform of churn risk, independently bounded to `[0, 1]`.
fn return_probabilities(churn_risk: f32, satisfaction: f32) -> (f32, f32, f32) {
    let base = 1.0 - churn_risk / 100.0;
    let satisfaction_multiplier = 1.0 + (satisfaction - 0.5) * 0.4;
    let next_session = (base * satisfaction_multiplier * 0.8).clamp(0.0, 0.95);
    let next_day = (base * 0.7).clamp(0.0, 0.9);
    let next_week = (base * 0.9).clamp(0.0, 0.95);
    (next_session, next_day, next_week)
}

fn recommended_action(outcome: Outcome, confidence: f32) -> String {
    let action = match (outcome, confidence > 0.8) {
        (Outcome::Win, true) => "Provide a strong positive experience; the player needs a confidence boost",
        (Outcome::Win, false) => "Provide a slight advantage to maintain engagement without being obvious",
        (Outcome::Loss, true) => "Provide an engaging challenge; the player can absorb a defeat",
        (Outcome::Loss, false) => "Provide a close competitive match to maintain tension",
    };
    action.to_owned()
}

fn new_player_prediction(profile: &PlayerProfile, config: &OutcomeConfig) -> RetentionPrediction {
    let mut confidence: f32 = 0.6;
    if profile.total_battles < config.min_battles {
        confidence = confidence.min(config.low_confidence_cap);
    }
    RetentionPrediction {
        optimal_outcome: Outcome::Win,
        confidence,
        next_session_probability: 0.8,
        next_day_probability: 0.7,
        next_week_probability: 0.9,
        factors: BTreeMap::from([(Signal::NewPlayer, 1.0)]),
        recommended_action: "Provide a positive first experience".to_owned(),
    }
}
