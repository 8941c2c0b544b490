//! Churn-risk scoring.
//!
//! Churn risk is a weighted sum of signed signals, each clipped to
//! `[0, 1]` before weighting, mapped into `[0, 100]`:
//!
//! ```text
//! risk = 100 · clamp( w_f · frustration
//!                   + w_c · (1 - comeback_potential)
//!                   + w_e · (1 - engagement_score)
//!                   - w_s · stability_relief )
//! ```
//!
//! The relief term captures the "sweet spot" effect: stable performance
//! (`win_rate_consistency` high) at a moderate overall win rate retains
//! players, so it subtracts from the risk.

use crowncast_model::{RetentionFactors, SessionMetrics};

use crate::config::ChurnWeights;

/// Win rate at which the stability relief peaks.
const SWEET_SPOT_CENTER: f32 = 0.55;
/// Win-rate distance from the center at which the relief reaches zero.
const RELIEF_RANGE: f32 = 0.35;

/// Computes the churn-risk score in `[0, 100]`.
///
/// `last_session` is the player's most recent session, if any;
/// `overall_win_rate` is the win rate over the full history in `[0, 1]`.
#[must_use]
pub fn churn_risk(
    factors: &RetentionFactors,
    last_session: Option<&SessionMetrics>,
    overall_win_rate: f32,
    weights: &ChurnWeights,
) -> f32 {
    let frustration = last_session.map_or(0.5, |session| {
        if session.end_reason.is_frustrated() {
            1.0
        } else {
            (1.0 - session.satisfaction_score).clamp(0.0, 1.0)
        }
    });
    let comeback = (1.0 - factors.comeback_potential).clamp(0.0, 1.0);
    let engagement = (1.0 - factors.engagement_score).clamp(0.0, 1.0);

    let proximity = (1.0 - (overall_win_rate - SWEET_SPOT_CENTER).abs() / RELIEF_RANGE)
        .clamp(0.0, 1.0);
    let relief = (factors.win_rate_consistency * proximity).clamp(0.0, 1.0);

    let score = weights.frustration * frustration
        + weights.comeback * comeback
        + weights.engagement * engagement
        - weights.stability_relief * relief;
    score.clamp(0.0, 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeDelta, Utc};
    use crowncast_model::SessionEndReason;

    use super::*;

    fn session(end_reason: SessionEndReason, satisfaction_score: f32) -> SessionMetrics {
        let start = DateTime::parse_from_rfc3339("2024-05-01T18:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        SessionMetrics {
            session_id: 0,
            start_time: start,
            end_time: start + TimeDelta::minutes(25),
            battle_count: 6,
            wins: 3,
            losses: 3,
            net_trophy_change: 0,
            trailing_loss_streak: 0,
            end_reason,
            satisfaction_score,
        }
    }

    fn engaged_factors() -> RetentionFactors {
        RetentionFactors {
            loss_tolerance: 4,
            comeback_potential: 0.9,
            win_rate_consistency: 0.9,
            preferred_session_length_min: 25.0,
            engagement_score: 0.9,
            confident: true,
        }
    }

    fn fragile_factors() -> RetentionFactors {
        RetentionFactors {
            loss_tolerance: 1,
            comeback_potential: 0.1,
            win_rate_consistency: 0.2,
            preferred_session_length_min: 8.0,
            engagement_score: 0.1,
            confident: true,
        }
    }

    #[test]
    fn risk_stays_within_bounds() {
        let weights = ChurnWeights::default();
        for factors in [engaged_factors(), fragile_factors()] {
            for rate in [0.0, 0.55, 1.0] {
                let risk = churn_risk(&factors, None, rate, &weights);
                assert!((0.0..=100.0).contains(&risk), "risk {risk} out of bounds");
            }
        }
    }

    #[test]
    fn engaged_stable_player_has_low_risk() {
        let last = session(SessionEndReason::Satisfied, 0.85);
        let risk = churn_risk(&engaged_factors(), Some(&last), 0.55, &ChurnWeights::default());
        assert!(risk < 20.0, "expected low risk, got {risk}");
    }

    #[test]
    fn frustrated_disengaged_player_has_high_risk() {
        let last = session(SessionEndReason::Frustrated, 0.1);
        let risk = churn_risk(&fragile_factors(), Some(&last), 0.2, &ChurnWeights::default());
        assert!(risk > 70.0, "expected high risk, got {risk}");
    }

    #[test]
    fn frustration_raises_risk_over_a_satisfied_ending() {
        let factors = engaged_factors();
        let weights = ChurnWeights::default();
        let satisfied = session(SessionEndReason::Satisfied, 0.85);
        let frustrated = session(SessionEndReason::Frustrated, 0.1);
        let low = churn_risk(&factors, Some(&satisfied), 0.55, &weights);
        let high = churn_risk(&factors, Some(&frustrated), 0.55, &weights);
        assert!(high > low);
    }

    #[test]
    fn extreme_win_rate_cancels_stability_relief() {
        let factors = engaged_factors();
        let weights = ChurnWeights::default();
        let moderate = churn_risk(&factors, None, 0.55, &weights);
        let extreme = churn_risk(&factors, None, 1.0, &weights);
        assert!(extreme >= moderate);
    }
}
