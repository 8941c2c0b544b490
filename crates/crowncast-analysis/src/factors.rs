//! Retention-factor derivation from sessions and raw battles.
//!
//! The factor engine reduces a player's session history to the stable
//! behavioral measures consumed by the churn and outcome predictors.
//! Sessions are the unit of evidence: loss tolerance, comeback
//! potential, and consistency are all derived per session, not per
//! battle, so a single bad run does not dominate the estimate.
//!
//! Below [`FactorConfig::min_battles`] the engine does not fail; it
//! returns [`RetentionFactors::neutral`] with `confident = false` and
//! leaves surfacing that to the caller.

use crowncast_model::{BattleRecord, RetentionFactors, SessionMetrics};
use crowncast_stats::{descriptive::DescriptiveStats, streak::StreakScan};

use crate::config::FactorConfig;

/// Derives one [`RetentionFactors`] instance from a battle list and its
/// session segmentation.
///
/// `sessions` must be the segmentation of `battles` (same order, same
/// partition); the engine walks the two in lockstep to recover each
/// session's outcome sequence without re-scanning.
///
/// # Panics
///
/// Panics if the session battle counts do not sum to the battle list
/// length.
#[must_use]
pub fn derive_retention_factors(
    battles: &[BattleRecord],
    sessions: &[SessionMetrics],
    config: &FactorConfig,
) -> RetentionFactors {
    if battles.len() < config.min_battles || sessions.is_empty() {
        return RetentionFactors::neutral();
    }

    let session_scans = scan_sessions(battles, sessions);

    RetentionFactors {
        loss_tolerance: loss_tolerance(sessions, &session_scans),
        comeback_potential: comeback_potential(sessions, config),
        win_rate_consistency: win_rate_consistency(sessions),
        preferred_session_length_min: preferred_session_length(sessions),
        engagement_score: engagement_score(sessions),
        confident: true,
    }
}

/// Streak scan per session, recovered by walking the battle list in
/// lockstep with the session partition.
fn scan_sessions(battles: &[BattleRecord], sessions: &[SessionMetrics]) -> Vec<StreakScan> {
    let counted: usize = sessions.iter().map(|s| s.battle_count).sum();
    assert_eq!(
        counted,
        battles.len(),
        "sessions must partition the battle list"
    );

    let mut scans = Vec::with_capacity(sessions.len());
    let mut offset = 0;
    for session in sessions {
        let slice = &battles[offset..offset + session.battle_count];
        scans.push(StreakScan::from_outcomes(slice.iter().map(|b| b.won)));
        offset += session.battle_count;
    }
    scans
}

/// Maximum consecutive-loss streak survived without the session ending
/// in frustration.
///
/// Sessions that ended frustrated are excluded: the streak that ends a
/// session is evidence of the limit, not of tolerance. Falls back to 1
/// when no surviving streak was ever observed.
fn loss_tolerance(sessions: &[SessionMetrics], scans: &[StreakScan]) -> u32 {
    sessions
        .iter()
        .zip(scans)
        .filter(|(session, _)| !session.end_reason.is_frustrated())
        .map(|(_, scan)| scan.max_loss_streak)
        .max()
        .filter(|&streak| streak > 0)
        .unwrap_or(1)
}

/// Fraction of frustrated sessions followed by another session within
/// the comeback window.
///
/// A player with no frustrated sessions was never tested, so the
/// potential defaults to a neutral 0.5.
#[expect(clippy::cast_precision_loss)]
fn comeback_potential(sessions: &[SessionMetrics], config: &FactorConfig) -> f32 {
    let mut frustrated = 0_usize;
    let mut returned = 0_usize;
    for (index, session) in sessions.iter().enumerate() {
        if !session.end_reason.is_frustrated() {
            continue;
        }
        frustrated += 1;
        if let Some(next) = sessions.get(index + 1)
            && next.start_time - session.end_time <= config.comeback_window
        {
            returned += 1;
        }
    }
    if frustrated == 0 {
        return 0.5;
    }
    returned as f32 / frustrated as f32
}

/// One minus the normalized variance of per-session win rate.
///
/// Win rates live in `[0, 1]`, so their variance is at most 0.25; the
/// normalization maps maximal instability to 0 and perfect stability
/// to 1.
fn win_rate_consistency(sessions: &[SessionMetrics]) -> f32 {
    const MAX_VARIANCE: f32 = 0.25;
    let Some(stats) = DescriptiveStats::new(sessions.iter().map(SessionMetrics::win_rate)) else {
        return 0.5;
    };
    (1.0 - stats.variance / MAX_VARIANCE).clamp(0.0, 1.0)
}

/// Median session duration in minutes.
fn preferred_session_length(sessions: &[SessionMetrics]) -> f32 {
    DescriptiveStats::new(sessions.iter().map(SessionMetrics::duration_minutes))
        .map_or(0.0, |stats| stats.median)
}

/// Weighted combination of session frequency, battles per session, and
/// win-rate consistency, normalized to `[0, 1]`.
#[expect(clippy::cast_precision_loss)]
fn engagement_score(sessions: &[SessionMetrics]) -> f32 {
    const FREQUENCY_WEIGHT: f32 = 0.4;
    const VOLUME_WEIGHT: f32 = 0.3;
    const CONSISTENCY_WEIGHT: f32 = 0.3;
    /// Battles per session at which the volume component saturates.
    const SATURATING_BATTLES: f32 = 10.0;
    /// Average gap (hours) at which the frequency component reaches 0.
    const STALE_GAP_HOURS: f32 = 24.0;

    let frequency = if sessions.len() < 2 {
        0.5
    } else {
        let total_gap_hours: f32 = sessions
            .windows(2)
            .map(|pair| (pair[1].start_time - pair[0].end_time).num_seconds() as f32 / 3600.0)
            .sum();
        let avg_gap_hours = total_gap_hours / (sessions.len() - 1) as f32;
        (1.0 - avg_gap_hours / STALE_GAP_HOURS).clamp(0.0, 1.0)
    };

    let avg_battles = sessions.iter().map(|s| s.battle_count).sum::<usize>() as f32
        / sessions.len() as f32;
    let volume = (avg_battles / SATURATING_BATTLES).clamp(0.0, 1.0);

    let score = FREQUENCY_WEIGHT * frequency
        + VOLUME_WEIGHT * volume
        + CONSISTENCY_WEIGHT * win_rate_consistency(sessions);
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeDelta, Utc};
    use crowncast_model::CardId;

    use crate::{config::SegmentConfig, segmenter::segment_sessions};

    use super::*;

    fn base_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T18:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn battles(history: &[(i64, bool)]) -> Vec<BattleRecord> {
        history
            .iter()
            .map(|&(minute, won)| BattleRecord {
                timestamp: base_time() + TimeDelta::minutes(minute),
                won,
                crowns_for: u8::from(won),
                crowns_against: u8::from(!won),
                trophy_change: if won { 30 } else { -30 },
                deck_cards: std::array::from_fn(|i| CardId::from(format!("card-{i}"))),
                is_tournament: false,
            })
            .collect()
    }

    fn derive(history: &[(i64, bool)]) -> RetentionFactors {
        let battles = battles(history);
        let sessions = segment_sessions(&battles, &SegmentConfig::default()).unwrap();
        derive_retention_factors(&battles, &sessions, &FactorConfig::default())
    }

    #[test]
    fn short_history_yields_neutral_low_confidence_factors() {
        let factors = derive(&[(0, true), (5, false), (10, true)]);
        assert_eq!(factors, RetentionFactors::neutral());
        assert!(!factors.confident);
    }

    #[test]
    fn loss_tolerance_comes_from_non_frustrated_sessions() {
        // Session 1: survives two consecutive losses, ends satisfied.
        // Session 2: ends frustrated after three losses; excluded.
        let history = vec![
            (0, true),
            (5, false),
            (10, false),
            (15, true),
            (20, true),
            // gap
            (120, true),
            (125, false),
            (130, false),
            (135, false),
            (140, false),
        ];
        let factors = derive(&history);
        assert!(factors.confident);
        assert_eq!(factors.loss_tolerance, 2);
    }

    #[test]
    fn comeback_counts_returns_within_window() {
        // Two frustrated sessions; the first is followed 2 hours later
        // (a comeback), the second is the end of the history.
        let history = vec![
            (0, false),
            (5, false),
            (10, false),
            (15, false),
            // 2-hour gap: counts as a comeback
            (135, true),
            (140, true),
            (145, true),
            // gap
            (250, false),
            (255, false),
            (260, false),
        ];
        let factors = derive(&history);
        assert!((factors.comeback_potential - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn comeback_is_neutral_without_frustrated_sessions() {
        let history: Vec<(i64, bool)> = (0..12).map(|i| (i * 10, i % 2 == 0)).collect();
        let factors = derive(&history);
        assert!((factors.comeback_potential - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn stable_sessions_have_high_consistency() {
        // Three sessions, each exactly 50% win rate.
        let history = vec![
            (0, true),
            (5, false),
            (10, true),
            (15, false),
            // gap
            (120, true),
            (125, false),
            (130, true),
            (135, false),
            // gap
            (240, true),
            (245, false),
        ];
        let factors = derive(&history);
        assert!((factors.win_rate_consistency - 1.0).abs() < 1e-6);
    }

    #[test]
    fn factor_fields_stay_in_bounds() {
        let history: Vec<(i64, bool)> = (0..30)
            .map(|i| (i * 45, i % 4 != 0)) // every battle opens a new session
            .collect();
        let factors = derive(&history);
        assert!((0.0..=1.0).contains(&factors.comeback_potential));
        assert!((0.0..=1.0).contains(&factors.win_rate_consistency));
        assert!((0.0..=1.0).contains(&factors.engagement_score));
        assert!(factors.preferred_session_length_min >= 0.0);
    }

    #[test]
    #[should_panic(expected = "sessions must partition the battle list")]
    fn mismatched_session_partition_is_rejected() {
        let history: Vec<(i64, bool)> = (0..12).map(|i| (i * 10, i % 2 == 0)).collect();
        let battles = battles(&history);
        let sessions = segment_sessions(&battles, &SegmentConfig::default()).unwrap();
        // One battle short of the list the sessions were derived from.
        derive_retention_factors(
            &battles[..battles.len() - 1],
            &sessions,
            &FactorConfig::default(),
        );
    }

    #[test]
    fn preferred_length_is_the_median_duration() {
        // Sessions of 20, 30, and 200 minutes; the median resists the
        // abnormally long session.
        let mut history = vec![
            (0, true),
            (20, false),
            // gap
            (120, true),
            (135, false),
            (150, true),
        ];
        // Marathon session: battles every 25 minutes from 300 to 500.
        history.extend((0..9).map(|i| (300 + i * 25, i % 2 == 0)));
        let factors = derive(&history);
        assert!((factors.preferred_session_length_min - 30.0).abs() < 1e-3);
    }
}
