//! Session segmentation over a chronologically ordered battle list.
//!
//! A session is a maximal run of battles whose consecutive-timestamp
//! gaps all stay within [`SegmentConfig::gap`]. The segmenter walks the
//! battle list once, closing a session whenever the gap to the previous
//! battle exceeds the threshold, and classifies each closed session's
//! end reason from its trailing streaks:
//!
//! - **Frustrated**: trailing loss streak at or above the frustration
//!   threshold
//! - **Satisfied**: trailing win streak at or above the satisfaction
//!   threshold
//! - **Time limit**: session ran longer than the long-session threshold
//!   without a qualifying streak
//! - **Unknown**: none of the above
//!
//! The last session is always closed at the final battle; there is no
//! notion of an open session at analysis time.

use crowncast_model::{
    BattleRecord, SessionEndReason, SessionMetrics, ValidationError, validate_battle_order,
};
use crowncast_stats::streak::StreakScan;

use crate::config::SegmentConfig;

/// Partitions `battles` into sessions.
///
/// The input must be sorted by timestamp ascending; unsorted input is
/// rejected with [`ValidationError::TimestampsNotAscending`]. An empty
/// input yields an empty session list, and a single battle forms a
/// session of size 1.
pub fn segment_sessions(
    battles: &[BattleRecord],
    config: &SegmentConfig,
) -> Result<Vec<SessionMetrics>, ValidationError> {
    validate_battle_order(battles)?;

    let mut sessions = Vec::new();
    let mut session_start = 0;
    for i in 1..=battles.len() {
        let closes_here = i == battles.len()
            || battles[i].timestamp - battles[i - 1].timestamp > config.gap;
        if closes_here {
            sessions.push(build_session(
                sessions.len(),
                &battles[session_start..i],
                config,
            ));
            session_start = i;
        }
    }
    Ok(sessions)
}

/// Computes the metrics for one closed session.
///
/// `battles` is nonempty by construction.
fn build_session(
    session_id: usize,
    battles: &[BattleRecord],
    config: &SegmentConfig,
) -> SessionMetrics {
    let scan = StreakScan::from_outcomes(battles.iter().map(|b| b.won));
    let wins = battles.iter().filter(|b| b.won).count();
    let losses = battles.len() - wins;
    let net_trophy_change = battles.iter().map(|b| b.trophy_change).sum();

    let start_time = battles[0].timestamp;
    let end_time = battles[battles.len() - 1].timestamp;

    let end_reason = if scan.trailing_losses >= config.frustration_loss_streak {
        SessionEndReason::Frustrated
    } else if scan.trailing_wins >= config.satisfaction_win_streak {
        SessionEndReason::Satisfied
    } else if end_time - start_time > config.long_session {
        SessionEndReason::TimeLimit
    } else {
        SessionEndReason::Unknown
    };

    #[expect(clippy::cast_precision_loss)]
    let win_rate = wins as f32 / battles.len() as f32;
    let satisfaction_score = satisfaction_score(win_rate, scan.ended_on_win(), end_reason);

    SessionMetrics {
        session_id,
        start_time,
        end_time,
        battle_count: battles.len(),
        wins,
        losses,
        net_trophy_change,
        trailing_loss_streak: scan.trailing_losses,
        end_reason,
        satisfaction_score,
    }
}

/// Deterministic satisfaction estimate in `[0, 1]`.
///
/// Starts from a neutral 0.5, shifted by the session win rate, whether
/// the session ended on a win, and the classified end reason.
fn satisfaction_score(win_rate: f32, ended_on_win: bool, end_reason: SessionEndReason) -> f32 {
    let ending = if ended_on_win { 0.1 } else { -0.1 };
    let reason = match end_reason {
        SessionEndReason::Satisfied => 0.2,
        SessionEndReason::Frustrated => -0.3,
        SessionEndReason::TimeLimit | SessionEndReason::Unknown => 0.0,
    };
    (0.5 + (win_rate - 0.5) * 0.4 + ending + reason).clamp(0.0, 1.0)
}
