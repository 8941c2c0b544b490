//! Player profile assembly.
//!
//! Combines upstream metadata, battle statistics, the session history,
//! and the derived retention factors into the read-only
//! [`PlayerProfile`] consumed by the outcome predictor.

use crowncast_model::{
    BattleRecord, CardDatabase, PlayStyle, PlayerMeta, PlayerProfile, RetentionFactors,
    SessionMetrics, SkillLevel,
};

use crate::{churn::churn_risk, config::ChurnWeights};

/// Number of most recent battles that define the recent win rate.
const RECENT_WINDOW: usize = 10;

/// Average elixir below which a deck reads as aggressive.
const AGGRESSIVE_ELIXIR: f32 = 3.5;
/// Average elixir above which a deck reads as defensive or control.
const HEAVY_ELIXIR: f32 = 4.0;

/// Builds the per-player profile summary.
///
/// Pure function of its inputs: metadata seeds the skill and style
/// classification, the battle list provides overall and recent win
/// rates, and the churn-risk score is computed from the factors and the
/// most recent session.
#[must_use]
pub fn build_player_profile(
    meta: &PlayerMeta,
    battles: &[BattleRecord],
    sessions: &[SessionMetrics],
    factors: RetentionFactors,
    cards: &CardDatabase,
    weights: &ChurnWeights,
) -> PlayerProfile {
    let overall_win_rate = win_rate(battles);
    let recent_start = battles.len().saturating_sub(RECENT_WINDOW);
    let recent_win_rate = win_rate(&battles[recent_start..]);

    let last_session = sessions.last().cloned();
    let churn_risk = churn_risk(&factors, last_session.as_ref(), overall_win_rate, weights);

    PlayerProfile {
        player_tag: meta.player_tag.clone(),
        skill_level: SkillLevel::from_trophies(meta.trophies),
        play_style: play_style(meta, battles, cards),
        churn_risk,
        factors,
        last_session,
        total_battles: battles.len(),
        overall_win_rate,
        recent_win_rate,
    }
}

#[expect(clippy::cast_precision_loss)]
fn win_rate(battles: &[BattleRecord]) -> f32 {
    if battles.is_empty() {
        return 0.0;
    }
    battles.iter().filter(|b| b.won).count() as f32 / battles.len() as f32
}

/// Classifies play style from average elixir cost and crown
/// differential.
///
/// Cheap decks that out-crown opponents read as aggressive; heavy decks
/// read as defensive, or control when they still win the crown
/// exchange. Without a known deck the style stays balanced.
#[expect(clippy::cast_precision_loss)]
fn play_style(meta: &PlayerMeta, battles: &[BattleRecord], cards: &CardDatabase) -> PlayStyle {
    let Some(avg_elixir) = meta
        .current_deck
        .as_ref()
        .and_then(|deck| cards.average_elixir(deck))
    else {
        return PlayStyle::Balanced;
    };

    let avg_crown_diff = if battles.is_empty() {
        0.0
    } else {
        battles
            .iter()
            .map(|b| f32::from(b.crown_difference()))
            .sum::<f32>()
            / battles.len() as f32
    };

    if avg_elixir < AGGRESSIVE_ELIXIR && avg_crown_diff >= 0.0 {
        PlayStyle::Aggressive
    } else if avg_elixir > HEAVY_ELIXIR {
        if avg_crown_diff > 0.0 {
            PlayStyle::Control
        } else {
            PlayStyle::Defensive
        }
    } else {
        PlayStyle::Balanced
    }
}
