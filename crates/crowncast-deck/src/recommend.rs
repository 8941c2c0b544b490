//! Deck-change recommendation against a known opponent.

use crowncast_model::{CardDatabase, CardId, Outcome, SkillLevel};
use serde::{Deserialize, Serialize};

use crate::{
    archetype::{ArchetypeDatabase, DeckArchetype},
    classify::{Classification, classify_archetype},
    config::MatcherConfig,
    matchup::MatchupTable,
};

/// A concrete deck change worth making.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckRecommendation {
    /// The archetype to switch to.
    pub archetype: DeckArchetype,
    /// Its matchup win rate against the opponent's archetype.
    pub expected_win_rate: f32,
}

/// Outcome of a deck-strategy query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckStrategy {
    /// What the player's current deck classified as.
    pub current_archetype: Classification,
    /// What the opponent's deck classified as.
    pub opponent_archetype: Classification,
    /// Whether switching decks is worth it for the target outcome.
    pub should_change_deck: bool,
    /// Matchup win rate of the deck the player should play: the
    /// recommended archetype's when a change is warranted, the current
    /// deck's otherwise.
    pub expected_win_rate: f32,
    /// Present exactly when `should_change_deck` is true.
    pub recommendation: Option<DeckRecommendation>,
}

/// Recommends whether and how the player's deck should change to steer
/// the next match toward `target` against `opponent_deck`.
///
/// All known archetypes within the player's skill bracket are scanned
/// and the one with the highest (for a win) or lowest (for a loss)
/// matchup win rate against the opponent's archetype is selected. A
/// change is recommended only when the current deck's win rate sits
/// farther from the target rate than the best alternative's by more
/// than the configured margin.
///
/// Degrades instead of failing: an unclassifiable deck on either side
/// reads as an even 0.5 matchup, and an empty candidate set (no
/// archetype within the skill bracket) keeps the current deck.
#[must_use]
pub fn recommend_deck_strategy(
    player_deck: &[CardId],
    opponent_deck: &[CardId],
    target: Outcome,
    player_skill: SkillLevel,
    archetypes: &ArchetypeDatabase,
    matchups: &MatchupTable,
    cards: &CardDatabase,
    config: &MatcherConfig,
) -> DeckStrategy {
    let current_archetype = classify_archetype(player_deck, archetypes, cards, config);
    let opponent_archetype = classify_archetype(opponent_deck, archetypes, cards, config);

    let rate_against = |name: &str| match &opponent_archetype {
        Classification::Matched { archetype, .. } => matchups.win_rate(name, archetype),
        Classification::Unknown => 0.5,
    };
    let current_win_rate = match &current_archetype {
        Classification::Matched { archetype, .. } => rate_against(archetype),
        Classification::Unknown => 0.5,
    };
    let target_rate = match target {
        Outcome::Win => config.target_win_rate,
        Outcome::Loss => config.target_loss_rate,
    };

    let mut best: Option<(&DeckArchetype, f32)> = None;
    for candidate in archetypes.iter().filter(|a| a.min_skill <= player_skill) {
        let rate = rate_against(&candidate.name);
        let better = match best {
            None => true,
            Some((_, best_rate)) => match target {
                Outcome::Win => rate > best_rate,
                Outcome::Loss => rate < best_rate,
            },
        };
        if better {
            best = Some((candidate, rate));
        }
    }

    let change = best.filter(|&(_, best_rate)| {
        (current_win_rate - target_rate).abs() - (best_rate - target_rate).abs()
            > config.change_margin
    });

    match change {
        Some((archetype, expected_win_rate)) => DeckStrategy {
            current_archetype,
            opponent_archetype,
            should_change_deck: true,
            expected_win_rate,
            recommendation: Some(DeckRecommendation {
                archetype: archetype.clone(),
                expected_win_rate,
            }),
        },
        None => DeckStrategy {
            current_archetype,
            opponent_archetype,
            should_change_deck: false,
            expected_win_rate: current_win_rate,
            recommendation: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(archetypes: &ArchetypeDatabase, name: &str) -> Vec<CardId> {
        archetypes
            .get(name)
            .unwrap()
            .representative_cards
            .iter()
            .cloned()
            .collect()
    }

    fn strategy(
        player: &[CardId],
        opponent: &[CardId],
        target: Outcome,
        skill: SkillLevel,
    ) -> DeckStrategy {
        recommend_deck_strategy(
            player,
            opponent,
            target,
            skill,
            &ArchetypeDatabase::builtin(),
            &MatchupTable::builtin(),
            &CardDatabase::builtin(),
            &MatcherConfig::default(),
        )
    }

    #[test]
    fn switches_to_the_best_counter_for_a_win() {
        let archetypes = ArchetypeDatabase::builtin();
        // Giant beatdown is a 0.45 matchup against hog cycle; lavaloon
        // is the 0.65 counter.
        let result = strategy(
            &deck_of(&archetypes, "giant-beatdown"),
            &deck_of(&archetypes, "hog-cycle"),
            Outcome::Win,
            SkillLevel::Expert,
        );
        assert!(result.should_change_deck);
        let recommendation = result.recommendation.unwrap();
        assert_eq!(recommendation.archetype.name, "lavaloon");
        assert!((recommendation.expected_win_rate - 0.65).abs() < 1e-6);
        assert!((result.expected_win_rate - 0.65).abs() < 1e-6);
    }

    #[test]
    fn skill_filter_excludes_demanding_archetypes() {
        let archetypes = ArchetypeDatabase::builtin();
        // A beginner cannot pilot lavaloon (advanced) or hog cycle
        // (intermediate); royal giant is the best remaining matchup.
        let result = strategy(
            &deck_of(&archetypes, "giant-beatdown"),
            &deck_of(&archetypes, "hog-cycle"),
            Outcome::Win,
            SkillLevel::Beginner,
        );
        assert!(result.should_change_deck);
        let recommendation = result.recommendation.unwrap();
        assert_eq!(recommendation.archetype.name, "royal-giant");
        assert!((recommendation.expected_win_rate - 0.55).abs() < 1e-6);
    }

    #[test]
    fn loss_target_seeks_a_challenging_matchup() {
        let archetypes = ArchetypeDatabase::builtin();
        // Against royal giant, giant beatdown sits at an even 0.5;
        // lavaloon's 0.4 is closest to the 0.35 loss target.
        let result = strategy(
            &deck_of(&archetypes, "giant-beatdown"),
            &deck_of(&archetypes, "royal-giant"),
            Outcome::Loss,
            SkillLevel::Expert,
        );
        assert!(result.should_change_deck);
        let recommendation = result.recommendation.unwrap();
        assert_eq!(recommendation.archetype.name, "lavaloon");
        assert!((recommendation.expected_win_rate - 0.4).abs() < 1e-6);
    }

    #[test]
    fn keeps_the_deck_that_is_already_best() {
        let archetypes = ArchetypeDatabase::builtin();
        let result = strategy(
            &deck_of(&archetypes, "lavaloon"),
            &deck_of(&archetypes, "hog-cycle"),
            Outcome::Win,
            SkillLevel::Expert,
        );
        assert!(!result.should_change_deck);
        assert!(result.recommendation.is_none());
        assert!((result.expected_win_rate - 0.65).abs() < 1e-6);
    }

    #[test]
    fn within_margin_improvement_is_not_worth_a_change() {
        let archetypes = ArchetypeDatabase::builtin();
        // Hog cycle is 0.45 against royal giant; lavaloon's 0.4 is only
        // 0.05 closer to the loss target, exactly the margin.
        let result = strategy(
            &deck_of(&archetypes, "hog-cycle"),
            &deck_of(&archetypes, "royal-giant"),
            Outcome::Loss,
            SkillLevel::Expert,
        );
        assert!(!result.should_change_deck);
        assert!((result.expected_win_rate - 0.45).abs() < 1e-6);
    }

    #[test]
    fn unknown_opponent_reads_as_even_and_keeps_the_deck() {
        let archetypes = ArchetypeDatabase::builtin();
        let unknown: Vec<CardId> = ["a", "b", "c", "d", "e", "f", "g", "h"]
            .iter()
            .copied()
            .map(CardId::from)
            .collect();
        let result = strategy(
            &deck_of(&archetypes, "hog-cycle"),
            &unknown,
            Outcome::Win,
            SkillLevel::Expert,
        );
        assert_eq!(result.opponent_archetype, Classification::Unknown);
        assert!(!result.should_change_deck);
        assert!((result.expected_win_rate - 0.5).abs() < 1e-6);
    }
}
