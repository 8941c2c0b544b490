//! Tunable thresholds for classification and recommendation.

/// Fixed configuration for the archetype matcher.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Similarity below which a deck classifies as unknown rather than
    /// being forced onto the nearest archetype.
    pub similarity_floor: f32,
    /// How much closer (in win-rate points) an alternative archetype
    /// must bring the player to the target before a deck change is
    /// recommended.
    pub change_margin: f32,
    /// Matchup win rate targeted when the desired outcome is a win.
    pub target_win_rate: f32,
    /// Matchup win rate targeted when the desired outcome is a loss:
    /// challenging but winnable.
    pub target_loss_rate: f32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            similarity_floor: 0.25,
            change_margin: 0.05,
            target_win_rate: 0.65,
            target_loss_rate: 0.35,
        }
    }
}
