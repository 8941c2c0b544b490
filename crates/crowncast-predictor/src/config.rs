//! Fixed weight tables for churn scoring and the outcome decision.

/// Weights for the churn-risk signals.
///
/// Each signal is clipped to `[0, 1]` before weighting; the weighted
/// sum is clamped and mapped into `[0, 100]`.
#[derive(Debug, Clone)]
pub struct ChurnWeights {
    /// Weight of the last session ending badly (frustration or low
    /// satisfaction).
    pub frustration: f32,
    /// Weight of low comeback potential.
    pub comeback: f32,
    /// Weight of low engagement.
    pub engagement: f32,
    /// Weight of the risk *reduction* from stable performance at a
    /// moderate win rate.
    pub stability_relief: f32,
}

impl Default for ChurnWeights {
    fn default() -> Self {
        Self {
            frustration: 0.3,
            comeback: 0.25,
            engagement: 0.3,
            stability_relief: 0.25,
        }
    }
}

/// Thresholds for the outcome decision.
#[derive(Debug, Clone)]
pub struct OutcomeConfig {
    /// Lower edge of the engagement sweet-spot win-rate band.
    pub sweet_spot_low: f32,
    /// Upper edge of the engagement sweet-spot win-rate band.
    pub sweet_spot_high: f32,
    /// Total-score magnitude below which the decision is a tie
    /// (defaulting to a win).
    pub decision_margin: f32,
    /// Minimum battle count for a confident prediction.
    pub min_battles: usize,
    /// Confidence ceiling applied below the minimum battle count.
    pub low_confidence_cap: f32,
}

impl Default for OutcomeConfig {
    fn default() -> Self {
        Self {
            sweet_spot_low: 0.45,
            sweet_spot_high: 0.65,
            decision_margin: 0.2,
            min_battles: 10,
            low_confidence_cap: 0.3,
        }
    }
}
