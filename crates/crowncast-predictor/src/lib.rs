//! Churn risk and next-match outcome prediction.
//!
//! This crate implements the last stage of the retention pipeline:
//!
//! 1. **Profile building** ([`profile::build_player_profile`]): combine
//!    player metadata, battle statistics, the session history, and the
//!    derived retention factors into one [`crowncast_model::PlayerProfile`],
//!    including the churn-risk score.
//! 2. **Outcome prediction** ([`outcome::predict_optimal_outcome`]):
//!    decide whether the player's next match should be presented as a
//!    win or a loss, with a confidence value, per-signal contributions,
//!    and heuristic return probabilities.
//!
//! # Scoring model
//!
//! Both churn risk and the outcome decision are deterministic weighted
//! sums of named, clipped signals — an explainable rule system, not a
//! learned model. Every contribution is recorded in the prediction's
//! `factors` map so a reviewer can reconstruct the decision:
//!
//! ```text
//! total_score = recent_satisfaction + end_reason + win_rate_band
//!             + loss_tolerance + comeback_potential + churn_risk
//!
//! outcome = win   if total_score > +0.2
//!         = loss  if total_score < -0.2
//!         = win   otherwise (ties favor the retention-positive outcome)
//! ```
//!
//! Positive contributions push toward recommending a win, negative
//! toward a loss. Weights are fixed configuration in
//! [`config::OutcomeConfig`] and [`config::ChurnWeights`].
//!
//! # Data sufficiency
//!
//! Predictions never fail on thin history: below the minimum battle
//! count the predictor still returns a result but caps `confidence` at
//! a low ceiling, and brand-new players (no sessions at all) get a
//! fixed retention-positive recommendation.

pub mod churn;
pub mod config;
pub mod outcome;
pub mod profile;

pub use self::{
    churn::churn_risk,
    config::{ChurnWeights, OutcomeConfig},
    outcome::predict_optimal_outcome,
    profile::build_player_profile,
};
