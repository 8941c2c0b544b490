//! Deck archetype classification and matchup-driven recommendations.
//!
//! This crate is the sibling pipeline to the retention analysis: it
//! never looks at battle history. It answers three questions:
//!
//! 1. **What is this deck?** ([`classify::classify_archetype`]) — match
//!    an eight-card set against known archetypes by Jaccard similarity
//!    over representative card sets, with elixir distance as the tie
//!    break. Classification is total: decks that match nothing well, or
//!    that contain unknown cards, classify as
//!    [`classify::Classification::Unknown`] instead of failing.
//! 2. **Who beats whom?** ([`matchup::MatchupTable`]) — a symmetric
//!    archetype-vs-archetype win-rate table; missing pairs read as an
//!    even 0.5.
//! 3. **Should the player switch decks?** ([`recommend::recommend_deck_strategy`])
//!    — given a target outcome and the opponent's deck, pick the
//!    skill-appropriate archetype whose matchup best serves that
//!    outcome, and report whether switching is worth it.
//!
//! Reference data ([`archetype::ArchetypeDatabase`], [`MatchupTable`])
//! is built once and read-only during analysis; updates are modeled as
//! constructing a fresh table and swapping it in, never as in-place
//! mutation visible to in-flight calls.

pub mod archetype;
pub mod classify;
pub mod config;
pub mod matchup;
pub mod recommend;

pub use self::{
    archetype::{ArchetypeDatabase, DeckArchetype},
    classify::{Classification, classify_archetype},
    config::MatcherConfig,
    matchup::MatchupTable,
    recommend::{DeckRecommendation, DeckStrategy, recommend_deck_strategy},
};
