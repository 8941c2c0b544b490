//! Shared data model for the crowncast retention pipeline
//!
//! This crate defines the types that flow through the analysis pipeline,
//! from raw battle history to the final retention prediction:
//!
//! ```text
//! [BattleRecord]  ── segmentation ──▶  [SessionMetrics]
//!        │                                   │
//!        └──────────── factors ──────────────┘
//!                         │
//!                  RetentionFactors
//!                         │
//!                   PlayerProfile ── prediction ──▶ RetentionPrediction
//! ```
//!
//! The deck matcher is a sibling pipeline and shares only the card model
//! ([`card::CardDatabase`], [`battle::CardId`]) with the retention side.
//!
//! # Design
//!
//! - All types are plain data with `serde` derives; no business logic
//!   beyond validation and derived accessors lives here.
//! - Derived types ([`session::SessionMetrics`], [`profile::RetentionFactors`],
//!   [`prediction::RetentionPrediction`]) are recomputed fresh on every
//!   analysis call and never mutated after creation.
//! - Static reference data ([`card::CardDatabase`]) is built once and
//!   passed by shared reference into each component call, keeping every
//!   component a pure function of its declared inputs.
//!
//! # Validation
//!
//! The only aborting error in the pipeline is [`error::ValidationError`]:
//! battle history whose timestamps are not ascending is rejected before
//! any analysis runs. Everything else (short history, unknown cards,
//! missing matchup data) degrades gracefully downstream.

pub mod battle;
pub mod card;
pub mod error;
pub mod prediction;
pub mod profile;
pub mod session;

pub use self::{
    battle::{BattleRecord, CardId, DECK_SIZE, validate_battle_order},
    card::{Card, CardDatabase, CardType, Rarity},
    error::ValidationError,
    prediction::{Outcome, RetentionPrediction, Signal},
    profile::{PlayStyle, PlayerMeta, PlayerProfile, RetentionFactors, SkillLevel},
    session::{SessionEndReason, SessionMetrics},
};
