//! Session segmentation and retention-factor derivation
//!
//! This crate implements the first two stages of the retention pipeline:
//!
//! 1. **Segmentation** ([`segmenter::segment_sessions`]): partition a
//!    chronologically ordered battle list into play sessions using an
//!    inactivity-gap rule, computing per-session metrics and classifying
//!    why each session ended.
//! 2. **Factor derivation** ([`factors::derive_retention_factors`]):
//!    reduce the session sequence and raw battles to stable behavioral
//!    factors — loss tolerance, comeback potential, win-rate
//!    consistency, preferred session length, and engagement.
//!
//! Both stages are pure, synchronous computations over borrowed input.
//! Thresholds and windows live in [`config::SegmentConfig`] and
//! [`config::FactorConfig`], which carry the documented defaults via
//! `Default`.
//!
//! # Example
//!
//! ```no_run
//! use crowncast_analysis::{
//!     config::{FactorConfig, SegmentConfig},
//!     factors::derive_retention_factors,
//!     segmenter::segment_sessions,
//! };
//! use crowncast_model::BattleRecord;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let battles: Vec<BattleRecord> = vec![]; // From the data-fetch layer
//!
//! let sessions = segment_sessions(&battles, &SegmentConfig::default())?;
//! let factors = derive_retention_factors(&battles, &sessions, &FactorConfig::default());
//!
//! println!("{} sessions, engagement {:.2}", sessions.len(), factors.engagement_score);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod factors;
pub mod segmenter;

pub use self::{
    config::{FactorConfig, SegmentConfig},
    factors::derive_retention_factors,
    segmenter::segment_sessions,
};
