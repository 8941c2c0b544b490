//! Statistical utilities for the crowncast pipeline.
//!
//! This crate provides the small, dependency-free numeric tools the
//! analysis and predictor crates share:
//!
//! - **Descriptive statistics**: mean, median, variance, and standard
//!   deviation over `f32` datasets
//! - **Streak analysis**: maximum and trailing win/loss runs computed in
//!   a single forward scan
//!
//! # Modules
//!
//! - [`descriptive`]: summary statistics for per-session measurements
//! - [`streak`]: consecutive win/loss run detection over battle outcomes
//!
//! # Examples
//!
//! ## Summarizing session durations
//!
//! ```
//! use crowncast_stats::descriptive::DescriptiveStats;
//!
//! let minutes = [12.0, 35.0, 18.0, 22.0];
//! let stats = DescriptiveStats::new(minutes).unwrap();
//! assert_eq!(stats.median, 20.0);
//! ```
//!
//! ## Scanning battle outcomes for streaks
//!
//! ```
//! use crowncast_stats::streak::StreakScan;
//!
//! // true = win, false = loss
//! let scan = StreakScan::from_outcomes([true, false, false, false]);
//! assert_eq!(scan.max_loss_streak, 3);
//! assert_eq!(scan.trailing_losses, 3);
//! ```

pub mod descriptive;
pub mod streak;
