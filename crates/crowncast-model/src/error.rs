//! Validation errors for pipeline input.
//!
//! [`ValidationError`] is the only error that aborts an analysis call.
//! Short history, unknown cards, and missing matchup entries are handled
//! by graceful degradation instead (neutral factors, `Unknown` archetype,
//! even matchup), so the pipeline always produces an actionable result
//! for well-formed input.

/// Rejection of malformed battle history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    /// The battle list is not sorted by timestamp ascending.
    #[display("battle at index {index} is earlier than its predecessor")]
    TimestampsNotAscending {
        /// Index of the first offending record.
        index: usize,
    },
}
