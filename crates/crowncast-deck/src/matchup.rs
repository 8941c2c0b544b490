//! Archetype-vs-archetype win-rate table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Symmetric matchup win rates between archetypes.
///
/// `win_rate(a, b)` is the expected win rate of archetype `a` against
/// archetype `b`. Inserting a pair records the mirrored rate for the
/// reverse pair, so the table always satisfies
/// `win_rate(a, b) + win_rate(b, a) == 1.0`. Pairs never recorded read
/// as an even `0.5`, including mirror matches and unknown archetype
/// names, so lookups are total.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchupTable {
    rates: BTreeMap<(String, String), f32>,
}

impl MatchupTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The seed matchup rates for the built-in archetypes.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert("hog-cycle", "royal-giant", 0.45);
        table.insert("hog-cycle", "giant-beatdown", 0.55);
        table.insert("hog-cycle", "lavaloon", 0.35);
        table.insert("royal-giant", "giant-beatdown", 0.5);
        table.insert("royal-giant", "lavaloon", 0.6);
        table.insert("giant-beatdown", "lavaloon", 0.4);
        table
    }

    /// Records `rate` for `a` against `b` and the mirrored rate for `b`
    /// against `a`. The rate is clamped to `[0, 1]`.
    pub fn insert(&mut self, a: &str, b: &str, rate: f32) {
        let rate = rate.clamp(0.0, 1.0);
        self.rates.insert((a.to_owned(), b.to_owned()), rate);
        self.rates.insert((b.to_owned(), a.to_owned()), 1.0 - rate);
    }

    /// Expected win rate of `a` against `b`, defaulting to an even 0.5
    /// when the pair was never recorded.
    #[must_use]
    pub fn win_rate(&self, a: &str, b: &str) -> f32 {
        self.rates
            .get(&(a.to_owned(), b.to_owned()))
            .copied()
            .unwrap_or(0.5)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_pairs_are_mirrored() {
        let table = MatchupTable::builtin();
        assert!((table.win_rate("hog-cycle", "lavaloon") - 0.35).abs() < 1e-6);
        assert!((table.win_rate("lavaloon", "hog-cycle") - 0.65).abs() < 1e-6);
    }

    #[test]
    fn every_builtin_pair_sums_to_one() {
        let table = MatchupTable::builtin();
        let names = ["hog-cycle", "royal-giant", "giant-beatdown", "lavaloon"];
        for a in names {
            for b in names {
                let forward = table.win_rate(a, b);
                let reverse = table.win_rate(b, a);
                assert!(
                    (forward + reverse - 1.0).abs() < 1e-6,
                    "{a} vs {b}: {forward} + {reverse}"
                );
            }
        }
    }

    #[test]
    fn unrecorded_pairs_read_as_even() {
        let table = MatchupTable::builtin();
        assert!((table.win_rate("hog-cycle", "hog-cycle") - 0.5).abs() < 1e-6);
        assert!((table.win_rate("hog-cycle", "no-such-archetype") - 0.5).abs() < 1e-6);
        assert!((MatchupTable::new().win_rate("a", "b") - 0.5).abs() < 1e-6);
    }

    #[test]
    fn insert_clamps_and_overwrites() {
        let mut table = MatchupTable::new();
        table.insert("a", "b", 1.7);
        assert!((table.win_rate("a", "b") - 1.0).abs() < 1e-6);
        assert!((table.win_rate("b", "a") - 0.0).abs() < 1e-6);
        table.insert("b", "a", 0.4);
        assert!((table.win_rate("a", "b") - 0.6).abs() < 1e-6);
    }
}
