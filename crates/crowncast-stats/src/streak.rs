//! Win/loss streak detection over a sequence of battle outcomes.
//!
//! Session end-reason classification and outcome scoring both depend on
//! consecutive-result runs. [`StreakScan`] computes every run statistic
//! the pipeline needs in one forward pass, so callers never re-scan a
//! session per query.

/// Streak statistics for one sequence of battle outcomes.
///
/// `true` represents a win, `false` a loss. Trailing streaks describe
/// the run still open at the end of the sequence; exactly one of
/// `trailing_wins`/`trailing_losses` is nonzero for a nonempty input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakScan {
    /// Longest run of consecutive wins anywhere in the sequence.
    pub max_win_streak: u32,
    /// Longest run of consecutive losses anywhere in the sequence.
    pub max_loss_streak: u32,
    /// Consecutive wins at the end of the sequence.
    pub trailing_wins: u32,
    /// Consecutive losses at the end of the sequence.
    pub trailing_losses: u32,
}

impl StreakScan {
    /// Scans a sequence of outcomes in a single forward pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use crowncast_stats::streak::StreakScan;
    ///
    /// let scan = StreakScan::from_outcomes([false, false, true, true, true]);
    /// assert_eq!(scan.max_loss_streak, 2);
    /// assert_eq!(scan.max_win_streak, 3);
    /// assert_eq!(scan.trailing_wins, 3);
    /// assert_eq!(scan.trailing_losses, 0);
    /// ```
    ///
    /// An empty sequence has no streaks:
    ///
    /// ```
    /// use crowncast_stats::streak::StreakScan;
    ///
    /// assert_eq!(StreakScan::from_outcomes([]), StreakScan::default());
    /// ```
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut scan = Self::default();
        for won in outcomes {
            if won {
                scan.trailing_wins += 1;
                scan.trailing_losses = 0;
                scan.max_win_streak = scan.max_win_streak.max(scan.trailing_wins);
            } else {
                scan.trailing_losses += 1;
                scan.trailing_wins = 0;
                scan.max_loss_streak = scan.max_loss_streak.max(scan.trailing_losses);
            }
        }
        scan
    }

    /// Whether the sequence ended on a win.
    #[must_use]
    pub fn ended_on_win(&self) -> bool {
        self.trailing_wins > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_outcomes_have_unit_streaks() {
        let scan = StreakScan::from_outcomes([true, false, true, false]);
        assert_eq!(scan.max_win_streak, 1);
        assert_eq!(scan.max_loss_streak, 1);
        assert_eq!(scan.trailing_losses, 1);
        assert!(!scan.ended_on_win());
    }

    #[test]
    fn mid_sequence_streak_is_not_trailing() {
        let scan = StreakScan::from_outcomes([false, false, false, true]);
        assert_eq!(scan.max_loss_streak, 3);
        assert_eq!(scan.trailing_losses, 0);
        assert_eq!(scan.trailing_wins, 1);
        assert!(scan.ended_on_win());
    }

    #[test]
    fn all_losses() {
        let scan = StreakScan::from_outcomes([false; 4]);
        assert_eq!(scan.max_loss_streak, 4);
        assert_eq!(scan.trailing_losses, 4);
        assert_eq!(scan.max_win_streak, 0);
    }
}
