//! Score catalogue candidates against applied criteria.
//!
//! The [`MatchScorer`] trait counts criterion units: every active criterion
//! dimension contributes units to a [`MatchTally`], and the match percentage
//! is the share of units the candidate satisfies.

use crate::Criteria;

/// A match percentage in `0..=100`.
///
/// # Examples
/// ```
/// use roamwise_core::MatchScore;
///
/// assert_eq!(MatchScore::FULL.get(), 100);
/// assert!(MatchScore::new(140).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MatchScore(u8);

impl MatchScore {
    /// No unit matched.
    pub const NONE: Self = Self(0);
    /// Every unit matched, or no criteria were active.
    pub const FULL: Self = Self(100);

    /// Construct a score, rejecting values above 100.
    pub const fn new(percentage: u8) -> Option<Self> {
        if percentage <= Self::FULL.0 {
            Some(Self(percentage))
        } else {
            None
        }
    }

    /// Return the percentage.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Matched and total criterion units for one candidate.
///
/// # Examples
/// ```
/// use roamwise_core::MatchTally;
///
/// let mut tally = MatchTally::default();
/// tally.record(true);
/// tally.record(false);
/// tally.record(true);
/// assert_eq!(tally.percentage().get(), 67);
/// assert_eq!(MatchTally::default().percentage().get(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchTally {
    /// Units the candidate satisfied.
    pub matched: u32,
    /// Units that were active.
    pub total: u32,
}

impl MatchTally {
    /// Count one active unit, matched or not.
    pub fn record(&mut self, matched: bool) {
        self.total = self.total.saturating_add(1);
        if matched {
            self.matched = self.matched.saturating_add(1);
        }
    }

    /// Report whether any unit was active.
    pub const fn is_active(&self) -> bool {
        self.total > 0
    }

    /// Matched share as a whole percentage, rounding halves up.
    ///
    /// No active units means nothing discriminates between candidates, so the
    /// result is [`MatchScore::FULL`].
    pub fn percentage(&self) -> MatchScore {
        if self.total == 0 {
            return MatchScore::FULL;
        }
        let matched = u64::from(self.matched.min(self.total));
        let total = u64::from(self.total);
        let rounded = (matched * 200 + total) / (total * 2);
        u8::try_from(rounded)
            .ok()
            .and_then(MatchScore::new)
            .unwrap_or(MatchScore::FULL)
    }
}

/// Calculate how well a candidate satisfies a set of criteria.
///
/// Scoring is total: implementations never fail and treat unusable criteria
/// as absent. Implementations must be thread-safe (`Send` + `Sync`) so one
/// scorer can serve many sessions.
///
/// # Examples
///
/// ```rust
/// use roamwise_core::{Criteria, MatchScorer, MatchTally};
///
/// struct KeywordCount;
///
/// impl MatchScorer<String> for KeywordCount {
///     fn tally(&self, candidate: &String, criteria: &Criteria) -> MatchTally {
///         let mut tally = MatchTally::default();
///         for token in criteria.keyword_tokens() {
///             tally.record(candidate.contains(&token));
///         }
///         tally
///     }
/// }
///
/// let criteria = Criteria::new().with_keywords("sun sea");
/// assert_eq!(KeywordCount.score(&"sun".to_owned(), &criteria).get(), 50);
/// ```
pub trait MatchScorer<C>: Send + Sync {
    /// Count matched and active criterion units for `candidate`.
    fn tally(&self, candidate: &C, criteria: &Criteria) -> MatchTally;

    /// Return the match percentage for `candidate`.
    fn score(&self, candidate: &C, criteria: &Criteria) -> MatchScore {
        self.tally(candidate, criteria).percentage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 100)]
    #[case(0, 2, 0)]
    #[case(2, 2, 100)]
    #[case(1, 2, 50)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(1, 8, 13)]
    #[case(5, 3, 100)]
    fn percentage_rounds_half_up(#[case] matched: u32, #[case] total: u32, #[case] expected: u8) {
        let tally = MatchTally { matched, total };
        assert_eq!(tally.percentage().get(), expected);
    }

    #[test]
    fn record_counts_units() {
        let mut tally = MatchTally::default();
        assert!(!tally.is_active());
        tally.record(false);
        tally.record(true);
        assert_eq!(tally, MatchTally { matched: 1, total: 2 });
    }

    #[test]
    fn scores_order_by_percentage() {
        assert!(MatchScore::FULL > MatchScore::NONE);
        assert_eq!(MatchScore::new(42).map(MatchScore::get), Some(42));
    }
}
