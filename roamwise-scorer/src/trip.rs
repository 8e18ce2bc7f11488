//! Keyword, price, length and budget matching for curated trips.

use log::trace;
use roamwise_core::keywords::any_field_contains;
use roamwise_core::{Criteria, MatchScorer, MatchTally, Trip};

/// Days a trip may differ from the requested length and still match.
pub const DEFAULT_LENGTH_TOLERANCE_DAYS: u32 = 2;

/// Scores a trip against keywords, price tiers, length and budget.
///
/// Every keyword token is one unit, matched when it occurs in the title,
/// description, a stop, a tag or a highlight. Price tiers, trip length and
/// budget bounds each add one unit when set.
///
/// # Examples
///
/// ```
/// use roamwise_core::{Criteria, MatchScorer, PriceLevel, Trip};
/// use roamwise_scorer::TripMatchScorer;
///
/// let trip = Trip::new(1, "Fjord Explorer", 10, 3500.0, PriceLevel::saturating(4));
/// let criteria = Criteria::new().with_trip_days(12);
///
/// assert_eq!(TripMatchScorer::default().score(&trip, &criteria).get(), 100);
/// assert_eq!(
///     TripMatchScorer::default()
///         .with_length_tolerance(1)
///         .score(&trip, &criteria)
///         .get(),
///     0
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripMatchScorer {
    length_tolerance: u32,
}

impl TripMatchScorer {
    /// Construct a scorer with the default length tolerance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            length_tolerance: DEFAULT_LENGTH_TOLERANCE_DAYS,
        }
    }

    /// Override the length tolerance in days.
    #[must_use]
    pub const fn with_length_tolerance(mut self, days: u32) -> Self {
        self.length_tolerance = days;
        self
    }

    /// Return the length tolerance in days.
    #[must_use]
    pub const fn length_tolerance(&self) -> u32 {
        self.length_tolerance
    }

    fn mentions(trip: &Trip, token: &str) -> bool {
        let fields = [trip.title.as_str(), trip.description.as_str()]
            .into_iter()
            .chain(trip.destinations.iter().map(String::as_str))
            .chain(trip.tags.iter().map(String::as_str))
            .chain(trip.highlights.iter().map(String::as_str));
        any_field_contains(fields, token)
    }
}

impl Default for TripMatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScorer<Trip> for TripMatchScorer {
    fn tally(&self, candidate: &Trip, criteria: &Criteria) -> MatchTally {
        let mut tally = MatchTally::default();
        for token in criteria.keyword_tokens() {
            tally.record(Self::mentions(candidate, &token));
        }
        if !criteria.price_ratings.is_empty() {
            tally.record(criteria.price_ratings.contains(&candidate.price_level));
        }
        if let Some(days) = criteria.trip_days {
            tally.record(candidate.duration_days.abs_diff(days.get()) <= self.length_tolerance);
        }
        if let Some(range) = criteria.budget_range() {
            tally.record(range.contains(candidate.budget));
        }
        trace!(
            "trip {} matched {}/{} units",
            candidate.id, tally.matched, tally.total
        );
        tally
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for trip matching.

    use roamwise_core::{MatchScore, PriceLevel};
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn temple_trail() -> Trip {
        Trip::new(7, "Temple Trail", 7, 1200.0, PriceLevel::saturating(2))
            .with_description("Slow travel between shrines and tea houses.")
            .with_tag("culture")
            .with_highlight("Fushimi Inari at dawn")
            .with_stop("Kyoto")
            .with_stop("Nara")
    }

    #[fixture]
    fn scorer() -> TripMatchScorer {
        TripMatchScorer::default()
    }

    #[rstest]
    fn no_criteria_scores_full(scorer: TripMatchScorer, temple_trail: Trip) {
        assert_eq!(
            scorer.score(&temple_trail, &Criteria::new()),
            MatchScore::FULL
        );
    }

    #[rstest]
    #[case("temple", true)]
    #[case("SHRINES", true)]
    #[case("nara", true)]
    #[case("culture", true)]
    #[case("inari", true)]
    #[case("beach", false)]
    fn keywords_search_every_text_field(
        scorer: TripMatchScorer,
        temple_trail: Trip,
        #[case] keyword: &str,
        #[case] expected: bool,
    ) {
        let criteria = Criteria::new().with_keywords(keyword);
        let tally = scorer.tally(&temple_trail, &criteria);
        assert_eq!(tally.total, 1);
        assert_eq!(tally.matched == 1, expected);
    }

    #[rstest]
    fn each_keyword_token_is_a_unit(scorer: TripMatchScorer, temple_trail: Trip) {
        let criteria = Criteria::new().with_keywords("kyoto, beach tea");
        let tally = scorer.tally(&temple_trail, &criteria);
        assert_eq!(tally, MatchTally { matched: 2, total: 3 });
        assert_eq!(tally.percentage().get(), 67);
    }

    #[rstest]
    #[case(7, true)]
    #[case(9, true)]
    #[case(5, true)]
    #[case(10, false)]
    #[case(4, false)]
    fn length_matches_within_tolerance(
        scorer: TripMatchScorer,
        temple_trail: Trip,
        #[case] days: u32,
        #[case] expected: bool,
    ) {
        let criteria = Criteria::new().with_trip_days(days);
        let matched = scorer.tally(&temple_trail, &criteria).matched == 1;
        assert_eq!(matched, expected);
    }

    #[rstest]
    fn tolerance_can_be_tightened(temple_trail: Trip) {
        let criteria = Criteria::new().with_trip_days(8);
        let strict = TripMatchScorer::new().with_length_tolerance(0);
        assert_eq!(strict.length_tolerance(), 0);
        assert_eq!(strict.score(&temple_trail, &criteria), MatchScore::NONE);
    }

    #[rstest]
    #[case(Some(1000.0), Some(1500.0), true)]
    #[case(Some(1200.0), Some(1200.0), true)]
    #[case(None, Some(1000.0), false)]
    #[case(Some(1300.0), None, false)]
    #[case(None, Some(1200.0), true)]
    fn budget_bounds_are_inclusive(
        scorer: TripMatchScorer,
        temple_trail: Trip,
        #[case] min: Option<f64>,
        #[case] max: Option<f64>,
        #[case] expected: bool,
    ) {
        let criteria = Criteria::new().with_budget(min, max);
        let tally = scorer.tally(&temple_trail, &criteria);
        assert_eq!(tally.total, 1);
        assert_eq!(tally.matched == 1, expected);
    }

    #[rstest]
    fn mixed_criteria_combine_units(scorer: TripMatchScorer, temple_trail: Trip) {
        let mut criteria = Criteria::new()
            .with_keywords("kyoto")
            .with_trip_days(14)
            .with_price(PriceLevel::saturating(2));
        criteria.max_budget = Some(1000.0);
        let tally = scorer.tally(&temple_trail, &criteria);
        assert_eq!(tally, MatchTally { matched: 2, total: 4 });
        assert_eq!(tally.percentage().get(), 50);
    }

    #[rstest]
    fn party_size_is_not_scored(scorer: TripMatchScorer, temple_trail: Trip) {
        let criteria = Criteria::new().with_people(6);
        assert!(!scorer.tally(&temple_trail, &criteria).is_active());
    }
}
