//! Experience and price matching for destinations.

use log::trace;
use roamwise_core::{Criteria, Destination, MatchScorer, MatchTally};

/// Scores a destination by its experiences and price tier.
///
/// Each selected experience is one unit, matched when the destination lists
/// it. Any selected price tier adds one unit, matched when the destination's
/// tier is among them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DestinationMatchScorer;

impl MatchScorer<Destination> for DestinationMatchScorer {
    fn tally(&self, candidate: &Destination, criteria: &Criteria) -> MatchTally {
        let mut tally = MatchTally::default();
        for experience in &criteria.experience_filters {
            tally.record(candidate.attributes.contains(experience));
        }
        if !criteria.price_ratings.is_empty() {
            tally.record(criteria.price_ratings.contains(&candidate.price_level));
        }
        trace!(
            "destination {} matched {}/{} units",
            candidate.id, tally.matched, tally.total
        );
        tally
    }
}
