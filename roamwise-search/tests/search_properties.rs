//! Property-based tests for the catalogue pipeline.
//!
//! # Invariants tested
//!
//! - **Trips are never hidden:** a trip search returns every catalogued trip
//!   whatever the criteria.
//! - **Popularity fallback:** an executed location search with an empty query
//!   orders destinations by visitor count, whatever experiences are applied.
//! - **Ranked scores never rise:** executed searches ranked by score list
//!   percentages in non-increasing order.

use proptest::prelude::*;
use roamwise_core::test_support::{sample_catalog, sample_trips};
use roamwise_core::{
    Criteria, ExperienceTag, InMemoryCatalog, PriceLevel, SearchMode, SearchRequest, Searcher,
    Trip,
};
use roamwise_search::CatalogSearcher;

fn criteria_strategy() -> impl Strategy<Value = Criteria> {
    (
        prop::sample::subsequence(ExperienceTag::WELL_KNOWN.to_vec(), 0..=3),
        prop::collection::btree_set(1_u8..=5, 0..=2),
        prop::option::of(1_u32..=21),
        prop::option::of(0_u32..=5_000),
        prop::option::of("[a-z]{2,6}( [a-z]{2,6}){0,2}"),
    )
        .prop_map(|(experiences, tiers, days, max_budget, keywords)| {
            let mut criteria = experiences
                .into_iter()
                .fold(Criteria::new(), Criteria::with_experience);
            criteria.price_ratings = tiers.into_iter().map(PriceLevel::saturating).collect();
            criteria.trip_days = days.and_then(std::num::NonZeroU32::new);
            criteria.max_budget = max_budget.map(f64::from);
            criteria.keywords = keywords;
            criteria
        })
}

fn trips_strategy() -> impl Strategy<Value = Vec<Trip>> {
    prop::collection::vec(
        ("[A-Za-z ]{1,12}", 1_u32..=30, 0_u32..=8_000, 1_u8..=5),
        1..12,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .zip(1_u64..)
            .map(|((title, days, budget, tier), id)| {
                Trip::new(id, title, days, f64::from(budget), PriceLevel::saturating(tier))
            })
            .collect()
    })
}

fn mode_strategy() -> impl Strategy<Value = SearchMode> {
    prop_oneof![Just(SearchMode::Location), Just(SearchMode::Experience)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn trip_search_returns_every_trip(
        trips in trips_strategy(),
        criteria in criteria_strategy(),
        query in "[a-z]{0,6}",
        executed in any::<bool>(),
    ) {
        let expected = trips.len();
        let searcher = CatalogSearcher::new(InMemoryCatalog::with_trips(trips));
        let response = searcher.search(&SearchRequest {
            mode: SearchMode::Trip,
            query,
            criteria,
            executed,
        });
        prop_assert_eq!(response.len(), expected);
    }

    #[test]
    fn empty_location_query_orders_by_popularity(criteria in criteria_strategy()) {
        let searcher = CatalogSearcher::new(sample_catalog());
        let response = searcher.search(&SearchRequest {
            mode: SearchMode::Location,
            query: String::new(),
            criteria,
            executed: true,
        });
        let names: Vec<&str> = response
            .destinations()
            .unwrap_or_default()
            .iter()
            .map(|ranked| ranked.item.name.as_str())
            .collect();
        prop_assert_eq!(names, ["Bali", "Kyoto", "Lisbon", "Queenstown", "Reykjavik"]);
    }

    #[test]
    fn ranked_scores_never_rise(
        mode in mode_strategy(),
        query in "[a-z]{1,3}",
        criteria in criteria_strategy(),
    ) {
        let searcher = CatalogSearcher::new(sample_catalog());
        let response = searcher.search(&SearchRequest { mode, query, criteria, executed: true });
        let scores: Vec<_> = response
            .destinations()
            .unwrap_or_default()
            .iter()
            .filter_map(|ranked| ranked.match_percentage)
            .collect();
        prop_assert!(scores.windows(2).all(|pair| pair.first() >= pair.get(1)));
    }

    #[test]
    fn sample_trips_survive_any_criteria(criteria in criteria_strategy()) {
        let searcher = CatalogSearcher::new(sample_catalog());
        let response = searcher.search(&SearchRequest {
            mode: SearchMode::Trip,
            criteria,
            executed: true,
            ..SearchRequest::default()
        });
        prop_assert_eq!(response.len(), sample_trips().len());
    }
}
