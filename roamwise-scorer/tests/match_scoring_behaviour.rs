//! Behavioural coverage for destination and trip match scoring.

use std::cell::RefCell;

use roamwise_core::{Criteria, Destination, ExperienceTag, MatchScore, MatchScorer, PriceLevel, Trip};
use roamwise_scorer::{DestinationMatchScorer, TripMatchScorer};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Destinations under test, in catalogue order.
#[fixture]
pub fn destinations() -> RefCell<Vec<Destination>> {
    RefCell::new(Vec::new())
}

/// Trip under test, if any.
#[fixture]
pub fn trip() -> RefCell<Option<Trip>> {
    RefCell::new(None)
}

/// Applied criteria for the scenario.
#[fixture]
pub fn criteria() -> RefCell<Criteria> {
    RefCell::new(Criteria::new())
}

/// Scores recorded by the `when` steps, in catalogue order.
#[fixture]
pub fn scores() -> RefCell<Vec<MatchScore>> {
    RefCell::new(Vec::new())
}

#[given("a coastal destination at price tier 3")]
fn coastal_destination(destinations: &RefCell<Vec<Destination>>) {
    destinations.borrow_mut().push(
        Destination::new(1, "Algarve", "Portugal", "Europe", PriceLevel::saturating(3))
            .with_attribute(ExperienceTag::BEACH_AND_COAST),
    );
}

#[given("a bare destination at price tier 1")]
fn bare_destination(destinations: &RefCell<Vec<Destination>>) {
    destinations.borrow_mut().push(Destination::new(
        2,
        "Gdansk",
        "Poland",
        "Europe",
        PriceLevel::MIN,
    ));
}

#[given("criteria selecting Beach & Coast at price tier 3")]
fn beach_criteria(criteria: &RefCell<Criteria>) {
    *criteria.borrow_mut() = Criteria::new()
        .with_experience(ExperienceTag::BEACH_AND_COAST)
        .with_price(PriceLevel::saturating(3));
}

#[given("no criteria")]
fn no_criteria(criteria: &RefCell<Criteria>) {
    criteria.borrow_mut().clear();
}

#[given("a ten day trip")]
fn ten_day_trip(trip: &RefCell<Option<Trip>>) {
    *trip.borrow_mut() = Some(Trip::new(
        1,
        "Fjord Explorer",
        10,
        3500.0,
        PriceLevel::saturating(4),
    ));
}

#[given("criteria asking for eight days")]
fn eight_days(criteria: &RefCell<Criteria>) {
    *criteria.borrow_mut() = Criteria::new().with_trip_days(8);
}

#[given("criteria asking for seven days")]
fn seven_days(criteria: &RefCell<Criteria>) {
    *criteria.borrow_mut() = Criteria::new().with_trip_days(7);
}

#[when("I score both destinations")]
fn score_destinations(
    destinations: &RefCell<Vec<Destination>>,
    criteria: &RefCell<Criteria>,
    scores: &RefCell<Vec<MatchScore>>,
) {
    let applied = criteria.borrow();
    *scores.borrow_mut() = destinations
        .borrow()
        .iter()
        .map(|destination| DestinationMatchScorer.score(destination, &applied))
        .collect();
}

#[when("I score the trip")]
fn score_trip(
    trip: &RefCell<Option<Trip>>,
    criteria: &RefCell<Criteria>,
    scores: &RefCell<Vec<MatchScore>>,
) {
    let binding = trip.borrow();
    let candidate = binding
        .as_ref()
        .unwrap_or_else(|| panic!("trip must be initialised"));
    let score = TripMatchScorer::default().score(candidate, &criteria.borrow());
    *scores.borrow_mut() = vec![score];
}

fn score_at(scores: &RefCell<Vec<MatchScore>>, index: usize) -> u8 {
    let recorded = scores.borrow();
    let score = recorded
        .get(index)
        .copied()
        .unwrap_or_else(|| panic!("score {index} must be recorded"));
    score.get()
}

#[then("the coastal destination scores 100")]
fn coastal_scores_full(scores: &RefCell<Vec<MatchScore>>) {
    assert_eq!(score_at(scores, 0), 100);
}

#[then("the bare destination scores 0")]
fn bare_scores_zero(scores: &RefCell<Vec<MatchScore>>) {
    assert_eq!(score_at(scores, 1), 0);
}

#[then("the bare destination scores 100")]
fn bare_scores_full(scores: &RefCell<Vec<MatchScore>>) {
    assert_eq!(score_at(scores, 1), 100);
}

#[then("the trip scores 100")]
fn trip_scores_full(scores: &RefCell<Vec<MatchScore>>) {
    assert_eq!(score_at(scores, 0), 100);
}

#[then("the trip scores 0")]
fn trip_scores_zero(scores: &RefCell<Vec<MatchScore>>) {
    assert_eq!(score_at(scores, 0), 0);
}

#[scenario(path = "tests/features/match_scoring.feature", index = 0)]
fn destination_matching_every_criterion(
    destinations: RefCell<Vec<Destination>>,
    criteria: RefCell<Criteria>,
    scores: RefCell<Vec<MatchScore>>,
) {
    let _ = (destinations, criteria, scores);
}

#[scenario(path = "tests/features/match_scoring.feature", index = 1)]
fn destinations_without_criteria(
    destinations: RefCell<Vec<Destination>>,
    criteria: RefCell<Criteria>,
    scores: RefCell<Vec<MatchScore>>,
) {
    let _ = (destinations, criteria, scores);
}

#[scenario(path = "tests/features/match_scoring.feature", index = 2)]
fn trip_within_tolerance(
    trip: RefCell<Option<Trip>>,
    criteria: RefCell<Criteria>,
    scores: RefCell<Vec<MatchScore>>,
) {
    let _ = (trip, criteria, scores);
}

#[scenario(path = "tests/features/match_scoring.feature", index = 3)]
fn trip_outside_tolerance(
    trip: RefCell<Option<Trip>>,
    criteria: RefCell<Criteria>,
    scores: RefCell<Vec<MatchScore>>,
) {
    let _ = (trip, criteria, scores);
}
