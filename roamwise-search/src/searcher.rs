//! `CatalogSearcher` implementation of the Filter → Score → Rank pipeline.

use log::debug;
use roamwise_core::{
    Candidate, CatalogProvider, Destination, FilterPolicy, MatchScorer, RankOnly, Ranked,
    RankingRule, Scored, SearchMode, SearchRequest, SearchResponse, Searcher, StrictFilter, Trip,
    rank,
};
use roamwise_scorer::{DestinationMatchScorer, TripMatchScorer};

/// Searches an in-process catalogue.
///
/// The searcher is generic over the catalogue and over the scorers used for
/// destinations and trips, which default to the unit-counting scorers from
/// `roamwise-scorer`.
///
/// # Examples
///
/// ```
/// use roamwise_core::{
///     Criteria, Destination, ExperienceTag, InMemoryCatalog, PriceLevel, SearchMode,
///     SearchRequest, Searcher,
/// };
/// use roamwise_search::CatalogSearcher;
///
/// let catalog = InMemoryCatalog::with_destinations([
///     Destination::new(1, "Gdansk", "Poland", "Europe", PriceLevel::MIN),
///     Destination::new(2, "Algarve", "Portugal", "Europe", PriceLevel::saturating(3))
///         .with_attribute(ExperienceTag::BEACH_AND_COAST),
/// ]);
/// let request = SearchRequest {
///     mode: SearchMode::Experience,
///     criteria: Criteria::new().with_experience(ExperienceTag::BEACH_AND_COAST),
///     executed: true,
///     ..SearchRequest::default()
/// };
///
/// let response = CatalogSearcher::new(catalog).search(&request);
/// let names: Vec<_> = response
///     .destinations()
///     .unwrap_or_default()
///     .iter()
///     .map(|ranked| ranked.item.name.as_str())
///     .collect();
/// assert_eq!(names, ["Algarve", "Gdansk"]);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogSearcher<P, D = DestinationMatchScorer, T = TripMatchScorer>
where
    P: CatalogProvider,
    D: MatchScorer<Destination>,
    T: MatchScorer<Trip>,
{
    catalog: P,
    destination_scorer: D,
    trip_scorer: T,
}

impl<P> CatalogSearcher<P>
where
    P: CatalogProvider,
{
    /// Construct a searcher using the default scorers.
    #[must_use]
    pub fn new(catalog: P) -> Self {
        Self::with_scorers(catalog, DestinationMatchScorer, TripMatchScorer::default())
    }
}

impl<P, D, T> CatalogSearcher<P, D, T>
where
    P: CatalogProvider,
    D: MatchScorer<Destination>,
    T: MatchScorer<Trip>,
{
    /// Construct a searcher with explicit scorers.
    #[must_use]
    pub const fn with_scorers(catalog: P, destination_scorer: D, trip_scorer: T) -> Self {
        Self {
            catalog,
            destination_scorer,
            trip_scorer,
        }
    }

    /// Borrow the catalogue being searched.
    #[must_use]
    pub const fn catalog(&self) -> &P {
        &self.catalog
    }

    fn search_destinations(&self, request: &SearchRequest) -> Vec<Ranked<Destination>> {
        let catalog = self.catalog.destinations();
        let candidates = match StrictFilter::for_mode(request.mode, &request.query, &request.criteria)
        {
            Some(policy) => policy.select(catalog),
            None => RankOnly.select(catalog),
        };
        debug!(
            "{} search kept {} of {} destinations",
            request.mode,
            candidates.len(),
            catalog.len()
        );
        let scored = score_all(candidates, &self.destination_scorer, request);
        let rule = RankingRule::for_request(request);
        debug!("ranking {} destinations by {rule:?}", scored.len());
        rank(scored, rule, request.executed, Destination::popularity)
            .iter()
            .map(Ranked::cloned)
            .collect()
    }

    fn search_trips(&self, request: &SearchRequest) -> Vec<Ranked<Trip>> {
        let catalog = self.catalog.trips();
        let candidates = RankOnly.select(catalog);
        debug!("trip search considering {} trips", candidates.len());
        let scored = score_all(candidates, &self.trip_scorer, request);
        let rule = RankingRule::for_request(request);
        rank(scored, rule, request.executed, |_| 0)
            .iter()
            .map(Ranked::cloned)
            .collect()
    }
}

fn score_all<'a, C, S>(
    candidates: Vec<Candidate<'a, C>>,
    scorer: &S,
    request: &SearchRequest,
) -> Vec<Scored<'a, C>>
where
    S: MatchScorer<C>,
{
    candidates
        .into_iter()
        .map(|candidate| Scored {
            score: scorer.score(candidate.item, &request.criteria),
            candidate,
        })
        .collect()
}

impl<P, D, T> Searcher for CatalogSearcher<P, D, T>
where
    P: CatalogProvider,
    D: MatchScorer<Destination>,
    T: MatchScorer<Trip>,
{
    fn search(&self, request: &SearchRequest) -> SearchResponse {
        match request.mode {
            SearchMode::Trip => SearchResponse::Trips(self.search_trips(request)),
            SearchMode::Location | SearchMode::Experience => {
                SearchResponse::Destinations(self.search_destinations(request))
            }
        }
    }
}
