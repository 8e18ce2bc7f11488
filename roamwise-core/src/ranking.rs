//! Order filtered, scored candidates into the final result sequence.

use std::cmp::Reverse;

use crate::{Candidate, MatchScore, SearchMode, SearchRequest};

/// How a result set is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingRule {
    /// Keep catalogue order; used while browsing.
    CatalogOrder,
    /// Most-visited first; used for a committed location search without a
    /// query.
    Popularity,
    /// Best match first.
    MatchScore,
}

impl RankingRule {
    /// Pick the rule for a request.
    ///
    /// Trips are never hard-filtered, so trip searches always rank by match
    /// score, committed or not.
    ///
    /// # Examples
    /// ```
    /// use roamwise_core::{Criteria, RankingRule, SearchMode, SearchRequest};
    ///
    /// let request = SearchRequest {
    ///     mode: SearchMode::Location,
    ///     query: String::new(),
    ///     criteria: Criteria::new(),
    ///     executed: true,
    /// };
    /// assert_eq!(RankingRule::for_request(&request), RankingRule::Popularity);
    /// ```
    pub fn for_request(request: &SearchRequest) -> Self {
        match request.mode {
            SearchMode::Trip => Self::MatchScore,
            _ if !request.executed => Self::CatalogOrder,
            SearchMode::Location if request.query.is_empty() => Self::Popularity,
            SearchMode::Location | SearchMode::Experience => Self::MatchScore,
        }
    }
}

/// A candidate together with its match score.
#[derive(Debug, PartialEq)]
pub struct Scored<'a, C> {
    /// The filtered candidate.
    pub candidate: Candidate<'a, C>,
    /// Match score against the applied criteria.
    pub score: MatchScore,
}

/// One entry of a result set.
///
/// `match_percentage` is `None` while the session is browsing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranked<T> {
    /// The catalogue entry.
    pub item: T,
    /// Position in the catalogue.
    pub catalog_index: usize,
    /// Match percentage, once filters are committed.
    pub match_percentage: Option<MatchScore>,
}

impl<T: Clone> Ranked<&T> {
    /// Detach the entry from the catalogue by cloning the item.
    pub fn cloned(&self) -> Ranked<T> {
        Ranked {
            item: self.item.clone(),
            catalog_index: self.catalog_index,
            match_percentage: self.match_percentage,
        }
    }
}

/// Sort `scored` by `rule` and attach percentages when `executed`.
///
/// Every sort is stable, and ties keep catalogue order. `popularity` is only
/// consulted under [`RankingRule::Popularity`].
pub fn rank<'a, C, P>(
    mut scored: Vec<Scored<'a, C>>,
    rule: RankingRule,
    executed: bool,
    popularity: P,
) -> Vec<Ranked<&'a C>>
where
    P: Fn(&C) -> usize,
{
    scored.sort_by_key(|entry| entry.candidate.index);
    match rule {
        RankingRule::CatalogOrder => {}
        RankingRule::Popularity => {
            scored.sort_by_key(|entry| Reverse(popularity(entry.candidate.item)));
        }
        RankingRule::MatchScore => scored.sort_by_key(|entry| Reverse(entry.score)),
    }
    scored
        .into_iter()
        .map(|entry| Ranked {
            item: entry.candidate.item,
            catalog_index: entry.candidate.index,
            match_percentage: executed.then_some(entry.score),
        })
        .collect()
}
