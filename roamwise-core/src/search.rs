//! Requests, responses and the `Searcher` seam.

use crate::{Criteria, Destination, Ranked, SearchMode, Trip};

/// Everything the search pipeline reads, captured at one instant.
///
/// Built by [`SearchSession::request`](crate::SearchSession::request) from the
/// *applied* criteria, so staged edits cannot reach a search.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRequest {
    /// What is being searched.
    pub mode: SearchMode,
    /// Location query; empty means "popular destinations".
    pub query: String,
    /// Applied criteria.
    pub criteria: Criteria,
    /// Whether filters have been committed.
    pub executed: bool,
}

/// Ordered results for one request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "results", rename_all = "snake_case")
)]
pub enum SearchResponse {
    /// Results of a location or experience search.
    Destinations(Vec<Ranked<Destination>>),
    /// Results of a trip search.
    Trips(Vec<Ranked<Trip>>),
}

impl SearchResponse {
    /// Number of results.
    pub fn len(&self) -> usize {
        match self {
            Self::Destinations(results) => results.len(),
            Self::Trips(results) => results.len(),
        }
    }

    /// Report whether the search found nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Destination results, if this was a destination search.
    pub fn destinations(&self) -> Option<&[Ranked<Destination>]> {
        match self {
            Self::Destinations(results) => Some(results),
            Self::Trips(_) => None,
        }
    }

    /// Trip results, if this was a trip search.
    pub fn trips(&self) -> Option<&[Ranked<Trip>]> {
        match self {
            Self::Trips(results) => Some(results),
            Self::Destinations(_) => None,
        }
    }
}

/// Turn a request into an ordered result set.
///
/// Searching is infallible and synchronous: an empty catalogue or unusable
/// criteria yield fewer results, never an error. Implementations must be
/// `Send + Sync`.
pub trait Searcher: Send + Sync {
    /// Filter, score and rank the catalogue for `request`.
    fn search(&self, request: &SearchRequest) -> SearchResponse;
}
