//! Recompute gate between a search session and a searcher.

use log::debug;
use roamwise_core::{SearchRequest, SearchResponse, SearchSession, Searcher};

#[derive(Debug, Clone)]
struct CachedResponse {
    revision: u64,
    request: SearchRequest,
    response: SearchResponse,
}

/// Serves results for one session, searching again only after its revision
/// changes.
///
/// Staged edits leave the revision untouched, so callers may ask for results
/// after every keystroke without re-running the pipeline.
///
/// # Examples
///
/// ```
/// use roamwise_core::{ExperienceTag, InMemoryCatalog, SearchMode, SearchSession};
/// use roamwise_search::{CatalogSearcher, LiveSearch};
///
/// let mut live = LiveSearch::new(CatalogSearcher::new(InMemoryCatalog::default()));
/// let mut session = SearchSession::new(SearchMode::Experience);
///
/// live.results(&session);
/// session.staged_mut().toggle_experience(ExperienceTag::ADVENTURE);
/// live.results(&session);
/// assert_eq!(live.recomputations(), 1);
///
/// session.apply_filters();
/// live.results(&session);
/// assert_eq!(live.recomputations(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LiveSearch<S>
where
    S: Searcher,
{
    searcher: S,
    cached: Option<CachedResponse>,
    recomputations: u64,
}

impl<S> LiveSearch<S>
where
    S: Searcher,
{
    /// Wrap `searcher` with an empty cache.
    #[must_use]
    pub const fn new(searcher: S) -> Self {
        Self {
            searcher,
            cached: None,
            recomputations: 0,
        }
    }

    /// Return results for the session's committed state.
    ///
    /// The wrapped searcher runs only when nothing is cached or the cached
    /// response belongs to another revision or another request. Revisions
    /// are per session, so the request comparison keeps two sessions at the
    /// same revision apart.
    pub fn results(&mut self, session: &SearchSession) -> &SearchResponse {
        let revision = session.revision();
        let request = session.request();
        let current = match self.cached.take() {
            Some(cached) if cached.revision == revision && cached.request == request => cached,
            _ => {
                debug!("searching for revision {revision}");
                self.recomputations = self.recomputations.saturating_add(1);
                let response = self.searcher.search(&request);
                CachedResponse {
                    revision,
                    request,
                    response,
                }
            }
        };
        &self.cached.insert(current).response
    }

    /// Number of times the wrapped searcher has run.
    #[must_use]
    pub const fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Drop the cached response so the next call searches again.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Borrow the wrapped searcher.
    #[must_use]
    pub const fn searcher(&self) -> &S {
        &self.searcher
    }
}
