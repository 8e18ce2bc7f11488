//! Search sessions and the browse/ranked state machine.
//!
//! A session owns the [`CriteriaStore`] plus the mode and query the user is
//! searching with. It decides when results are shown unranked (`Browsing`)
//! and when they are ranked (`Ranked`), and it counts revisions so callers
//! can tell when a result set has gone stale.

use log::debug;

use crate::{Criteria, CriteriaStore, SearchRequest};

/// What the user is searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SearchMode {
    /// Destinations by place name.
    #[default]
    Location,
    /// Destinations by experience keywords.
    Experience,
    /// User-authored trips.
    Trip,
}

impl SearchMode {
    /// Return the mode as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Experience => "experience",
            Self::Trip => "trip",
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "location" => Ok(Self::Location),
            "experience" => Ok(Self::Experience),
            "trip" | "trips" => Ok(Self::Trip),
            _ => Err(format!("unknown search mode '{s}'")),
        }
    }
}

/// Whether the current result set is ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    /// Filters not committed; results appear in catalogue order.
    #[default]
    Browsing,
    /// Filters committed; results are ranked.
    Ranked,
}

/// Which filter-panel actions make sense right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailableActions {
    /// "Apply" would change what is shown.
    pub apply: bool,
    /// "Clear All" would change what is shown or edited.
    pub clear_all: bool,
}

/// A single user's search: mode, query, criteria and execution state.
///
/// # Examples
/// ```
/// use roamwise_core::{SearchMode, SearchSession, SearchState};
///
/// let mut session = SearchSession::new(SearchMode::Experience);
/// session.staged_mut().toggle_experience("Adventure");
/// assert_eq!(session.state(), SearchState::Browsing);
///
/// session.apply_filters();
/// assert_eq!(session.state(), SearchState::Ranked);
/// assert!(session.request().executed);
///
/// session.clear_all_filters();
/// assert_eq!(session.state(), SearchState::Browsing);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    mode: SearchMode,
    query: String,
    criteria: CriteriaStore,
    state: SearchState,
    revision: u64,
}

impl SearchSession {
    /// Start browsing in `mode` with no query and no criteria.
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            query: String::new(),
            criteria: CriteriaStore::new(),
            state: SearchState::Browsing,
            revision: 0,
        }
    }

    /// Start a session from initial criteria.
    ///
    /// Non-empty criteria count as already applied, so the session starts
    /// ranked.
    pub fn seeded(mode: SearchMode, seed: Criteria) -> Self {
        let state = if seed.has_values() {
            SearchState::Ranked
        } else {
            SearchState::Browsing
        };
        Self {
            mode,
            query: String::new(),
            criteria: CriteriaStore::seeded(seed),
            state,
            revision: 0,
        }
    }

    /// Set the query while returning `self` for chaining.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    /// Current search mode.
    pub const fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Current location query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current execution state.
    pub const fn state(&self) -> SearchState {
        self.state
    }

    /// Report whether filters have been committed.
    pub fn is_executed(&self) -> bool {
        self.state == SearchState::Ranked
    }

    /// Counter bumped whenever the result set must be recomputed.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Both criteria records.
    pub const fn criteria(&self) -> &CriteriaStore {
        &self.criteria
    }

    /// Criteria being edited.
    pub const fn staged(&self) -> &Criteria {
        self.criteria.staged()
    }

    /// Mutable access to the criteria being edited.
    ///
    /// Edits never invalidate the current result set.
    pub const fn staged_mut(&mut self) -> &mut Criteria {
        self.criteria.staged_mut()
    }

    /// Criteria in effect for the current result set.
    pub const fn applied(&self) -> &Criteria {
        self.criteria.applied()
    }

    /// Switch the search mode.
    pub fn set_mode(&mut self, mode: SearchMode) {
        if self.mode != mode {
            debug!("search mode {} -> {mode}", self.mode);
            self.mode = mode;
            self.bump();
        }
    }

    /// Replace the location query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let text = query.into();
        if self.query != text {
            self.query = text;
            self.bump();
        }
    }

    /// Commit staged criteria and rank results.
    pub fn apply_filters(&mut self) {
        self.criteria.apply();
        self.state = SearchState::Ranked;
        debug!(
            "applied filters (revision {})",
            self.revision.saturating_add(1)
        );
        self.bump();
    }

    /// Reset both criteria records and return to browsing.
    pub fn clear_all_filters(&mut self) {
        self.criteria.clear_all();
        self.state = SearchState::Browsing;
        debug!(
            "cleared filters (revision {})",
            self.revision.saturating_add(1)
        );
        self.bump();
    }

    /// Which of "Apply" and "Clear All" would have an effect.
    pub fn available_actions(&self) -> AvailableActions {
        let browsing = self.state == SearchState::Browsing;
        AvailableActions {
            apply: browsing || self.criteria.has_pending_changes(),
            clear_all: !browsing || self.staged().has_values() || self.applied().has_values(),
        }
    }

    /// Snapshot of everything the search pipeline needs.
    pub fn request(&self) -> SearchRequest {
        SearchRequest {
            mode: self.mode,
            query: self.query.clone(),
            criteria: self.applied().clone(),
            executed: self.is_executed(),
        }
    }

    const fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SearchMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PriceLevel;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn new_session_is_browsing() {
        let session = SearchSession::new(SearchMode::Location);
        assert_eq!(session.state(), SearchState::Browsing);
        assert!(!session.request().executed);
    }

    #[test]
    fn seeding_with_filters_counts_as_applied() {
        let seed = Criteria::new().with_experience("Nightlife");
        let session = SearchSession::seeded(SearchMode::Experience, seed.clone());
        assert_eq!(session.state(), SearchState::Ranked);
        assert_eq!(session.applied(), &seed);
    }

    #[test]
    fn seeding_without_filters_stays_browsing() {
        let session = SearchSession::seeded(SearchMode::Trip, Criteria::new());
        assert_eq!(session.state(), SearchState::Browsing);
    }

    #[test]
    fn staged_edits_do_not_bump_revision() {
        let mut session = SearchSession::new(SearchMode::Trip);
        let before = session.revision();
        session.staged_mut().toggle_price(PriceLevel::MIN);
        assert_eq!(session.revision(), before);
        assert!(session.request().criteria.price_ratings.is_empty());
    }

    #[test]
    fn transitions_bump_revision() {
        let mut session = SearchSession::new(SearchMode::Location);
        session.apply_filters();
        session.clear_all_filters();
        session.set_mode(SearchMode::Trip);
        session.set_query("rome");
        assert_eq!(session.revision(), 4);
    }

    #[test]
    fn unchanged_mode_and_query_keep_revision() {
        let mut session = SearchSession::new(SearchMode::Trip).with_query("rome");
        let before = session.revision();
        session.set_mode(SearchMode::Trip);
        session.set_query("rome");
        assert_eq!(session.revision(), before);
    }

    #[test]
    fn clear_all_resets_both_layers() {
        let mut session = SearchSession::new(SearchMode::Experience);
        session.staged_mut().toggle_experience("Adventure");
        session.apply_filters();
        session.staged_mut().set_keywords("rafting");
        session.clear_all_filters();
        assert!(!session.staged().has_values());
        assert!(!session.applied().has_values());
        assert!(!session.is_executed());
    }

    #[test]
    fn available_actions_follow_state() {
        let mut session = SearchSession::new(SearchMode::Location);
        assert_eq!(
            session.available_actions(),
            AvailableActions {
                apply: true,
                clear_all: false
            }
        );

        session.apply_filters();
        assert_eq!(
            session.available_actions(),
            AvailableActions {
                apply: false,
                clear_all: true
            }
        );

        session.staged_mut().toggle_price(PriceLevel::MAX);
        assert!(session.available_actions().apply);
    }

    #[rstest]
    #[case("location", SearchMode::Location)]
    #[case("Experience", SearchMode::Experience)]
    #[case("trips", SearchMode::Trip)]
    fn parses_modes(#[case] raw: &str, #[case] expected: SearchMode) {
        assert_eq!(SearchMode::from_str(raw), Ok(expected));
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = SearchMode::from_str("cruise").expect_err("unknown mode");
        assert!(err.contains("unknown search mode"));
    }
}
