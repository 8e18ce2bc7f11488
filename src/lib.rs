//! Facade crate for the Roamwise matching and ranking engine.
//!
//! This crate re-exports the core domain types and the default scorers, and
//! exposes the catalogue search pipeline behind the `search` feature.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "search")]
//! # {
//! use roamwise_engine::{
//!     CatalogSearcher, Destination, ExperienceTag, InMemoryCatalog, LiveSearch, PriceLevel,
//!     SearchMode, SearchSession,
//! };
//!
//! let catalog = InMemoryCatalog::with_destinations([
//!     Destination::new(1, "Gdansk", "Poland", "Europe", PriceLevel::MIN),
//!     Destination::new(2, "Algarve", "Portugal", "Europe", PriceLevel::saturating(3))
//!         .with_attribute(ExperienceTag::BEACH_AND_COAST),
//! ]);
//! let mut live = LiveSearch::new(CatalogSearcher::new(catalog));
//! let mut session = SearchSession::new(SearchMode::Experience);
//! session.staged_mut().toggle_experience(ExperienceTag::BEACH_AND_COAST);
//! session.apply_filters();
//!
//! let top = live
//!     .results(&session)
//!     .destinations()
//!     .and_then(|ranked| ranked.first())
//!     .map(|ranked| ranked.item.name.clone());
//! assert_eq!(top.as_deref(), Some("Algarve"));
//! # }
//! ```

#![forbid(unsafe_code)]

pub use roamwise_core::{
    AvailableActions, BudgetRange, BudgetScope, BudgetType, Candidate, CatalogProvider, Criteria,
    CriteriaStore, Destination, ExperienceTag, FilterPolicy, InMemoryCatalog, MatchScore,
    MatchScorer, MatchTally, PriceLevel, PriceLevelError, RankOnly, Ranked, RankingRule,
    SearchMode, SearchRequest, SearchResponse, SearchSession, SearchState, Searcher,
    SocialProof, StrictFilter, Trip,
};
pub use roamwise_scorer::{DEFAULT_LENGTH_TOLERANCE_DAYS, DestinationMatchScorer, TripMatchScorer};

#[cfg(feature = "search")]
pub use roamwise_search::{CatalogSearcher, LiveSearch};

#[cfg(feature = "test-support")]
pub use roamwise_core::test_support;
