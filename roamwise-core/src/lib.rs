//! Core domain types for the Roamwise discovery engine.
//!
//! The crate models catalogue entries ([`Destination`], [`Trip`]), the
//! criteria a user selects ([`Criteria`], kept as staged and applied records
//! in a [`CriteriaStore`]), and the stages of a search: filter policies,
//! the [`MatchScorer`] seam and ranking. A [`SearchSession`] tracks whether
//! results are browsed or ranked.
//!
//! Everything here is synchronous and infallible at search time; unusable
//! input reduces how much a search discriminates instead of failing it.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod criteria;
pub mod destination;
pub mod experience;
pub mod filter;
pub mod keywords;
pub mod price;
pub mod ranking;
pub mod scorer;
pub mod search;
pub mod session;
pub mod trip;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{CatalogProvider, InMemoryCatalog};
pub use criteria::{BudgetRange, BudgetScope, BudgetType, Criteria, CriteriaStore};
pub use destination::{Destination, SocialProof};
pub use experience::ExperienceTag;
pub use filter::{Candidate, FilterPolicy, RankOnly, StrictFilter};
pub use price::{PriceLevel, PriceLevelError};
pub use ranking::{Ranked, RankingRule, Scored, rank};
pub use scorer::{MatchScore, MatchScorer, MatchTally};
pub use search::{SearchRequest, SearchResponse, Searcher};
pub use session::{AvailableActions, SearchMode, SearchSession, SearchState};
pub use trip::Trip;
