//! Catalogue search pipeline for Roamwise.
//!
//! [`CatalogSearcher`] is the default implementation of the
//! [`Searcher`](roamwise_core::Searcher) trait. Each request runs three
//! stages over a [`CatalogProvider`](roamwise_core::CatalogProvider):
//!
//! 1. **Filter**: destination searches apply a
//!    [`StrictFilter`](roamwise_core::StrictFilter); trip searches use
//!    [`RankOnly`](roamwise_core::RankOnly) so no trip is ever hidden.
//! 2. **Score**: every surviving candidate is scored against the applied
//!    criteria.
//! 3. **Rank**: the [`RankingRule`](roamwise_core::RankingRule) chosen for the
//!    request orders the results.
//!
//! [`LiveSearch`] sits in front of a searcher and reuses the last response
//! until the session's revision moves, so editing staged criteria never
//! triggers a recompute.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod live;
mod searcher;

pub use live::LiveSearch;
pub use searcher::CatalogSearcher;
