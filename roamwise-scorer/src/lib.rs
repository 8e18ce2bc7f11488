//! Match scoring for Roamwise destinations and trips.
//!
//! Both scorers implement [`MatchScorer`](roamwise_core::MatchScorer) by
//! counting criterion units. A dimension the user left empty contributes no
//! unit at all, so absent criteria never penalise a candidate, and a
//! candidate scored against no active criteria scores 100.
//!
//! - [`DestinationMatchScorer`] counts one unit per selected experience and
//!   one unit for the selected price tiers.
//! - [`TripMatchScorer`] counts one unit per keyword token plus one unit each
//!   for price tier, trip length and budget.
//!
//! # Examples
//!
//! ```
//! use roamwise_core::{Criteria, Destination, MatchScorer, PriceLevel};
//! use roamwise_scorer::DestinationMatchScorer;
//!
//! let beach = Destination::new(1, "Goa", "India", "Asia", PriceLevel::saturating(3))
//!     .with_attribute("Beach & Coast");
//! let criteria = Criteria::new()
//!     .with_experience("Beach & Coast")
//!     .with_price(PriceLevel::saturating(3));
//!
//! assert_eq!(DestinationMatchScorer.score(&beach, &criteria).get(), 100);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod destination;
mod trip;

pub use destination::DestinationMatchScorer;
pub use trip::{DEFAULT_LENGTH_TOLERANCE_DAYS, TripMatchScorer};
