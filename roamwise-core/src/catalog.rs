//! Read-only access to the destination and trip catalogue.
//!
//! The `CatalogProvider` trait hands the engine a snapshot of candidates. The
//! engine never asks for a refresh and never mutates what it receives.

use crate::{Destination, Trip};

/// Supply catalogue snapshots to the search pipeline.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one catalogue
/// can back many sessions.
///
/// # Examples
/// ```
/// use roamwise_core::{CatalogProvider, Destination, InMemoryCatalog, PriceLevel};
///
/// let catalog = InMemoryCatalog::new(
///     vec![Destination::new(1, "Cusco", "Peru", "Andes", PriceLevel::saturating(2))],
///     Vec::new(),
/// );
/// assert_eq!(catalog.destinations().len(), 1);
/// assert!(catalog.trips().is_empty());
/// ```
pub trait CatalogProvider: Send + Sync {
    /// All destinations, in catalogue order.
    fn destinations(&self) -> &[Destination];

    /// All trips, in catalogue order.
    fn trips(&self) -> &[Trip];
}

/// Catalogue held in memory, typically loaded from JSON.
///
/// Either list may be absent from the serialised form.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct InMemoryCatalog {
    destinations: Vec<Destination>,
    trips: Vec<Trip>,
}

impl InMemoryCatalog {
    /// Construct a catalogue from both lists.
    pub const fn new(destinations: Vec<Destination>, trips: Vec<Trip>) -> Self {
        Self {
            destinations,
            trips,
        }
    }

    /// Construct a catalogue holding only destinations.
    pub fn with_destinations<I>(destinations: I) -> Self
    where
        I: IntoIterator<Item = Destination>,
    {
        Self::new(destinations.into_iter().collect(), Vec::new())
    }

    /// Construct a catalogue holding only trips.
    pub fn with_trips<I>(trips: I) -> Self
    where
        I: IntoIterator<Item = Trip>,
    {
        Self::new(Vec::new(), trips.into_iter().collect())
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    fn trips(&self) -> &[Trip] {
        &self.trips
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "serde")]
    #[test]
    fn deserialises_partial_catalogue() {
        let json = r#"{
            "trips": [{
                "id": 1,
                "title": "Island hop",
                "duration_days": 8,
                "budget": 1800.0,
                "price_level": 3
            }]
        }"#;
        let catalog: InMemoryCatalog = serde_json::from_str(json).expect("valid catalogue");
        assert!(catalog.destinations().is_empty());
        assert_eq!(catalog.trips().len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rejects_invalid_price_level() {
        let json = r#"{"destinations": [{
            "id": 1, "name": "X", "country": "Y", "region": "Z", "price_level": 0
        }]}"#;
        assert!(serde_json::from_str::<InMemoryCatalog>(json).is_err());
    }
}
