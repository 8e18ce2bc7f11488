//! User-authored trip itineraries.

use std::collections::BTreeSet;

use crate::PriceLevel;

/// A multi-stop itinerary shared by another traveller.
///
/// # Examples
/// ```
/// use roamwise_core::{PriceLevel, Trip};
///
/// let trip = Trip::new(3, "Alpine loop", 9, 2_400.0, PriceLevel::saturating(4))
///     .with_stop("Zermatt")
///     .with_stop("Chamonix")
///     .with_tag("hiking");
/// assert_eq!(trip.destinations, ["Zermatt", "Chamonix"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    /// Stable identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Author-supplied tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: BTreeSet<String>,
    /// Free-text highlights.
    #[cfg_attr(feature = "serde", serde(default))]
    pub highlights: Vec<String>,
    /// Stop names in travel order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub destinations: Vec<String>,
    /// Length of the trip in days.
    pub duration_days: u32,
    /// Total cost of the trip.
    pub budget: f64,
    /// Coarse cost tier.
    pub price_level: PriceLevel,
}

impl Trip {
    /// Construct a trip without description, tags, highlights or stops.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        duration_days: u32,
        budget: f64,
        price_level: PriceLevel,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            tags: BTreeSet::new(),
            highlights: Vec::new(),
            destinations: Vec::new(),
            duration_days,
            budget,
            price_level,
        }
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a tag while returning `self` for chaining.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Append a highlight while returning `self` for chaining.
    #[must_use]
    pub fn with_highlight(mut self, highlight: impl Into<String>) -> Self {
        self.highlights.push(highlight.into());
        self
    }

    /// Append a stop while returning `self` for chaining.
    #[must_use]
    pub fn with_stop(mut self, stop: impl Into<String>) -> Self {
        self.destinations.push(stop.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_preserve_order() {
        let trip = Trip::new(1, "Coast", 5, 900.0, PriceLevel::MIN)
            .with_stop("Porto")
            .with_stop("Lisbon")
            .with_stop("Lagos");
        assert_eq!(trip.destinations, ["Porto", "Lisbon", "Lagos"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_lists_default_to_empty() {
        let json = r#"{
            "id": 2,
            "title": "Weekend in Rome",
            "duration_days": 3,
            "budget": 650.0,
            "price_level": 3
        }"#;
        let trip: Trip = serde_json::from_str(json).expect("valid trip");
        assert!(trip.tags.is_empty());
        assert!(trip.highlights.is_empty());
        assert!(trip.destinations.is_empty());
    }
}
