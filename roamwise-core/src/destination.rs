//! Destinations offered by the catalogue.

use std::collections::BTreeSet;

use crate::{ExperienceTag, PriceLevel};

/// A place travellers can visit.
///
/// Destinations are read-only snapshots handed over by a
/// [`CatalogProvider`](crate::CatalogProvider); the engine never mutates them.
///
/// # Examples
/// ```
/// use roamwise_core::{Destination, PriceLevel};
///
/// let lisbon = Destination::new(1, "Lisbon", "Portugal", "Europe", PriceLevel::saturating(2))
///     .with_attribute("Culture & History")
///     .with_visitor("Ana");
///
/// assert!(lisbon.attributes.contains("Culture & History"));
/// assert_eq!(lisbon.popularity(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    /// Stable identifier.
    pub id: u64,
    /// Display name, e.g. a city.
    pub name: String,
    /// Country the destination belongs to.
    pub country: String,
    /// Broader region, e.g. a continent or coastline.
    pub region: String,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Experiences the destination offers.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: BTreeSet<ExperienceTag>,
    /// Coarse cost tier.
    pub price_level: PriceLevel,
    /// Travellers who have been there, most recent first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visited_by: Vec<String>,
}

/// Names to show next to a destination plus how many travellers were left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialProof<'a> {
    /// The first travellers, in catalogue order.
    pub names: &'a [String],
    /// Count of travellers not included in `names`.
    pub others: usize,
}

impl Destination {
    /// Construct a destination without description, attributes or visitors.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        country: impl Into<String>,
        region: impl Into<String>,
        price_level: PriceLevel,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
            region: region.into(),
            description: String::new(),
            attributes: BTreeSet::new(),
            price_level,
            visited_by: Vec::new(),
        }
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add an experience tag while returning `self` for chaining.
    #[must_use]
    pub fn with_attribute(mut self, tag: impl Into<ExperienceTag>) -> Self {
        self.attributes.insert(tag.into());
        self
    }

    /// Append a traveller while returning `self` for chaining.
    #[must_use]
    pub fn with_visitor(mut self, name: impl Into<String>) -> Self {
        self.visited_by.push(name.into());
        self
    }

    /// Number of travellers who visited; the popularity ranking key.
    pub fn popularity(&self) -> usize {
        self.visited_by.len()
    }

    /// Split the visitor list for a "visited by A, B and N others" line.
    ///
    /// # Examples
    /// ```
    /// use roamwise_core::{Destination, PriceLevel};
    ///
    /// let kyoto = Destination::new(7, "Kyoto", "Japan", "Asia", PriceLevel::saturating(3))
    ///     .with_visitor("Mei")
    ///     .with_visitor("Jon")
    ///     .with_visitor("Sam");
    /// let proof = kyoto.social_proof(2);
    /// assert_eq!(proof.names, ["Mei".to_owned(), "Jon".to_owned()]);
    /// assert_eq!(proof.others, 1);
    /// ```
    pub fn social_proof(&self, limit: usize) -> SocialProof<'_> {
        let shown = limit.min(self.visited_by.len());
        let (names, rest) = self.visited_by.split_at(shown);
        SocialProof {
            names,
            others: rest.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn visited(count: usize) -> Destination {
        (0..count).fold(
            Destination::new(1, "Oslo", "Norway", "Europe", PriceLevel::MAX),
            |dest, n| dest.with_visitor(format!("traveller-{n}")),
        )
    }

    #[rstest]
    #[case(0, 3, 0, 0)]
    #[case(2, 3, 2, 0)]
    #[case(5, 3, 3, 2)]
    #[case(5, 0, 0, 5)]
    fn social_proof_splits_visitors(
        #[case] visitors: usize,
        #[case] limit: usize,
        #[case] shown: usize,
        #[case] others: usize,
    ) {
        let dest = visited(visitors);
        let proof = dest.social_proof(limit);
        assert_eq!(proof.names.len(), shown);
        assert_eq!(proof.others, others);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_optional_fields_default_to_empty() {
        let json = r#"{
            "id": 4,
            "name": "Reykjavik",
            "country": "Iceland",
            "region": "Europe",
            "price_level": 4
        }"#;
        let dest: Destination = serde_json::from_str(json).expect("valid destination");
        assert!(dest.attributes.is_empty());
        assert!(dest.visited_by.is_empty());
        assert!(dest.description.is_empty());
    }
}
