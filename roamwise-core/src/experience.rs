//! Experience tags describing what a destination offers.
//!
//! Tags are free-form so catalogues can introduce new experiences without a
//! code change. Matching against criteria is exact; the keyword filter is the
//! only place tags are compared case-insensitively.
//!
//! # Examples
//! ```
//! use roamwise_core::ExperienceTag;
//!
//! let tag = ExperienceTag::new("Beach & Coast");
//! assert_eq!(tag, ExperienceTag::BEACH_AND_COAST.into());
//! assert_eq!(tag.to_string(), "Beach & Coast");
//! ```

use std::borrow::Borrow;

/// A single experience label such as `"Beach & Coast"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ExperienceTag(String);

impl ExperienceTag {
    /// Coastal and beach holidays.
    pub const BEACH_AND_COAST: &'static str = "Beach & Coast";
    /// Mountain scenery and hiking trails.
    pub const MOUNTAINS_AND_HIKING: &'static str = "Mountains & Hiking";
    /// Museums, heritage sites and old towns.
    pub const CULTURE_AND_HISTORY: &'static str = "Culture & History";
    /// Local cuisine, markets and vineyards.
    pub const FOOD_AND_WINE: &'static str = "Food & Wine";
    /// Bars, clubs and late evenings.
    pub const NIGHTLIFE: &'static str = "Nightlife";
    /// Parks, reserves and animal encounters.
    pub const WILDLIFE_AND_NATURE: &'static str = "Wildlife & Nature";
    /// Adrenaline sports and expeditions.
    pub const ADVENTURE: &'static str = "Adventure";
    /// Spas, retreats and slow travel.
    pub const RELAXATION_AND_WELLNESS: &'static str = "Relaxation & Wellness";

    /// Tags offered by the bundled experience picker, in display order.
    pub const WELL_KNOWN: [&'static str; 8] = [
        Self::BEACH_AND_COAST,
        Self::MOUNTAINS_AND_HIKING,
        Self::CULTURE_AND_HISTORY,
        Self::FOOD_AND_WINE,
        Self::NIGHTLIFE,
        Self::WILDLIFE_AND_NATURE,
        Self::ADVENTURE,
        Self::RELAXATION_AND_WELLNESS,
    ];

    /// Construct a tag from any string-like value.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Return the tag label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExperienceTag {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for ExperienceTag {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl Borrow<str> for ExperienceTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExperienceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn sets_can_be_queried_by_str() {
        let tags: BTreeSet<ExperienceTag> = [ExperienceTag::from(ExperienceTag::NIGHTLIFE)]
            .into_iter()
            .collect();
        assert!(tags.contains("Nightlife"));
        assert!(!tags.contains("nightlife"));
    }

    #[test]
    fn well_known_tags_are_unique() {
        let unique: BTreeSet<&str> = ExperienceTag::WELL_KNOWN.into_iter().collect();
        assert_eq!(unique.len(), ExperienceTag::WELL_KNOWN.len());
    }
}
