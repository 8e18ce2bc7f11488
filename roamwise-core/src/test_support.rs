//! Test-only fixtures: a small catalogue and a fixed-score scorer used by
//! unit and behaviour tests across the workspace.

use crate::{
    Criteria, Destination, ExperienceTag, InMemoryCatalog, MatchScore, MatchScorer, MatchTally,
    PriceLevel, Trip,
};

/// Scorer that reports the same percentage for every candidate.
#[derive(Debug, Clone, Copy)]
pub struct FixedScorer(pub MatchScore);

impl<C> MatchScorer<C> for FixedScorer {
    fn tally(&self, _candidate: &C, _criteria: &Criteria) -> MatchTally {
        MatchTally {
            matched: u32::from(self.0.get()),
            total: 100,
        }
    }
}

/// Five destinations with distinct popularity and experiences.
///
/// Catalogue order: Lisbon, Queenstown, Bali, Kyoto, Reykjavik. Popularity
/// (visitor count): 2, 1, 4, 3, 0.
pub fn sample_destinations() -> Vec<Destination> {
    vec![
        Destination::new(1, "Lisbon", "Portugal", "Europe", PriceLevel::saturating(2))
            .with_description("Hilltop viewpoints, trams and pastel de nata")
            .with_attribute(ExperienceTag::CULTURE_AND_HISTORY)
            .with_attribute(ExperienceTag::FOOD_AND_WINE)
            .with_visitor("Ana")
            .with_visitor("Tom"),
        Destination::new(2, "Queenstown", "New Zealand", "Oceania", PriceLevel::saturating(4))
            .with_description("Bungee jumping and alpine lakes")
            .with_attribute(ExperienceTag::ADVENTURE)
            .with_attribute(ExperienceTag::MOUNTAINS_AND_HIKING)
            .with_visitor("Kai"),
        Destination::new(3, "Bali", "Indonesia", "Asia", PriceLevel::saturating(2))
            .with_description("Rice terraces, surf breaks and temples")
            .with_attribute(ExperienceTag::BEACH_AND_COAST)
            .with_attribute(ExperienceTag::RELAXATION_AND_WELLNESS)
            .with_visitor("Mei")
            .with_visitor("Jon")
            .with_visitor("Sam")
            .with_visitor("Ana"),
        Destination::new(4, "Kyoto", "Japan", "Asia", PriceLevel::saturating(3))
            .with_description("Shrines, gardens and kaiseki dinners")
            .with_attribute(ExperienceTag::CULTURE_AND_HISTORY)
            .with_attribute(ExperienceTag::FOOD_AND_WINE)
            .with_visitor("Kai")
            .with_visitor("Tom")
            .with_visitor("Lea"),
        Destination::new(5, "Reykjavik", "Iceland", "Europe", PriceLevel::saturating(5))
            .with_description("Northern lights and geothermal lagoons"),
    ]
}

/// Four trips spanning durations, budgets and price tiers.
///
/// Catalogue order: Temple Trail (7 days, 1200, tier 2), Fjord Explorer
/// (10 days, 3500, tier 4), Tapas Weekend (3 days, 450, tier 2), Reef and
/// Rainforest (14 days, 2800, tier 3).
pub fn sample_trips() -> Vec<Trip> {
    vec![
        Trip::new(1, "Temple Trail", 7, 1_200.0, PriceLevel::saturating(2))
            .with_description("Slow travel through Kyoto and Nara")
            .with_stop("Kyoto")
            .with_stop("Nara")
            .with_tag("culture")
            .with_highlight("Sunrise at Fushimi Inari"),
        Trip::new(2, "Fjord Explorer", 10, 3_500.0, PriceLevel::saturating(4))
            .with_description("Ferries and hikes along the Norwegian coast")
            .with_stop("Bergen")
            .with_stop("Geiranger")
            .with_tag("hiking")
            .with_highlight("Kayaking under waterfalls"),
        Trip::new(3, "Tapas Weekend", 3, 450.0, PriceLevel::saturating(2))
            .with_description("Bar hopping in Andalusia")
            .with_stop("Seville")
            .with_tag("food")
            .with_highlight("Late-night flamenco"),
        Trip::new(4, "Reef and Rainforest", 14, 2_800.0, PriceLevel::saturating(3))
            .with_description("Snorkelling and jungle treks")
            .with_stop("Cairns")
            .with_stop("Daintree")
            .with_tag("beach")
            .with_tag("wildlife")
            .with_highlight("Great Barrier Reef dive"),
    ]
}

/// Catalogue holding [`sample_destinations`] and [`sample_trips`].
pub fn sample_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(sample_destinations(), sample_trips())
}
