//! Reduce a catalogue to the candidates relevant to a search.
//!
//! Two named policies exist. [`StrictFilter`] drops destinations that do not
//! mention the location query or any keyword. [`RankOnly`] admits every
//! candidate; trip searches use it so trips are re-ordered but never hidden.

use crate::keywords::{any_field_contains, tokenize};
use crate::{Criteria, Destination, SearchMode};

/// A catalogue entry that survived filtering, tagged with its catalogue index.
#[derive(Debug, PartialEq)]
pub struct Candidate<'a, C> {
    /// Position in the catalogue, used for stable fallback ordering.
    pub index: usize,
    /// The catalogue entry.
    pub item: &'a C,
}

impl<C> Clone for Candidate<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Candidate<'_, C> {}

/// Decide which catalogue entries reach scoring.
pub trait FilterPolicy<C> {
    /// Report whether `candidate` is relevant.
    fn admits(&self, candidate: &C) -> bool;

    /// Keep admitted entries in catalogue order.
    fn select<'a>(&self, catalog: &'a [C]) -> Vec<Candidate<'a, C>> {
        catalog
            .iter()
            .enumerate()
            .filter(|(_, item)| self.admits(item))
            .map(|(index, item)| Candidate { index, item })
            .collect()
    }
}

/// Admit every candidate; exclusion happens only through ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOnly;

impl<C> FilterPolicy<C> for RankOnly {
    fn admits(&self, _candidate: &C) -> bool {
        true
    }
}

/// Hard filter for destination searches.
///
/// # Examples
/// ```
/// use roamwise_core::{Destination, FilterPolicy, PriceLevel, StrictFilter};
///
/// let catalog = [
///     Destination::new(1, "Lisbon", "Portugal", "Europe", PriceLevel::MIN),
///     Destination::new(2, "Hanoi", "Vietnam", "Asia", PriceLevel::MIN),
/// ];
/// let hits = StrictFilter::location("port").select(&catalog);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].index, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrictFilter {
    /// Match the query against name, country and region.
    Location {
        /// Lowercased query; empty admits everything.
        needle: String,
    },
    /// Match any token against the descriptive fields and attributes.
    Keywords {
        /// Lowercased tokens; none admits everything.
        tokens: Vec<String>,
    },
}

impl StrictFilter {
    /// Build a location filter from the raw query text.
    pub fn location(query: &str) -> Self {
        Self::Location {
            needle: query.to_lowercase(),
        }
    }

    /// Build a keyword filter from the raw keyword text.
    pub fn keywords(text: &str) -> Self {
        Self::Keywords {
            tokens: tokenize(text),
        }
    }

    /// Pick the destination filter for a search mode.
    ///
    /// Trip searches return `None`: they use [`RankOnly`].
    pub fn for_mode(mode: SearchMode, query: &str, criteria: &Criteria) -> Option<Self> {
        match mode {
            SearchMode::Location => Some(Self::location(query)),
            SearchMode::Experience => Some(Self::keywords(
                criteria.keywords.as_deref().unwrap_or_default(),
            )),
            SearchMode::Trip => None,
        }
    }
}

impl FilterPolicy<Destination> for StrictFilter {
    fn admits(&self, candidate: &Destination) -> bool {
        match self {
            Self::Location { needle } => {
                needle.is_empty()
                    || any_field_contains(
                        [
                            candidate.name.as_str(),
                            candidate.country.as_str(),
                            candidate.region.as_str(),
                        ],
                        needle,
                    )
            }
            Self::Keywords { tokens } => {
                tokens.is_empty()
                    || tokens.iter().any(|token| {
                        any_field_contains(
                            [
                                candidate.name.as_str(),
                                candidate.country.as_str(),
                                candidate.region.as_str(),
                                candidate.description.as_str(),
                            ]
                            .into_iter()
                            .chain(candidate.attributes.iter().map(|tag| tag.as_str())),
                            token,
                        )
                    })
            }
        }
    }
}
