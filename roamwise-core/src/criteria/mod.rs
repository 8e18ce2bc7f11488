//! Search criteria selected by a user.
//!
//! A [`Criteria`] value is plain data: it is edited through a
//! [`CriteriaStore`] and only influences results once applied.

use std::collections::BTreeSet;
use std::num::NonZeroU32;

use crate::{ExperienceTag, PriceLevel, keywords};

mod parse;
mod store;

pub use store::CriteriaStore;

/// How the user expresses what they want to spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BudgetType {
    /// Coarse price tiers via [`Criteria::price_ratings`].
    #[default]
    Estimate,
    /// Explicit bounds via [`Criteria::min_budget`] and [`Criteria::max_budget`].
    Actual,
}

/// Whether budget bounds are per traveller or for the whole party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BudgetScope {
    /// Bounds apply to each traveller.
    #[default]
    PerPerson,
    /// Bounds apply to the party as a whole.
    Total,
}

impl std::str::FromStr for BudgetScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "per_person" | "person" => Ok(Self::PerPerson),
            "total" => Ok(Self::Total),
            _ => Err(format!("unknown budget scope '{s}'")),
        }
    }
}

/// Inclusive budget bounds with open ends where no bound was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetRange {
    /// Lower bound, `0.0` when unset.
    pub min: f64,
    /// Upper bound, infinite when unset.
    pub max: f64,
}

impl BudgetRange {
    /// Report whether `amount` lies within the bounds.
    pub fn contains(&self, amount: f64) -> bool {
        self.min <= amount && amount <= self.max
    }
}

/// One set of user-selected filters.
///
/// Absent values never penalise a candidate; they simply contribute no
/// criterion unit to the match score.
///
/// # Examples
/// ```
/// use roamwise_core::{BudgetType, Criteria, PriceLevel};
///
/// let mut criteria = Criteria::new()
///     .with_experience("Beach & Coast")
///     .with_price(PriceLevel::saturating(2));
/// assert!(criteria.has_values());
///
/// criteria.set_budget_type(BudgetType::Actual);
/// assert!(criteria.price_ratings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Criteria {
    /// Selected experience tags.
    pub experience_filters: BTreeSet<ExperienceTag>,
    /// Selected price tiers.
    pub price_ratings: BTreeSet<PriceLevel>,
    /// Party size.
    pub number_of_people: Option<NonZeroU32>,
    /// Desired trip length in days.
    pub trip_days: Option<NonZeroU32>,
    budget_type: BudgetType,
    /// Lower budget bound.
    pub min_budget: Option<f64>,
    /// Upper budget bound.
    pub max_budget: Option<f64>,
    /// Whether the bounds are per person or in total.
    pub budget_scope: BudgetScope,
    /// Free-text keywords for trip and experience searches.
    pub keywords: Option<String>,
}

impl Criteria {
    /// Construct empty criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return how the budget is expressed.
    pub const fn budget_type(&self) -> BudgetType {
        self.budget_type
    }

    /// Switch how the budget is expressed.
    ///
    /// Switching discards the values owned by the other representation:
    /// `Estimate` clears the budget bounds and `Actual` clears the price
    /// tiers. Selecting the current type changes nothing.
    pub fn set_budget_type(&mut self, budget_type: BudgetType) {
        if self.budget_type == budget_type {
            return;
        }
        match budget_type {
            BudgetType::Estimate => {
                self.min_budget = None;
                self.max_budget = None;
            }
            BudgetType::Actual => self.price_ratings.clear(),
        }
        self.budget_type = budget_type;
    }

    /// Toggle an experience tag, returning whether it is now selected.
    pub fn toggle_experience(&mut self, tag: impl Into<ExperienceTag>) -> bool {
        let selected: ExperienceTag = tag.into();
        if self.experience_filters.remove(&selected) {
            false
        } else {
            self.experience_filters.insert(selected);
            true
        }
    }

    /// Toggle a price tier, returning whether it is now selected.
    pub fn toggle_price(&mut self, level: PriceLevel) -> bool {
        if self.price_ratings.remove(&level) {
            false
        } else {
            self.price_ratings.insert(level);
            true
        }
    }

    /// Set the trip length from free text; unusable input clears it.
    pub fn set_trip_days_text(&mut self, raw: &str) {
        self.trip_days = parse::positive_count(raw);
    }

    /// Set the party size from free text; unusable input clears it.
    pub fn set_number_of_people_text(&mut self, raw: &str) {
        self.number_of_people = parse::positive_count(raw);
    }

    /// Set the lower budget bound from free text; unusable input clears it.
    pub fn set_min_budget_text(&mut self, raw: &str) {
        self.min_budget = parse::amount(raw);
    }

    /// Set the upper budget bound from free text; unusable input clears it.
    pub fn set_max_budget_text(&mut self, raw: &str) {
        self.max_budget = parse::amount(raw);
    }

    /// Set the keywords; blank text clears them.
    pub fn set_keywords(&mut self, raw: impl Into<String>) {
        let text = raw.into();
        self.keywords = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
    }

    /// Add an experience tag while returning `self` for chaining.
    #[must_use]
    pub fn with_experience(mut self, tag: impl Into<ExperienceTag>) -> Self {
        self.experience_filters.insert(tag.into());
        self
    }

    /// Add a price tier while returning `self` for chaining.
    #[must_use]
    pub fn with_price(mut self, level: PriceLevel) -> Self {
        self.price_ratings.insert(level);
        self
    }

    /// Set the trip length while returning `self` for chaining.
    ///
    /// Zero days leaves the criterion absent.
    #[must_use]
    pub fn with_trip_days(mut self, days: u32) -> Self {
        self.trip_days = NonZeroU32::new(days);
        self
    }

    /// Set the party size while returning `self` for chaining.
    #[must_use]
    pub fn with_people(mut self, people: u32) -> Self {
        self.number_of_people = NonZeroU32::new(people);
        self
    }

    /// Switch to explicit budget bounds while returning `self` for chaining.
    ///
    /// Negative or non-finite bounds are dropped.
    #[must_use]
    pub fn with_budget(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.set_budget_type(BudgetType::Actual);
        self.min_budget = min.and_then(parse::non_negative);
        self.max_budget = max.and_then(parse::non_negative);
        self
    }

    /// Set the budget scope while returning `self` for chaining.
    #[must_use]
    pub const fn with_budget_scope(mut self, scope: BudgetScope) -> Self {
        self.budget_scope = scope;
        self
    }

    /// Set the keywords while returning `self` for chaining.
    #[must_use]
    pub fn with_keywords(mut self, raw: impl Into<String>) -> Self {
        self.set_keywords(raw);
        self
    }

    /// Lowercased keyword tokens; empty when no keywords are set.
    pub fn keyword_tokens(&self) -> Vec<String> {
        self.keywords
            .as_deref()
            .map(keywords::tokenize)
            .unwrap_or_default()
    }

    /// Budget bounds, when at least one bound is set.
    pub fn budget_range(&self) -> Option<BudgetRange> {
        if self.min_budget.is_none() && self.max_budget.is_none() {
            return None;
        }
        Some(BudgetRange {
            min: self.min_budget.unwrap_or(0.0),
            max: self.max_budget.unwrap_or(f64::INFINITY),
        })
    }

    /// Report whether any filter value is populated.
    ///
    /// The budget type and scope are presentation choices and do not count.
    pub fn has_values(&self) -> bool {
        !self.experience_filters.is_empty()
            || !self.price_ratings.is_empty()
            || self.number_of_people.is_some()
            || self.trip_days.is_some()
            || self.min_budget.is_some()
            || self.max_budget.is_some()
            || self.keywords.is_some()
    }

    /// Reset every value, including budget type and scope.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
