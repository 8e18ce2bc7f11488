//! Coarse cost tiers shared by destinations, trips and criteria.

use thiserror::Error;

/// A cost tier in the inclusive range `1..=5`.
///
/// # Examples
/// ```
/// use roamwise_core::PriceLevel;
///
/// let level = PriceLevel::new(3).expect("valid tier");
/// assert_eq!(level.get(), 3);
/// assert!(PriceLevel::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct PriceLevel(u8);

/// Errors returned by [`PriceLevel::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceLevelError {
    /// The tier was outside `1..=5`.
    #[error("price level {0} is outside the range 1..=5")]
    OutOfRange(u8),
}

impl PriceLevel {
    /// Cheapest tier.
    pub const MIN: Self = Self(1);
    /// Most expensive tier.
    pub const MAX: Self = Self(5);

    /// Validate and construct a tier.
    pub const fn new(value: u8) -> Result<Self, PriceLevelError> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(PriceLevelError::OutOfRange(value))
        }
    }

    /// Construct a tier, clamping `value` into `1..=5`.
    ///
    /// # Examples
    /// ```
    /// use roamwise_core::PriceLevel;
    ///
    /// assert_eq!(PriceLevel::saturating(0), PriceLevel::MIN);
    /// assert_eq!(PriceLevel::saturating(9), PriceLevel::MAX);
    /// ```
    pub fn saturating(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Return the tier as an integer.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterate over every tier from cheapest to most expensive.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl TryFrom<u8> for PriceLevel {
    type Error = PriceLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
