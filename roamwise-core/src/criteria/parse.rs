//! Lenient parsing for criteria typed into free-text fields.
//!
//! Input that cannot be used leaves the criterion absent instead of raising an
//! error, so a half-typed value never breaks a search.

use std::num::NonZeroU32;

use log::debug;

/// Parse a positive whole number such as a day or head count.
///
/// Blank, non-numeric, negative and zero input yields `None`.
pub(crate) fn positive_count(raw: &str) -> Option<NonZeroU32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = trimmed.parse::<u32>().ok().and_then(NonZeroU32::new);
    if parsed.is_none() {
        debug!("ignoring count input {trimmed:?}");
    }
    parsed
}

/// Parse a non-negative, finite monetary amount.
pub(crate) fn amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = trimmed.parse::<f64>().ok().and_then(non_negative);
    if parsed.is_none() {
        debug!("ignoring amount input {trimmed:?}");
    }
    parsed
}

/// Keep `value` only when it is finite and not negative.
pub(crate) fn non_negative(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}
