//! Staged and applied criteria kept side by side.

use super::Criteria;

/// Two independent criteria records: the one being edited and the one in
/// effect for the current result set.
///
/// Edits land in `staged` and stay invisible to searches until
/// [`CriteriaStore::apply`] copies them over.
///
/// # Examples
/// ```
/// use roamwise_core::{Criteria, CriteriaStore};
///
/// let mut store = CriteriaStore::new();
/// store.staged_mut().toggle_experience("Nightlife");
/// assert!(store.applied().experience_filters.is_empty());
///
/// store.apply();
/// assert!(store.applied().experience_filters.contains("Nightlife"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CriteriaStore {
    staged: Criteria,
    applied: Criteria,
}

impl CriteriaStore {
    /// Construct a store with both records empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a store with both records set to `seed`.
    pub fn seeded(seed: Criteria) -> Self {
        Self {
            staged: seed.clone(),
            applied: seed,
        }
    }

    /// Criteria being edited.
    pub const fn staged(&self) -> &Criteria {
        &self.staged
    }

    /// Mutable access to the criteria being edited.
    pub const fn staged_mut(&mut self) -> &mut Criteria {
        &mut self.staged
    }

    /// Criteria in effect for the current result set.
    pub const fn applied(&self) -> &Criteria {
        &self.applied
    }

    /// Report whether staged edits have not been applied yet.
    pub fn has_pending_changes(&self) -> bool {
        self.staged != self.applied
    }

    /// Copy the staged criteria into the applied record.
    pub fn apply(&mut self) {
        self.applied.clone_from(&self.staged);
    }

    /// Reset both records to empty criteria.
    pub fn clear_all(&mut self) {
        self.staged.clear();
        self.applied.clear();
    }
}
