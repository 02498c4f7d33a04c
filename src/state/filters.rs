//! Multi-select filter state edited in the filter modal.

use crate::state::types::ActiveFilter;

/// What: Agencies and categories picked in the filter modal, plus date bounds.
///
/// Details:
/// - Ids keep insertion order and appear at most once per set.
/// - Only the first agency and first category reach the query (see [`SelectedFilters::apply`]);
///   the backend accepts a single id per dimension.
/// - Date bounds are kept for display; the news endpoint has no date parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedFilters {
    agencies: Vec<i64>,
    categories: Vec<i64>,
    /// Start date as typed (`YYYY-MM-DD`), empty when unset.
    pub start_date: String,
    /// End date as typed (`YYYY-MM-DD`), empty when unset.
    pub end_date: String,
}

/// Insert `id` when absent, remove it when present. Returns whether it is now selected.
fn toggle_id(ids: &mut Vec<i64>, id: i64) -> bool {
    if let Some(pos) = ids.iter().position(|x| *x == id) {
        ids.remove(pos);
        false
    } else {
        ids.push(id);
        true
    }
}

/// Remove `id`; returns whether it was selected.
fn remove_id(ids: &mut Vec<i64>, id: i64) -> bool {
    let before = ids.len();
    ids.retain(|x| *x != id);
    ids.len() != before
}

impl SelectedFilters {
    /// Selected agency ids in selection order.
    #[must_use]
    pub fn agencies(&self) -> &[i64] {
        &self.agencies
    }

    /// Selected category ids in selection order.
    #[must_use]
    pub fn categories(&self) -> &[i64] {
        &self.categories
    }

    /// Whether the agency is selected.
    #[must_use]
    pub fn has_agency(&self, id: i64) -> bool {
        self.agencies.contains(&id)
    }

    /// Whether the category is selected.
    #[must_use]
    pub fn has_category(&self, id: i64) -> bool {
        self.categories.contains(&id)
    }

    /// Toggle an agency; returns whether it is now selected.
    pub fn toggle_agency(&mut self, id: i64) -> bool {
        toggle_id(&mut self.agencies, id)
    }

    /// Toggle a category; returns whether it is now selected.
    pub fn toggle_category(&mut self, id: i64) -> bool {
        toggle_id(&mut self.categories, id)
    }

    /// Remove an agency chip; returns whether anything changed.
    pub fn remove_agency(&mut self, id: i64) -> bool {
        remove_id(&mut self.agencies, id)
    }

    /// Remove a category chip; returns whether anything changed.
    pub fn remove_category(&mut self, id: i64) -> bool {
        remove_id(&mut self.categories, id)
    }

    /// Set the start date text (trimmed).
    pub fn set_start_date(&mut self, value: &str) {
        self.start_date = value.trim().to_string();
    }

    /// Set the end date text (trimmed).
    pub fn set_end_date(&mut self, value: &str) {
        self.end_date = value.trim().to_string();
    }

    /// Drop every selection and both dates.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agencies.is_empty()
            && self.categories.is_empty()
            && self.start_date.is_empty()
            && self.end_date.is_empty()
    }

    /// What: Project the selection onto the single-valued query filter.
    ///
    /// Output:
    /// - First selected agency and first selected category; `q` unset.
    #[must_use]
    pub fn apply(&self) -> ActiveFilter {
        ActiveFilter {
            agency_id: self.agencies.first().copied(),
            category_id: self.categories.first().copied(),
            q: None,
        }
    }
}
