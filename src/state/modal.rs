//! Modal dialog state for the UI.

/// Section of the filter modal that has keyboard focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterSection {
    /// Agency list.
    #[default]
    Agencies,
    /// Category list.
    Categories,
    /// Start/end date fields.
    Dates,
}

impl FilterSection {
    /// Next section in Tab order (wraps).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Agencies => Self::Categories,
            Self::Categories => Self::Dates,
            Self::Dates => Self::Agencies,
        }
    }

    /// Previous section in Tab order (wraps).
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Agencies => Self::Dates,
            Self::Categories => Self::Agencies,
            Self::Dates => Self::Categories,
        }
    }
}

/// Which date field is being edited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateField {
    /// Lower bound.
    #[default]
    Start,
    /// Upper bound.
    End,
}

/// Cursor state of the open filter modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterModalState {
    /// Focused section.
    pub section: FilterSection,
    /// Highlighted row in the agency list.
    pub agency_cursor: usize,
    /// Highlighted row in the category list.
    pub category_cursor: usize,
    /// Focused date field.
    pub date_field: DateField,
}

/// Active modal dialog, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    /// No modal.
    #[default]
    None,
    /// Full article view for the feed item with this id.
    Detail {
        /// Article id.
        id: String,
        /// Vertical scroll in lines.
        scroll: u16,
    },
    /// Agency/category/date filter editor.
    Filter(FilterModalState),
    /// Free-text search input.
    Search {
        /// Text being typed.
        input: String,
    },
    /// Key binding overview.
    Help,
    /// Message box (dismissed with any key).
    Alert {
        /// Text shown.
        message: String,
    },
}

impl Modal {
    /// Whether any modal is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Tab order cycles through all sections in both directions.
    fn filter_section_cycles() {
        let s = FilterSection::default();
        assert_eq!(s.next().next().next(), s);
        assert_eq!(s.prev(), FilterSection::Dates);
        assert_eq!(s.next().prev(), s);
        assert!(!Modal::None.is_open());
        assert!(Modal::Help.is_open());
    }
}
