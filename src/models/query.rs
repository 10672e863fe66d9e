//! Query state for one dashboard view.

use serde::{Deserialize, Serialize};

/// Filter value meaning "do not constrain this dimension".
///
/// The empty string means the same thing; `-` is accepted as an alias.
pub const ALL_SENTINEL: &str = "all";

/// Current search text and filter selections.
///
/// Values are stored verbatim. Interpreting the sentinel, case and unknown
/// labels is left to [`crate::services::evaluate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Free-form search text.
    pub search_text: String,
    /// Modality selection: empty, a modality label, or the sentinel.
    pub modality_filter: String,
    /// Status selection: empty, a status label, or the sentinel.
    pub status_filter: String,
}

impl QueryState {
    /// Creates a query that matches every record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search_text: String::new(),
            modality_filter: String::new(),
            status_filter: String::new(),
        }
    }

    /// Replaces the search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Replaces the modality selection.
    pub fn set_modality_filter(&mut self, value: impl Into<String>) {
        self.modality_filter = value.into();
    }

    /// Replaces the status selection.
    pub fn set_status_filter(&mut self, value: impl Into<String>) {
        self.status_filter = value.into();
    }

    /// Clears search text and both selections.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Builder form of [`Self::set_search_text`].
    #[must_use]
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.set_search_text(text);
        self
    }

    /// Builder form of [`Self::set_modality_filter`].
    #[must_use]
    pub fn with_modality(mut self, value: impl Into<String>) -> Self {
        self.set_modality_filter(value);
        self
    }

    /// Builder form of [`Self::set_status_filter`].
    #[must_use]
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.set_status_filter(value);
        self
    }

    /// Returns true if no dimension holds any value.
    ///
    /// A query holding only sentinels is not empty but still matches all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty()
            && self.modality_filter.is_empty()
            && self.status_filter.is_empty()
    }
}
