//! One dashboard view session.
//!
//! The session owns the catalog store, the query state and the navigator for
//! as long as the view is open. Every accessor recomputes the visible list
//! from scratch, so there is no cached state to invalidate.

use super::{Affordance, Navigator, NoopNavigator, evaluate};
use crate::catalog::CatalogStore;
use crate::models::{ModelId, ModelRecord, QueryState};

/// View-session state: catalog toggles plus query.
#[derive(Debug)]
pub struct DashboardSession {
    store: CatalogStore,
    query: QueryState,
    navigator: Box<dyn Navigator>,
}

impl DashboardSession {
    /// Opens a session over `store` with an empty query.
    #[must_use]
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            query: QueryState::new(),
            navigator: Box::new(NoopNavigator),
        }
    }

    /// Opens a session over the built-in catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(CatalogStore::seeded())
    }

    /// Routes affordances to `navigator` instead of dropping them.
    #[must_use]
    pub fn with_navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Box::new(navigator);
        self
    }

    /// The catalog store.
    #[must_use]
    pub const fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// The current query.
    #[must_use]
    pub const fn query(&self) -> &QueryState {
        &self.query
    }

    /// Records visible under the current query, in catalog order.
    #[must_use]
    pub fn visible(&self) -> Vec<&ModelRecord> {
        evaluate(self.store.records(), &self.query)
    }

    /// Flips a model's enabled flag. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &ModelId) -> Option<bool> {
        self.store.toggle(id)
    }

    /// Replaces the search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.set_search_text(text);
    }

    /// Replaces the modality selection.
    pub fn set_modality_filter(&mut self, value: impl Into<String>) {
        self.query.set_modality_filter(value);
    }

    /// Replaces the status selection.
    pub fn set_status_filter(&mut self, value: impl Into<String>) {
        self.query.set_status_filter(value);
    }

    /// Replaces the whole query at once.
    pub fn set_query(&mut self, query: QueryState) {
        self.query = query;
    }

    /// Clears search text and selections. Toggles are kept.
    pub fn reset_query(&mut self) {
        self.query.reset();
    }

    /// Hands an affordance to the navigator.
    pub fn activate(&self, affordance: &Affordance) -> bool {
        tracing::debug!(affordance = %affordance, "Affordance activated");
        self.navigator.navigate(affordance)
    }
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::seeded()
    }
}
