//! Catalog store: the ordered model records and their enable toggles.
//!
//! Records keep insertion order for display and filtering. A side index keyed
//! by id serves lookups and toggles. Identity data is frozen at construction;
//! the only mutation is [`CatalogStore::toggle`].

mod loader;
mod seed;

pub use loader::{CatalogFile, load_catalog_from_path, parse_catalog};
pub use seed::seed_records;

use crate::models::{ModelId, ModelRecord};
use crate::{Error, Result};
use std::collections::HashMap;

/// Authoritative list of model records for one session.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    records: Vec<ModelRecord>,
    by_id: HashMap<ModelId, usize>,
}

impl CatalogStore {
    /// Builds a store from externally supplied records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if any id is blank or appears twice.
    pub fn new(records: Vec<ModelRecord>) -> Result<Self> {
        let by_id = build_index(&records)?;
        Ok(Self { records, by_id })
    }

    /// Builds a store holding the built-in seed catalog.
    #[must_use]
    pub fn seeded() -> Self {
        let records = seed_records();
        let by_id = records
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.id.clone(), idx))
            .collect();
        Self { records, by_id }
    }

    /// All records in catalog order.
    #[must_use]
    pub fn records(&self) -> &[ModelRecord] {
        &self.records
    }

    /// Resolves a record by id.
    #[must_use]
    pub fn get(&self, id: &ModelId) -> Option<&ModelRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    /// Flips the `enabled` flag of the record with this id.
    ///
    /// Returns the new value, or `None` when the id is not in the catalog, in
    /// which case nothing changes.
    pub fn toggle(&mut self, id: &ModelId) -> Option<bool> {
        let Some(&idx) = self.by_id.get(id) else {
            tracing::debug!(model_id = %id, "Toggle ignored for unknown model");
            return None;
        };
        let record = &mut self.records[idx];
        record.enabled = !record.enabled;
        tracing::debug!(model_id = %id, enabled = record.enabled, "Toggled model");
        Some(record.enabled)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records currently enabled.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.records.iter().filter(|r| r.enabled).count()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn build_index(records: &[ModelRecord]) -> Result<HashMap<ModelId, usize>> {
    let mut map = HashMap::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        if record.id.as_str().trim().is_empty() {
            return Err(Error::InvalidInput(format!(
                "model at position {} has no id",
                idx + 1
            )));
        }
        if map.insert(record.id.clone(), idx).is_some() {
            return Err(Error::InvalidInput(format!(
                "duplicate model id {}",
                record.id
            )));
        }
    }
    Ok(map)
}
