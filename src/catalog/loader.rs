//! Loading catalogs from JSON, TOML or YAML files.
//!
//! Every format shares one shape: a top-level `models` list of records.

use super::CatalogStore;
use crate::models::ModelRecord;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::instrument;

/// On-disk catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Records in display order.
    #[serde(default)]
    pub models: Vec<ModelRecord>,
}

/// Supported catalog encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Json,
    Toml,
    Yaml,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::InvalidInput(format!(
                "unsupported catalog extension for {} (expected .json, .toml, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

/// Parses catalog contents in the format implied by `path`'s extension.
///
/// # Errors
///
/// Returns an error if the extension is unknown, the document is malformed,
/// or the records violate catalog invariants.
pub fn parse_catalog(path: &Path, contents: &str) -> Result<CatalogStore> {
    let file: CatalogFile = match CatalogFormat::from_path(path)? {
        CatalogFormat::Json => {
            serde_json::from_str(contents).map_err(|e| Error::operation("parse_catalog", e))?
        },
        CatalogFormat::Toml => {
            toml::from_str(contents).map_err(|e| Error::operation("parse_catalog", e))?
        },
        CatalogFormat::Yaml => {
            serde_yaml_ng::from_str(contents).map_err(|e| Error::operation("parse_catalog", e))?
        },
    };

    if file.models.is_empty() {
        tracing::warn!(path = %path.display(), "Catalog file contains no models");
    }

    CatalogStore::new(file.models)
}

/// Reads and validates a catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or [`parse_catalog`] fails.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_catalog_from_path(path: &Path) -> Result<CatalogStore> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::operation("read_catalog", format!("{}: {e}", path.display())))?;
    let store = parse_catalog(path, &contents)?;
    tracing::info!(models = store.len(), "Loaded catalog");
    Ok(store)
}
