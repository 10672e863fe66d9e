//! # Diaglab
//!
//! Catalog of AI-assisted diagnostic models with client-side search,
//! filtering and per-session enable toggles.
//!
//! The core is three small pieces:
//!
//! - [`CatalogStore`] owns the ordered model records and their `enabled` flags
//! - [`QueryState`] holds the search text and the modality/status selections
//! - [`evaluate`] combines both into the visible, order-preserving subset
//!
//! [`DashboardSession`] ties them together for the lifetime of one view and
//! routes the inert dashboard affordances to a [`Navigator`].
//!
//! ## Example
//!
//! ```rust
//! use diaglab::{DashboardSession, ModelId};
//!
//! let mut session = DashboardSession::seeded();
//! session.set_modality_filter("Signal");
//! let titles: Vec<_> = session.visible().iter().map(|r| r.title.as_str()).collect();
//! assert_eq!(titles, ["ECG Arrhythmia Analysis"]);
//!
//! session.toggle(&ModelId::new("4"));
//! assert!(session.visible()[0].enabled);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
pub mod observability;
pub mod services;

pub use catalog::CatalogStore;
pub use config::DiaglabConfig;
pub use models::{Modality, ModelId, ModelRecord, QueryState, Status};
pub use services::{
    Affordance, DashboardSession, Navigator, NoopNavigator, evaluate, parse_filter_query,
};

/// Error type for diaglab operations.
///
/// Core catalog operations are total; errors only arise at the edges where
/// files are read, user input is parsed or output is written.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Duplicate or empty ids in a catalog, unknown session command, unknown id in `show` |
/// | `OperationFailed` | Config or catalog file cannot be read or parsed, logging init fails, output cannot be written |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

impl Error {
    /// Builds an [`Error::OperationFailed`] from an operation name and any displayable cause.
    pub fn operation(operation: &str, cause: impl std::fmt::Display) -> Self {
        Self::OperationFailed {
            operation: operation.to_string(),
            cause: cause.to_string(),
        }
    }
}

/// Result type alias for diaglab operations.
pub type Result<T> = std::result::Result<T, Error>;
