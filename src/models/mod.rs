//! Data models for diaglab.

mod domain;
mod query;
mod record;

pub use domain::{Modality, Status};
pub use query::{ALL_SENTINEL, QueryState};
pub use record::{ModelId, ModelRecord};
