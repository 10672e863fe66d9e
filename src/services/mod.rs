//! Catalog services.
//!
//! Filtering, query parsing and the view session that ties the catalog store
//! to the query state.

mod filter;
mod navigation;
mod query_parser;
mod session;

pub use filter::{CompiledQuery, DimensionFilter, evaluate, is_unconstrained};
pub use navigation::{Affordance, Navigator, NoopNavigator};
pub use query_parser::parse_filter_query;
pub use session::DashboardSession;
