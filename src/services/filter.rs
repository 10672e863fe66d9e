//! Filter evaluation over the catalog.
//!
//! A record is visible when all three predicates hold:
//!
//! - text: the search text is a case-insensitive substring of the title, the
//!   description or any tag (empty text matches everything)
//! - modality: the selection is unconstrained or names the record's modality
//! - status: same rule for the record's status
//!
//! Per dimension the empty value, `all` and `-` are the same unconstrained
//! state. A selection that names no known label matches nothing.

use crate::models::{ALL_SENTINEL, Modality, ModelRecord, QueryState, Status};

/// Interpreted selection for one closed-set dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionFilter<T> {
    /// Every value passes.
    Any,
    /// Only this value passes.
    Only(T),
    /// The selection named no known value; nothing passes.
    Nothing,
}

impl<T: PartialEq> DimensionFilter<T> {
    /// Interprets a raw selection string with the given label parser.
    pub fn interpret(raw: &str, parse: impl Fn(&str) -> Option<T>) -> Self {
        if is_unconstrained(raw) {
            return Self::Any;
        }
        parse(raw.trim()).map_or(Self::Nothing, Self::Only)
    }

    /// Returns true if `value` passes this filter.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => wanted == value,
            Self::Nothing => false,
        }
    }
}

/// Returns true if a raw selection means "do not constrain".
#[must_use]
pub fn is_unconstrained(raw: &str) -> bool {
    let value = raw.trim();
    value.is_empty() || value == "-" || value.eq_ignore_ascii_case(ALL_SENTINEL)
}

/// A [`QueryState`] with its text folded and its selections interpreted.
///
/// Build once per evaluation, then test each record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    needle: String,
    modality: DimensionFilter<Modality>,
    status: DimensionFilter<Status>,
}

impl CompiledQuery {
    /// Compiles a query state.
    #[must_use]
    pub fn new(query: &QueryState) -> Self {
        Self {
            needle: query.search_text.to_lowercase(),
            modality: DimensionFilter::interpret(&query.modality_filter, Modality::parse),
            status: DimensionFilter::interpret(&query.status_filter, Status::parse),
        }
    }

    /// Interpreted modality selection.
    #[must_use]
    pub const fn modality(&self) -> DimensionFilter<Modality> {
        self.modality
    }

    /// Interpreted status selection.
    #[must_use]
    pub const fn status(&self) -> DimensionFilter<Status> {
        self.status
    }

    /// Returns true if the record passes all three predicates.
    #[must_use]
    pub fn matches(&self, record: &ModelRecord) -> bool {
        self.matches_text(record)
            && self.modality.matches(&record.modality)
            && self.status.matches(&record.status)
    }

    fn matches_text(&self, record: &ModelRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record.title.to_lowercase().contains(&self.needle)
            || record.description.to_lowercase().contains(&self.needle)
            || record
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&self.needle))
    }
}

/// Returns the records visible under `query`, in catalog order.
#[must_use]
pub fn evaluate<'a>(records: &'a [ModelRecord], query: &QueryState) -> Vec<&'a ModelRecord> {
    let compiled = CompiledQuery::new(query);
    records.iter().filter(|r| compiled.matches(r)).collect()
}
