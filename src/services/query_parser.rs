//! Filter query parser for catalog search.
//!
//! Parses a single line such as:
//! - `modality:signal` / `mod:signal` - modality selection
//! - `status:beta` - status selection
//! - `all` as a value clears that dimension (`status:all`)
//! - anything else is free search text
//!
//! Free-text tokens are joined with single spaces, so
//! `status:stable chest x-ray` searches for `chest x-ray`.

use crate::models::QueryState;

/// Parses a filter query string into a [`QueryState`].
///
/// # Examples
///
/// ```
/// use diaglab::parse_filter_query;
///
/// let query = parse_filter_query("modality:Imaging status:stable lesion");
/// assert_eq!(query.modality_filter, "Imaging");
/// assert_eq!(query.status_filter, "stable");
/// assert_eq!(query.search_text, "lesion");
/// ```
#[must_use]
pub fn parse_filter_query(query: &str) -> QueryState {
    let mut state = QueryState::new();
    let mut text: Vec<&str> = Vec::new();

    for token in query.split_whitespace() {
        if !parse_token(token, &mut state) {
            text.push(token);
        }
    }

    state.set_search_text(text.join(" "));
    state
}

/// Applies a `key:value` token. Returns false when the token is free text.
fn parse_token(token: &str, state: &mut QueryState) -> bool {
    let Some((key, value)) = token.split_once(':') else {
        return false;
    };

    match key.to_lowercase().as_str() {
        "modality" | "mod" => {
            state.set_modality_filter(value);
            true
        },
        "status" => {
            state.set_status_filter(value);
            true
        },
        // Unknown keys stay searchable, e.g. `TB:` in a pasted title.
        _ => false,
    }
}
