//! Fuzz testing for the filter query parser and session command parser.
//!
//! Uses proptest with adversarial inputs:
//! - Malformed inputs that might cause panics
//! - Unicode edge cases
//! - Case folding of search text against odd characters

// Fuzz tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]

use diaglab::cli::SessionCommand;
use diaglab::models::QueryState;
use diaglab::{CatalogStore, evaluate, parse_filter_query};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Fuzz: Random ASCII strings should never panic.
    #[test]
    fn fuzz_random_ascii_no_panic(input in "[\\x00-\\x7F]{0,300}") {
        let _ = parse_filter_query(&input);
        let _ = SessionCommand::parse(&input);
    }

    /// Fuzz: Random Unicode strings should never panic.
    #[test]
    fn fuzz_random_unicode_no_panic(input in "\\PC{0,200}") {
        let _ = parse_filter_query(&input);
        let _ = SessionCommand::parse(&input);
    }

    /// Fuzz: Strings with many colons should not panic.
    #[test]
    fn fuzz_many_colons_no_panic(input in "[:a-z]{0,100}") {
        let _ = parse_filter_query(&input);
    }

    /// Fuzz: Parsed search text never has leading, trailing or doubled spaces.
    #[test]
    fn fuzz_search_text_normalised(input in "[a-z: \\t]{0,80}") {
        let query = parse_filter_query(&input);
        prop_assert_eq!(query.search_text.trim(), query.search_text.as_str());
        prop_assert!(!query.search_text.contains("  "));
    }

    /// Fuzz: Arbitrary search text and selections evaluate without panic.
    #[test]
    fn fuzz_evaluate_no_panic(
        text in "\\PC{0,50}",
        modality in "\\PC{0,10}",
        status in "\\PC{0,10}"
    ) {
        let store = CatalogStore::seeded();
        let query = QueryState::new()
            .with_search_text(text)
            .with_modality(modality)
            .with_status(status);
        let visible = evaluate(store.records(), &query);
        prop_assert!(visible.len() <= store.len());
    }
}

#[test]
fn test_unicode_case_folding() {
    let store = CatalogStore::seeded();
    // En dash in the title, uppercase search.
    let query = QueryState::new().with_search_text("MAMMOGRAPHY – LESION");
    let visible = evaluate(store.records(), &query);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id.as_str(), "2");
}
