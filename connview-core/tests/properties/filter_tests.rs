//! Property-based tests for the filter predicate
//!
//! These tests validate the query matching behavior: case folding,
//! empty-query visibility, and label token semantics.

use proptest::prelude::*;

use connview_core::models::{CatalogRow, FolderRow, ProfileRecord, ProfileRow};
use connview_core::row_visible;

// ========== Strategies ==========

/// Strategy for generating field text
fn arb_field() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.-]{0,16}"
}

/// Strategy for generating query text
fn arb_query() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,8}"
}

/// Strategy for generating a comma-separated labels field
fn arb_labels() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 0..4).prop_map(|tokens| tokens.join(","))
}

/// Strategy for generating a profile row
fn arb_profile_row() -> impl Strategy<Value = CatalogRow> {
    (arb_field(), arb_field(), arb_field(), arb_field(), arb_labels()).prop_map(
        |(name, group, server, protocol, labels)| {
            CatalogRow::Profile(ProfileRow {
                record: ProfileRecord::new("p.cvp", name)
                    .with_group(group)
                    .with_server(server)
                    .with_protocol(protocol)
                    .with_labels(labels),
                depth: 0,
            })
        },
    )
}

fn folder_row(name: &str) -> CatalogRow {
    CatalogRow::Folder(FolderRow {
        name: name.to_string(),
        full_path: name.to_string(),
        depth: 0,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any non-empty query, results for the upper-cased and
    /// lower-cased forms are identical.
    #[test]
    fn prop_filter_is_case_insensitive(row in arb_profile_row(), query in arb_query()) {
        prop_assert_eq!(
            row_visible(&row, &query.to_uppercase()),
            row_visible(&row, &query.to_lowercase())
        );
    }

    /// An empty query keeps every row visible.
    #[test]
    fn prop_empty_query_shows_all(row in arb_profile_row()) {
        prop_assert!(row_visible(&row, ""));
    }

    /// Folder rows are visible under any query.
    #[test]
    fn prop_folders_never_hidden(name in "[a-zA-Z]{1,8}", query in arb_query()) {
        prop_assert!(row_visible(&folder_row(&name), &query));
    }

    /// A query equal to the profile name always matches.
    #[test]
    fn prop_name_is_searchable(row in arb_profile_row()) {
        let CatalogRow::Profile(ref profile) = row else { unreachable!() };
        if !profile.record.name.is_empty() {
            prop_assert!(row_visible(&row, &profile.record.name));
        }
    }

    /// Every label token of a profile matches the profile on its own.
    #[test]
    fn prop_single_label_token_matches(row in arb_profile_row()) {
        let CatalogRow::Profile(ref profile) = row else { unreachable!() };
        let tokens: Vec<String> =
            profile.record.label_tokens().map(str::to_string).collect();
        for token in tokens {
            prop_assert!(row_visible(&row, &token));
        }
    }

    /// Adding an unmatchable token to a label query hides the row unless a
    /// text field happens to contain the combined query string.
    #[test]
    fn prop_label_tokens_are_anded(row in arb_profile_row()) {
        let CatalogRow::Profile(ref profile) = row else { unreachable!() };
        let Some(first) = profile.record.label_tokens().next().map(str::to_string)
        else { return Ok(()); };
        let query = format!("{first},zzzzzzzzzz");
        let record = &profile.record;
        let text_fields = [
            record.name.to_lowercase(),
            record.group.to_lowercase(),
            record.server.to_lowercase(),
            record.protocol.to_lowercase(),
        ];
        if !text_fields.iter().any(|f| f.contains(&query)) {
            prop_assert!(!row_visible(&row, &query));
        }
    }
}

#[test]
fn spec_example_prod_query() {
    let p1 = CatalogRow::Profile(ProfileRow {
        record: ProfileRecord::new("p1.cvp", "Server1")
            .with_group("Work")
            .with_server("10.0.0.1")
            .with_labels("prod,eu"),
        depth: 0,
    });
    let p2 = CatalogRow::Profile(ProfileRow {
        record: ProfileRecord::new("p2.cvp", "Server2")
            .with_group("Home")
            .with_server("10.0.0.2")
            .with_labels("dev"),
        depth: 0,
    });
    assert!(row_visible(&p1, "prod"));
    assert!(!row_visible(&p2, "prod"));
    // Token-AND over labels with no substring fallback hides the row.
    assert!(!row_visible(&p1, "work,home"));
}
