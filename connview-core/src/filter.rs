//! Row visibility predicate for the live query.
//!
//! Visibility is recomputed on every query change without rebuilding the
//! catalog model. Matching is case-folded. A profile row is visible when
//! the query is a substring of one of its text fields, or when every
//! comma-separated query token matches one of the profile's label tokens.

use crate::models::CatalogRow;

/// Computes visibility of a row under the given query
///
/// Folder rows are never hidden by filtering; an empty query keeps every
/// row visible.
#[must_use]
pub fn row_visible(row: &CatalogRow, query: &str) -> bool {
    let CatalogRow::Profile(profile) = row else {
        return true;
    };
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    let record = &profile.record;

    let substring_match = [
        record.name.to_lowercase(),
        record.group.to_lowercase(),
        record.server.to_lowercase(),
        record.protocol.to_lowercase(),
        record.last_used_display().to_lowercase(),
    ]
    .iter()
    .any(|field| field.contains(&query));

    substring_match || labels_match(&record.labels.to_lowercase(), &query)
}

/// Token matching over the labels field
///
/// Every non-empty query token must be a substring of at least one label
/// token. A profile without labels never matches this way.
fn labels_match(labels: &str, query: &str) -> bool {
    if labels.is_empty() {
        return false;
    }
    query
        .split(',')
        .filter(|token| !token.is_empty())
        .all(|token| {
            labels
                .split(',')
                .filter(|label| !label.is_empty())
                .any(|label| label.contains(token))
        })
}
