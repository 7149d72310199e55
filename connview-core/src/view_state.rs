//! View-state capture and restore across catalog rebuilds.
//!
//! Rebuilds discard the previous row sequence entirely, so the perceivable
//! view state (sort order, expanded folders, the selected row, the live
//! query) is captured by identity and path before the rebuild and
//! reapplied against the new sequence afterwards. Positions are never
//! recorded: they change under filtering and sorting.

use std::collections::HashSet;

use crate::models::CatalogRow;
use crate::sort::{SortColumn, SortDirection};

/// Snapshot of the user-visible view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Active sort column
    pub sort_column: SortColumn,
    /// Active sort direction
    pub sort_direction: SortDirection,
    /// Full paths of folders expanded at capture time
    pub expanded_group_paths: HashSet<String>,
    /// Identity of the selected profile row, if any
    pub selected_identity: Option<String>,
    /// Live query text, carried over verbatim
    pub query_text: String,
}

/// Expansion and selection to apply to a freshly rebuilt row sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreOutcome {
    /// Folder paths present in the new sequence that should be expanded
    pub expanded: HashSet<String>,
    /// Identity of the row to select, if it still exists
    pub selected: Option<String>,
}

impl ViewState {
    /// Captures the current view state
    #[must_use]
    pub fn capture(
        sort_column: SortColumn,
        sort_direction: SortDirection,
        expanded_group_paths: HashSet<String>,
        selected_identity: Option<String>,
        query_text: String,
    ) -> Self {
        Self {
            sort_column,
            sort_direction,
            expanded_group_paths,
            selected_identity,
            query_text,
        }
    }

    /// Reconciles this snapshot against a rebuilt row sequence
    ///
    /// A folder is re-expanded iff its full path was captured. Selection is
    /// restored to the first profile row whose identity matches the
    /// captured one; a miss leaves the selection empty and is not an error.
    #[must_use]
    pub fn restore(&self, rows: &[&CatalogRow]) -> RestoreOutcome {
        let mut outcome = RestoreOutcome::default();

        for row in rows {
            match row {
                CatalogRow::Folder(folder) => {
                    if self.expanded_group_paths.contains(&folder.full_path) {
                        outcome.expanded.insert(folder.full_path.clone());
                    }
                }
                CatalogRow::Profile(profile) => {
                    if outcome.selected.is_none()
                        && self.selected_identity.as_deref()
                            == Some(profile.record.filename.as_str())
                    {
                        outcome.selected = Some(profile.record.filename.clone());
                    }
                }
            }
        }

        outcome
    }
}
