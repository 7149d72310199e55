//! Persisted sort layer for the catalog.
//!
//! The active column and direction survive process restarts through the
//! settings layer and are re-persisted write-through whenever the user
//! changes them. Sorting is stable: ties keep their prior relative order,
//! which is also the documented tie-break between folder and profile rows
//! on columns folders have no value for.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::CatalogRow;

/// Column used for catalog ordering
///
/// Persisted as an integer id so the stored value stays stable if variant
/// names are ever reworded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SortColumn {
    /// Profile or folder name
    #[default]
    Name,
    /// Group field (full path for folder rows)
    Group,
    /// Server address
    Server,
    /// Protocol name
    Protocol,
    /// Last-used timestamp
    LastUsed,
}

impl From<SortColumn> for u8 {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Name => 0,
            SortColumn::Group => 1,
            SortColumn::Server => 2,
            SortColumn::Protocol => 3,
            SortColumn::LastUsed => 4,
        }
    }
}

impl TryFrom<u8> for SortColumn {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::Name),
            1 => Ok(Self::Group),
            2 => Ok(Self::Server),
            3 => Ok(Self::Protocol),
            4 => Ok(Self::LastUsed),
            other => Err(format!("unknown sort column id {other}")),
        }
    }
}

/// Ordering direction for the active column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest value first
    #[default]
    Ascending,
    /// Largest value first
    Descending,
}

/// Compares two rows under the given column and direction
///
/// String columns compare case-folded. Folder rows carry no server,
/// protocol, or last-used value and compare as empty on those columns.
#[must_use]
pub fn compare(
    a: &CatalogRow,
    b: &CatalogRow,
    column: SortColumn,
    direction: SortDirection,
) -> Ordering {
    let ordering = match column {
        SortColumn::LastUsed => last_used_key(a).cmp(&last_used_key(b)),
        _ => text_key(a, column)
            .to_lowercase()
            .cmp(&text_key(b, column).to_lowercase()),
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Stably sorts a visible row sequence in place
pub fn apply(rows: &mut [&CatalogRow], column: SortColumn, direction: SortDirection) {
    rows.sort_by(|a, b| compare(a, b, column, direction));
}

fn text_key<'a>(row: &'a CatalogRow, column: SortColumn) -> &'a str {
    match (row, column) {
        (CatalogRow::Folder(folder), SortColumn::Name) => &folder.name,
        (CatalogRow::Folder(folder), SortColumn::Group) => &folder.full_path,
        (CatalogRow::Folder(_), _) => "",
        (CatalogRow::Profile(profile), column) => match column {
            SortColumn::Name => &profile.record.name,
            SortColumn::Group => &profile.record.group,
            SortColumn::Server => &profile.record.server,
            SortColumn::Protocol => &profile.record.protocol,
            SortColumn::LastUsed => "",
        },
    }
}

fn last_used_key(row: &CatalogRow) -> Option<chrono::DateTime<chrono::Utc>> {
    match row {
        CatalogRow::Folder(_) => None,
        CatalogRow::Profile(profile) => profile.record.last_used,
    }
}
