//! Catalog row model.
//!
//! A row is either a folder from the supplied hierarchy or a snapshot of a
//! profile record. Folder rows only occur under tree layout; flat layout
//! contains profile rows exclusively.

use serde::{Deserialize, Serialize};

use super::profile::ProfileRecord;

/// Presentation mode of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Flat list of profile rows
    #[default]
    List,
    /// Folder rows with attached profile rows as children
    Tree,
}

/// A folder row backed by a group node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRow {
    /// Leaf name of the folder
    pub name: String,
    /// Full path of the folder, the key used for expansion state
    pub full_path: String,
    /// Nesting depth in the rendered tree (0 = top level)
    pub depth: usize,
}

/// A profile row holding a read-only record snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    /// Snapshot of the profile record
    pub record: ProfileRecord,
    /// Nesting depth in the rendered tree (0 = top level)
    pub depth: usize,
}

/// A displayable catalog unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRow {
    /// A folder from the supplied hierarchy
    Folder(FolderRow),
    /// A saved profile
    Profile(ProfileRow),
}

impl CatalogRow {
    /// Returns true for folder rows
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// Returns the identity key for profile rows, `None` for folders
    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        match self {
            Self::Folder(_) => None,
            Self::Profile(row) => Some(&row.record.filename),
        }
    }

    /// Returns the displayed name of the row
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Folder(row) => &row.name,
            Self::Profile(row) => &row.record.name,
        }
    }

    /// Returns the nesting depth of the row
    #[must_use]
    pub const fn depth(&self) -> usize {
        match self {
            Self::Folder(row) => row.depth,
            Self::Profile(row) => row.depth,
        }
    }
}
