//! Durable catalog settings model
//!
//! This module defines the view settings stored in config.toml. Each field
//! survives process restarts; sort column and direction are re-persisted
//! write-through whenever the user changes them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::Layout;
use crate::sort::{SortColumn, SortDirection};

/// Durable view settings for the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Column used for default ordering
    #[serde(default)]
    pub sort_column: SortColumn,
    /// Ordering direction
    #[serde(default)]
    pub sort_direction: SortDirection,
    /// Chosen catalog layout
    #[serde(default)]
    pub layout: Layout,
    /// Folder paths expanded at last save
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub expanded_group_paths: HashSet<String>,
    /// Last protocol chosen in the quick-connect affordance
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_quick_connect_protocol: String,
}
