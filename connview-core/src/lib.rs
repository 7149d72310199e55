//! `ConnView` Core Library
//!
//! This crate provides the core functionality for the `ConnView` connection
//! catalog: the row model over folders and profiles, group attachment,
//! query filtering, the persisted sort layer, and view-state preservation
//! across catalog rebuilds.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod prompt;
pub mod quickconnect;
pub mod sort;
pub mod status;
pub mod store;
pub mod view_state;

pub use catalog::{attach, Catalog, CatalogModel, ConnectionLauncher};
pub use config::{CatalogSettings, SettingsManager};
pub use error::{
    ConnViewError, QuickConnectError, Result, SettingsError, SettingsResult, StoreError,
    StoreResult,
};
pub use filter::row_visible;
pub use models::{
    CatalogRow, FolderRow, GroupHierarchy, GroupId, GroupNode, Layout, ProfileRecord, ProfileRow,
    StatusIndicator,
};
pub use prompt::{Confirmation, PresetPrompt, UserPrompt};
pub use quickconnect::{ephemeral_profile, parse_server};
pub use sort::{SortColumn, SortDirection};
pub use status::{CallbackStatusReporter, NoOpStatusReporter, StatusReporter};
pub use store::{FaultyProfileStore, MemoryProfileStore, ProfileStore};
pub use view_state::{RestoreOutcome, ViewState};
