//! Catalog assembly and rebuild orchestration
//!
//! This module builds the displayed row sequence out of the store's
//! profiles and hierarchy, and sequences full reloads and live re-filters
//! while keeping the user-visible view state stable.

mod attach;
mod model;
mod orchestrator;

pub use attach::attach;
pub use model::CatalogModel;
pub use orchestrator::{Catalog, ConnectionLauncher};
