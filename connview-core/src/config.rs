//! Configuration module for `ConnView`
//!
//! Handles durable view settings and their TOML persistence.

mod manager;
mod settings;

pub use manager::SettingsManager;
pub use settings::CatalogSettings;
