//! Error types for `ConnView`
//!
//! This module defines all error types used throughout the catalog core,
//! providing descriptive error messages for profile-store access, settings
//! persistence, and quick-connect parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for `ConnView` operations
#[derive(Debug, Error)]
pub enum ConnViewError {
    /// Profile store errors (enumeration, row reads, deletion)
    #[error("Profile store error: {0}")]
    Store(#[from] StoreError),

    /// Settings persistence errors
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Quick-connect input errors
    #[error("Quick connect error: {0}")]
    QuickConnect(#[from] QuickConnectError),

    /// I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the profile store boundary
#[derive(Debug, Error)]
pub enum StoreError {
    /// Enumerating the profile collection failed
    #[error("Failed to enumerate profiles: {0}")]
    Enumerate(String),

    /// A single profile could not be read back by identity
    #[error("Failed to read profile {filename}: {reason}")]
    Read {
        /// Identity key of the profile that failed to load
        filename: String,
        /// The reason the read failed
        reason: String,
    },

    /// No profile exists under the given identity
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// Deleting a profile failed
    #[error("Failed to delete profile {filename}: {reason}")]
    Delete {
        /// Identity key of the profile that failed to delete
        filename: String,
        /// The reason the delete failed
        reason: String,
    },
}

/// Errors related to settings file operations
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to parse the settings file
    #[error("Failed to parse settings: {0}")]
    Parse(String),

    /// Settings file location could not be determined
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),

    /// Failed to write the settings file
    #[error("Failed to write settings: {0}")]
    Write(String),

    /// Failed to serialize settings
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    /// Failed to deserialize settings
    #[error("Failed to deserialize settings: {0}")]
    Deserialize(String),
}

/// Errors raised while parsing a quick-connect server string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuickConnectError {
    /// The server field was empty or whitespace-only
    #[error("Server address is empty")]
    Empty,

    /// The server field contained a path separator (e.g. a pasted URI)
    #[error("Server address cannot contain '/': {0}")]
    ContainsSeparator(String),
}

/// Result type alias for `ConnView` operations
pub type Result<T> = std::result::Result<T, ConnViewError>;

/// Result type alias for profile store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for settings operations
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
