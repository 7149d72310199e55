//! Profile record model representing a saved connection definition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reachability indicator for a profile's server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIndicator {
    /// Reachability has not been probed
    #[default]
    Unknown,
    /// The server answered the last probe
    Reachable,
    /// The server did not answer the last probe
    Unreachable,
}

/// A saved connection profile
///
/// Identity is the `filename` key: unique, stable, and the only way rows
/// are correlated across catalog rebuilds. Records are owned by the profile
/// store; the catalog holds read-only snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Stable identity key, unique within the store
    pub filename: String,
    /// Human-readable name for the profile
    pub name: String,
    /// Group this profile belongs to (plain string, not guaranteed to be
    /// path-structured)
    #[serde(default)]
    pub group: String,
    /// Remote server address
    #[serde(default)]
    pub server: String,
    /// Protocol name (e.g. "RDP", "VNC", "SSH")
    #[serde(default)]
    pub protocol: String,
    /// Comma-separated label tokens for filtering
    #[serde(default)]
    pub labels: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
    /// Timestamp of the last successful connection attempt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
    /// Reachability indicator shown next to the row
    #[serde(default)]
    pub status: StatusIndicator,

    // Pass-through fields: carried on the record but never interpreted or
    // validated by the catalog.
    /// Per-profile lock flag consumed by the external unlock gate
    #[serde(default)]
    pub profile_lock: bool,
    /// Username for the remote session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Domain for the remote session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Gateway username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_username: Option<String>,
    /// Gateway domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_domain: Option<String>,
}

impl ProfileRecord {
    /// Creates a new profile with the given identity and display name
    #[must_use]
    pub fn new(filename: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            name: name.into(),
            group: String::new(),
            server: String::new(),
            protocol: String::new(),
            labels: String::new(),
            notes: String::new(),
            last_used: None,
            status: StatusIndicator::Unknown,
            profile_lock: false,
            username: None,
            domain: None,
            gateway_username: None,
            gateway_domain: None,
        }
    }

    /// Sets the group for this profile
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the server address for this profile
    #[must_use]
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    /// Sets the protocol for this profile
    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// Sets the label tokens for this profile
    #[must_use]
    pub fn with_labels(mut self, labels: impl Into<String>) -> Self {
        self.labels = labels.into();
        self
    }

    /// Updates the last-used timestamp to now
    pub fn touch(&mut self) {
        self.last_used = Some(Utc::now());
    }

    /// Returns the last-used timestamp rendered for display and filtering
    ///
    /// Profiles that were never used render as the empty string.
    #[must_use]
    pub fn last_used_display(&self) -> String {
        self.last_used
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default()
    }

    /// Returns the non-empty label tokens of this profile
    pub fn label_tokens(&self) -> impl Iterator<Item = &str> {
        self.labels.split(',').filter(|t| !t.is_empty())
    }
}
