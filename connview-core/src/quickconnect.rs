//! Ad-hoc connection input for the quick-connect affordance.
//!
//! Quick connect builds an ephemeral profile from a raw server string typed
//! into the search box. The record never enters the catalog and carries an
//! empty identity; the host hands it straight to the connection launcher.

use crate::error::QuickConnectError;
use crate::models::ProfileRecord;

/// Validates a raw server string and returns the text to connect to
///
/// Values containing `/` are rejected (a pasted URI such as `vnc://host`
/// would never resolve), as are blank or whitespace-only values. When the
/// part before a `:` port separator is a literal IP address, surrounding
/// whitespace is stripped from the value; other values are passed through
/// unchanged.
///
/// # Errors
///
/// Returns [`QuickConnectError`] when the value is empty or contains a
/// path separator.
pub fn parse_server(raw: &str) -> Result<String, QuickConnectError> {
    if raw.contains('/') {
        return Err(QuickConnectError::ContainsSeparator(raw.to_string()));
    }
    if raw.trim().is_empty() {
        return Err(QuickConnectError::Empty);
    }

    let trimmed = raw.trim();
    let host_part = trimmed.split(':').next().unwrap_or(trimmed);
    if host_part.parse::<std::net::IpAddr>().is_ok() {
        Ok(trimmed.to_string())
    } else {
        Ok(raw.to_string())
    }
}

/// Builds the ephemeral profile for a validated server string
///
/// Name and server are both the server text; the pass-through fields stay
/// empty because there is no saved record to inherit them from.
///
/// # Errors
///
/// Returns [`QuickConnectError`] when the server string fails validation.
pub fn ephemeral_profile(raw: &str, protocol: &str) -> Result<ProfileRecord, QuickConnectError> {
    let server = parse_server(raw)?;
    Ok(ProfileRecord::new(String::new(), server.clone())
        .with_server(server)
        .with_protocol(protocol))
}
