//! Strong domain types for plugin records.
//!
//! The protocol id is the only field that flows into file names and build
//! targets, so it is the only one wrapped in a validating newtype.
//!
//! # Examples
//!
//! ```
//! use uoa_core::{PluginRecord, ProtocolId};
//!
//! let salut = PluginRecord::new("Salut", "salut", ProtocolId::new("local-xmpp")?, "people-nearby");
//! assert_eq!(salut.protocol_id().target_name(), "liblocal_xmpp_la");
//! assert_eq!(salut.protocol_id().provider_file_name(), "local-xmpp.provider");
//! # Ok::<(), uoa_core::Error>(())
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum accepted protocol id length.
const MAX_PROTOCOL_ID_LEN: usize = 64;

/// Protocol identifier (validated newtype over String).
///
/// Only ASCII letters, digits, `-` and `_` are accepted. The raw value is
/// used verbatim in file names; build-target names replace `-` with `_`.
///
/// # Examples
///
/// ```
/// use uoa_core::ProtocolId;
///
/// let id = ProtocolId::new("jabber").unwrap();
/// assert_eq!(id.as_str(), "jabber");
///
/// assert!(ProtocolId::new("").is_err());
/// assert!(ProtocolId::new("../etc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProtocolId(String);

impl ProtocolId {
    /// Creates a new validated protocol id.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValidationError` if the id is empty, longer than 64
    /// characters, or contains anything other than `[A-Za-z0-9_-]`.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        if id.is_empty() {
            return Err(Error::ValidationError {
                field: "protocol_id".to_string(),
                reason: "cannot be empty".to_string(),
            });
        }

        if id.len() > MAX_PROTOCOL_ID_LEN {
            return Err(Error::ValidationError {
                field: "protocol_id".to_string(),
                reason: format!("exceeds {MAX_PROTOCOL_ID_LEN} characters"),
            });
        }

        if let Some(bad) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(Error::ValidationError {
                field: "protocol_id".to_string(),
                reason: format!("invalid character {bad:?} in '{id}'"),
            });
        }

        Ok(Self(id))
    }

    /// Wraps an id from the curated built-in table without re-validating it.
    ///
    /// The built-in table is covered by tests asserting every id passes
    /// [`Self::new`].
    pub(crate) fn from_static(id: &'static str) -> Self {
        debug_assert!(Self::new(id).is_ok(), "invalid built-in protocol id {id}");
        Self(id.to_string())
    }

    /// Returns the protocol id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build-target prefix used in per-plugin build rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use uoa_core::ProtocolId;
    ///
    /// let id = ProtocolId::new("local-xmpp").unwrap();
    /// assert_eq!(id.target_name(), "liblocal_xmpp_la");
    /// ```
    #[must_use]
    pub fn target_name(&self) -> String {
        format!("lib{}_la", self.0.replace('-', "_"))
    }

    /// Library file listed in `plugin_LTLIBRARIES`.
    ///
    /// Keeps the raw id; automake canonicalises it to [`Self::target_name`].
    #[must_use]
    pub fn library_name(&self) -> String {
        format!("lib{}.la", self.0)
    }

    /// File name of the provider descriptor.
    #[must_use]
    pub fn provider_file_name(&self) -> String {
        format!("{}.provider", self.0)
    }

    /// Identifier of the IM service bound to this provider.
    #[must_use]
    pub fn service_id(&self) -> String {
        format!("{}-im", self.0)
    }

    /// File name of the service descriptor.
    ///
    /// # Examples
    ///
    /// ```
    /// use uoa_core::ProtocolId;
    ///
    /// let id = ProtocolId::new("yahoojp").unwrap();
    /// assert_eq!(id.service_file_name(), "yahoojp-im.service");
    /// ```
    #[must_use]
    pub fn service_file_name(&self) -> String {
        format!("{}.service", self.service_id())
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProtocolId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ProtocolId {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ProtocolId> for String {
    fn from(id: ProtocolId) -> Self {
        id.0
    }
}

/// One plugin's identifying tuple.
///
/// Field names on the wire (TOML table files) follow the short column
/// names of the curated table: `name`, `manager`, `protocol`, `icon`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRecord {
    /// Human-readable name shown in the accounts panel
    #[serde(rename = "name")]
    display_name: String,
    /// Telepathy connection manager (e.g. `gabble`, `haze`)
    #[serde(rename = "manager")]
    connection_manager: String,
    /// Protocol id, also the provider id
    #[serde(rename = "protocol")]
    protocol_id: ProtocolId,
    /// Icon name
    #[serde(rename = "icon")]
    icon_name: String,
}

impl PluginRecord {
    /// Creates a record from already validated parts.
    #[must_use]
    pub fn new(
        display_name: impl Into<String>,
        connection_manager: impl Into<String>,
        protocol_id: ProtocolId,
        icon_name: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            connection_manager: connection_manager.into(),
            protocol_id,
            icon_name: icon_name.into(),
        }
    }

    /// Creates a record from plain strings, validating the protocol id.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValidationError` if the protocol id is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use uoa_core::PluginRecord;
    ///
    /// let jabber = PluginRecord::parse("Jabber", "gabble", "jabber", "jabber")?;
    /// assert_eq!(jabber.connection_manager(), "gabble");
    /// # Ok::<(), uoa_core::Error>(())
    /// ```
    pub fn parse(
        display_name: &str,
        connection_manager: &str,
        protocol_id: &str,
        icon_name: &str,
    ) -> Result<Self> {
        Ok(Self::new(
            display_name,
            connection_manager,
            ProtocolId::new(protocol_id)?,
            icon_name,
        ))
    }

    /// Human-readable display name.
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Connection manager identifier.
    #[inline]
    #[must_use]
    pub fn connection_manager(&self) -> &str {
        &self.connection_manager
    }

    /// Protocol id.
    #[inline]
    #[must_use]
    pub const fn protocol_id(&self) -> &ProtocolId {
        &self.protocol_id
    }

    /// Icon name.
    #[inline]
    #[must_use]
    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_id_valid() {
        for id in ["aim", "local-xmpp", "yahoo_jp", "ICQ2"] {
            assert!(ProtocolId::new(id).is_ok(), "{id} should be valid");
        }
    }

    #[test]
    fn test_protocol_id_rejects_bad_input() {
        assert!(ProtocolId::new("").is_err());
        assert!(ProtocolId::new("a b").is_err());
        assert!(ProtocolId::new("a/b").is_err());
        assert!(ProtocolId::new("a.b").is_err());
        assert!(ProtocolId::new("x".repeat(65)).is_err());
        assert!(ProtocolId::new("x".repeat(64)).is_ok());
    }

    #[test]
    fn test_hyphen_only_replaced_in_target_name() {
        let id = ProtocolId::new("local-xmpp").unwrap();
        assert_eq!(id.target_name(), "liblocal_xmpp_la");
        assert_eq!(id.library_name(), "liblocal-xmpp.la");
        assert_eq!(id.provider_file_name(), "local-xmpp.provider");
        assert_eq!(id.service_id(), "local-xmpp-im");
        assert_eq!(id.service_file_name(), "local-xmpp-im.service");
    }

    #[test]
    fn test_record_accessors() {
        let record = PluginRecord::parse("Yahoo Japan", "haze", "yahoojp", "yahoo").unwrap();
        assert_eq!(record.display_name(), "Yahoo Japan");
        assert_eq!(record.connection_manager(), "haze");
        assert_eq!(record.protocol_id().as_str(), "yahoojp");
        assert_eq!(record.icon_name(), "yahoo");
    }

    #[test]
    fn test_record_parse_invalid_protocol() {
        let err = PluginRecord::parse("Broken", "haze", "no spaces", "x").unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_protocol_id_display() {
        let id = ProtocolId::try_from("sip").unwrap();
        assert_eq!(id.to_string(), "sip");
        assert_eq!(String::from(id), "sip");
    }
}
