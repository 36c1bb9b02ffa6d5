//! The ordered plugin table that drives generation.
//!
//! A [`PluginTable`] is non-empty and its protocol ids are unique; both are
//! checked once at construction so the generator can stay a pure function
//! of its input.
//!
//! # Examples
//!
//! ```
//! use uoa_core::PluginTable;
//!
//! let table = PluginTable::builtin();
//! assert_eq!(table.len(), 14);
//! assert_eq!(table.records()[0].display_name(), "AIM");
//! ```
//!
//! Tables can also be loaded from TOML:
//!
//! ```
//! use uoa_core::PluginTable;
//!
//! let table = PluginTable::from_toml_str(r#"
//! [[plugin]]
//! name = "Jabber"
//! manager = "gabble"
//! protocol = "jabber"
//! icon = "jabber"
//! "#)?;
//! assert_eq!(table.len(), 1);
//! # Ok::<(), uoa_core::Error>(())
//! ```

use crate::types::{PluginRecord, ProtocolId};
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// `(name, connection manager, protocol, icon)` rows of the built-in table.
const BUILTIN: [(&str, &str, &str, &str); 14] = [
    ("AIM", "haze", "aim", "aim"),
    ("GaduGadu", "haze", "gadugadu", "gadugadu"),
    ("Groupwise", "haze", "groupwise", "groupwise"),
    ("ICQ", "haze", "icq", "icq"),
    ("IRC", "idle", "irc", "irc"),
    ("Jabber", "gabble", "jabber", "jabber"),
    ("Mxit", "haze", "mxit", "mxit"),
    ("Myspace", "haze", "myspace", "myspace"),
    ("SIP", "sofiasip", "sip", "sip"),
    ("Salut", "salut", "local-xmpp", "people-nearby"),
    ("Sametime", "haze", "sametime", "sametime"),
    ("Yahoo Japan", "haze", "yahoojp", "yahoo"),
    ("Yahoo!", "haze", "yahoo", "yahoo"),
    ("Zephyr", "haze", "zephyr", "zephyr"),
];

/// On-disk layout of a table file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    plugin: Vec<PluginRecord>,
}

/// Ordered, validated sequence of plugin records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginTable {
    records: Vec<PluginRecord>,
}

impl PluginTable {
    /// Creates a table, checking that it is non-empty and that every
    /// protocol id is unique.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyTable` for an empty input and
    /// `Error::DuplicateProtocol` naming the first repeated id.
    ///
    /// # Examples
    ///
    /// ```
    /// use uoa_core::{PluginRecord, PluginTable};
    ///
    /// let dup = vec![
    ///     PluginRecord::parse("Yahoo!", "haze", "yahoo", "yahoo")?,
    ///     PluginRecord::parse("Yahoo Again", "haze", "yahoo", "yahoo")?,
    /// ];
    /// assert!(PluginTable::new(dup).unwrap_err().is_duplicate());
    /// # Ok::<(), uoa_core::Error>(())
    /// ```
    pub fn new(records: Vec<PluginRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyTable);
        }

        check_unique(&records)?;
        Ok(Self { records })
    }

    /// The curated table of supported protocols.
    #[must_use]
    pub fn builtin() -> Self {
        let records = BUILTIN
            .iter()
            .map(|&(name, cm, protocol, icon)| {
                PluginRecord::new(name, cm, ProtocolId::from_static(protocol), icon)
            })
            .collect();
        Self { records }
    }

    /// Parses a TOML table made of `[[plugin]]` entries.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` on malformed TOML or invalid fields,
    /// and the errors of [`Self::new`] for empty or duplicate tables.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let file: TableFile = toml::from_str(input).map_err(|e| Error::ConfigError {
            message: format!("invalid plugin table: {e}"),
            source: Some(Box::new(e)),
        })?;
        Self::new(file.plugin)
    }

    /// Reads and parses a TOML table file.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the file cannot be read, plus the
    /// errors of [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading plugin table from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigError {
            message: format!("cannot read plugin table {}", path.display()),
            source: Some(Box::new(e)),
        })?;

        Self::from_toml_str(&content)
    }

    /// Records in generation order.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[PluginRecord] {
        &self.records
    }

    /// Iterates over records in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &PluginRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn check_unique(records: &[PluginRecord]) -> Result<()> {
    let mut seen: HashMap<&ProtocolId, usize> = HashMap::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if let Some(&first) = seen.get(record.protocol_id()) {
            return Err(Error::DuplicateProtocol {
                protocol_id: record.protocol_id().to_string(),
                first,
                second: index,
            });
        }
        seen.insert(record.protocol_id(), index);
    }
    Ok(())
}

impl<'a> IntoIterator for &'a PluginTable {
    type Item = &'a PluginRecord;
    type IntoIter = std::slice::Iter<'a, PluginRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
