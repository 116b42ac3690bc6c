use std::fmt;
use std::str::FromStr;

use crate::error::SyncError;

/// A parsed icon identifier: `prefix` names a collection, `name` an icon
/// within it. Both parts are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconId {
    pub prefix: String,
    pub name: String,
}

impl IconId {
    /// Parse a raw `prefix:name` identifier.
    pub fn parse(raw: &str) -> Result<Self, SyncError> {
        let Some((prefix, name)) = raw.split_once(':') else {
            return Err(SyncError::InvalidIconId(raw.to_string()));
        };
        if prefix.is_empty() || name.is_empty() || name.contains(':') {
            return Err(SyncError::InvalidIconId(raw.to_string()));
        }
        Ok(Self {
            prefix: prefix.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.name)
    }
}

impl FromStr for IconId {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Extract the collection prefix from a raw identifier without requiring a
/// full parse. Returns `None` when no prefix is present, so ranking can
/// treat malformed identifiers as unranked instead of failing.
pub fn collection_prefix(icon: &str) -> Option<&str> {
    icon.split_once(':')
        .map(|(prefix, _)| prefix)
        .filter(|prefix| !prefix.is_empty())
}
