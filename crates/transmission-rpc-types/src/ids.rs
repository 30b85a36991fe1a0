//! Torrent selectors used by the `ids` argument.

use serde::{Serialize, Serializer};

/// A single torrent reference: either the daemon-assigned numeric id or the
/// info hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// Numeric id, only stable for the lifetime of the daemon process.
    Id(i64),
    /// Hex encoded info hash.
    Hash(String),
}

/// Which torrents a request applies to.
///
/// Leaving `ids` out of a request selects every torrent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ids {
    /// Numeric ids.
    Ids(Vec<i64>),
    /// Info hashes.
    Hashes(Vec<String>),
    /// Any mix of numeric ids and hashes.
    Mixed(Vec<Id>),
    /// Torrents that changed recently.
    RecentlyActive,
}

impl Serialize for Ids {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ids(ids) => ids.serialize(serializer),
            Self::Hashes(hashes) => hashes.serialize(serializer),
            Self::Mixed(ids) => ids.serialize(serializer),
            Self::RecentlyActive => serializer.serialize_str("recently-active"),
        }
    }
}

impl From<i64> for Ids {
    fn from(id: i64) -> Self {
        Self::Ids(vec![id])
    }
}

impl From<Vec<i64>> for Ids {
    fn from(ids: Vec<i64>) -> Self {
        Self::Ids(ids)
    }
}

impl From<Vec<String>> for Ids {
    fn from(hashes: Vec<String>) -> Self {
        Self::Hashes(hashes)
    }
}

impl From<Vec<Id>> for Ids {
    fn from(ids: Vec<Id>) -> Self {
        Self::Mixed(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::{Id, Ids};

    #[test]
    fn numeric_ids_serialize_as_array() {
        let json = serde_json::to_string(&Ids::from(vec![1_i64, 2])).unwrap();
        assert_eq!(json, "[1,2]");
    }

    #[test]
    fn mixed_ids_keep_their_kind() {
        let ids = Ids::Mixed(vec![Id::Id(7), Id::Hash("deadbeef".into())]);
        let json = serde_json::to_string(&ids).unwrap();
        assert_eq!(json, r#"[7,"deadbeef"]"#);
    }

    #[test]
    fn recently_active_is_a_string() {
        let json = serde_json::to_string(&Ids::RecentlyActive).unwrap();
        assert_eq!(json, "\"recently-active\"");
    }
}
