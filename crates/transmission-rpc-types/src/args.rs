//! Request arguments.
//!
//! Unset optional fields are left out of the request so the daemon keeps its
//! current value. Build these with struct update syntax:
//!
//! ```rust,ignore
//! use transmission_rpc_types::{Ids, TorrentSet};
//!
//! let args = TorrentSet {
//!     ids: Some(Ids::from(vec![1, 2])),
//!     upload_limit: Some(512),
//!     upload_limited: Some(true),
//!     ..Default::default()
//! };
//! # let _ = args;
//! ```

use serde::{Serialize, Serializer, ser::SerializeSeq};

use crate::Ids;

/// Selects torrents for the action and queue methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Filter {
    /// Torrents to act on. `None` acts on all of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Ids>,
}

impl From<Ids> for Filter {
    fn from(ids: Ids) -> Self {
        Self { ids: Some(ids) }
    }
}

/// Arguments for `torrent-get`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TorrentGet {
    /// Torrents to fetch. `None` fetches all of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Ids>,

    /// Field names to include, e.g. `"id"`, `"name"`, `"percentDone"`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

/// Arguments for `torrent-add`. One of `filename` or `metainfo` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)] // rationale: these are the same fields as in Transmission RPC
pub struct TorrentAdd {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<String>,

    /// Path or URL of a .torrent file, or a magnet link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Base64 encoded .torrent content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metainfo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_limit: Option<i64>,

    #[serde(rename = "bandwidthPriority", skip_serializing_if = "Option::is_none")]
    pub bandwidth_priority: Option<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files_wanted: Vec<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files_unwanted: Vec<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub priority_high: Vec<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub priority_low: Vec<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub priority_normal: Vec<i64>,
}

/// Arguments for `torrent-remove`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TorrentRemove {
    /// Torrents to remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Ids>,

    /// Also delete downloaded data.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub delete_local_data: bool,
}

/// Arguments for `torrent-set-location`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TorrentMove {
    /// Torrents to relocate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Ids>,

    /// The new download directory.
    pub location: String,

    /// Move the data into `location`. When false the daemon looks for the
    /// data there instead.
    #[serde(rename = "move", skip_serializing_if = "std::ops::Not::not")]
    pub move_data: bool,
}

/// Arguments for `torrent-rename-path`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TorrentRename {
    /// Exactly one torrent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Ids>,

    /// Current path of the file or directory, relative to the torrent root.
    pub path: String,

    /// New name for the last component of `path`.
    pub name: String,
}

/// Replacement of one tracker's announce URL, identified by tracker id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerReplace {
    /// Tracker id as reported in [`crate::Tracker::id`].
    pub id: i64,
    /// New announce URL.
    pub announce: String,
}

/// Arguments for `torrent-set`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TorrentSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_priority: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_limited: Option<bool>,

    #[serde(rename = "files-wanted", skip_serializing_if = "Vec::is_empty")]
    pub files_wanted: Vec<i64>,

    #[serde(rename = "files-unwanted", skip_serializing_if = "Vec::is_empty")]
    pub files_unwanted: Vec<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub honors_session_limits: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Ids>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(rename = "peer-limit", skip_serializing_if = "Option::is_none")]
    pub peer_limit: Option<i64>,

    #[serde(rename = "priority-high", skip_serializing_if = "Vec::is_empty")]
    pub priority_high: Vec<i64>,

    #[serde(rename = "priority-low", skip_serializing_if = "Vec::is_empty")]
    pub priority_low: Vec<i64>,

    #[serde(rename = "priority-normal", skip_serializing_if = "Vec::is_empty")]
    pub priority_normal: Vec<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_position: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_idle_limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_idle_mode: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_ratio_limit: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_ratio_mode: Option<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tracker_add: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tracker_remove: Vec<i64>,

    /// Sent as the flat `[id, url, id, url, ...]` list the daemon expects.
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_tracker_replace"
    )]
    pub tracker_replace: Vec<TrackerReplace>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_limited: Option<bool>,
}

fn serialize_tracker_replace<S: Serializer>(
    replacements: &[TrackerReplace],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    #[serde(untagged)]
    enum Item<'a> {
        Id(i64),
        Announce(&'a str),
    }

    let mut seq = serializer.serialize_seq(Some(replacements.len() * 2))?;
    for replacement in replacements {
        seq.serialize_element(&Item::Id(replacement.id))?;
        seq.serialize_element(&Item::Announce(&replacement.announce))?;
    }
    seq.end()
}

/// Arguments for `session-get`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionGet {
    /// Field names to include. Empty returns every field.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

/// Arguments for `session-set`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub struct SessionSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_speed_down: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_speed_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_speed_time_begin: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_speed_time_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_speed_time_end: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_speed_time_day: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_speed_up: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocklist_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocklist_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_size_mb: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_queue_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_queue_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dht_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_seeding_limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_seeding_limit_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub incomplete_dir: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub incomplete_dir_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lpd_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_limit_global: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_limit_per_torrent: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pex_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_port: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_port_random_on_start: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_forwarding_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_stalled_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_stalled_minutes: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename_partial_files: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_torrent_done_filename: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_torrent_done_enabled: Option<bool>,

    #[serde(rename = "seedRatioLimit", skip_serializing_if = "Option::is_none")]
    pub seed_ratio_limit: Option<f64>,

    #[serde(rename = "seedRatioLimited", skip_serializing_if = "Option::is_none")]
    pub seed_ratio_limited: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_queue_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_queue_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_limit_down: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_limit_down_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_limit_up: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_limit_up_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_added_torrents: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trash_original_torrent_files: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub utp_enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unset_fields_are_omitted() {
        let args = SessionSet {
            incomplete_dir_enabled: Some(true),
            download_queue_enabled: Some(true),
            download_queue_size: Some(3),
            seed_ratio_limit: Some(1.5),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "incomplete-dir-enabled": true,
                "download-queue-enabled": true,
                "download-queue-size": 3,
                "seedRatioLimit": 1.5,
            })
        );
    }

    #[test]
    fn empty_filter_selects_everything() {
        assert_eq!(serde_json::to_value(Filter::default()).unwrap(), json!({}));
    }

    #[test]
    fn torrent_set_uses_daemon_key_names() {
        let args = TorrentSet {
            ids: Some(Ids::from(4_i64)),
            peer_limit: Some(20),
            files_wanted: vec![0, 1],
            tracker_replace: vec![TrackerReplace {
                id: 2,
                announce: "udp://new.example:6969".into(),
            }],
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "ids": [4],
                "peer-limit": 20,
                "files-wanted": [0, 1],
                "trackerReplace": [2, "udp://new.example:6969"],
            })
        );
    }

    #[test]
    fn torrent_remove_and_move_flags() {
        let remove = TorrentRemove {
            ids: Some(Ids::Hashes(vec!["abc".into()])),
            delete_local_data: true,
        };
        assert_eq!(
            serde_json::to_value(&remove).unwrap(),
            json!({ "ids": ["abc"], "delete-local-data": true })
        );

        let relocate = TorrentMove {
            ids: None,
            location: "/data".into(),
            move_data: true,
        };
        assert_eq!(
            serde_json::to_value(&relocate).unwrap(),
            json!({ "location": "/data", "move": true })
        );
    }

    #[test]
    fn torrent_add_mixes_key_styles() {
        let args = TorrentAdd {
            filename: Some("magnet:?xt=urn:btih:abc".into()),
            download_dir: Some("/downloads".into()),
            bandwidth_priority: Some(1),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "filename": "magnet:?xt=urn:btih:abc",
                "download-dir": "/downloads",
                "bandwidthPriority": 1,
            })
        );
    }
}
