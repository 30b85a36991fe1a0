//! Torrent records returned by `torrent-get`, `torrent-add` and
//! `torrent-rename-path`.
//!
//! Every field defaults when the daemon leaves it out, which it does for any
//! field not listed in the request's `fields`.

use serde::Deserialize;

use crate::NumBool;

/// A file inside a torrent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)] // rationale: these are the same fields as in Transmission RPC
pub struct File {
    pub bytes_completed: i64,

    pub length: i64,

    pub name: String,
}

/// Per-file download state.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct FileStat {
    pub bytes_completed: i64,

    pub priority: i64,

    pub wanted: bool,
}

/// A connected peer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct Peer {
    pub address: String,

    pub client_name: String,

    pub flag_str: String,

    pub port: i64,

    pub progress: f64,

    pub rate_to_client: i64,

    pub rate_to_peer: i64,

    pub client_is_choked: bool,

    pub client_is_interested: bool,

    pub is_downloading_from: bool,

    pub is_encrypted: bool,

    pub is_incoming: bool,

    pub is_uploading_to: bool,

    #[serde(rename = "isUTP")]
    pub is_utp: bool,

    pub peer_is_choked: bool,

    pub peer_is_interested: bool,
}

/// Where the connected peers were discovered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct PeersFrom {
    pub from_cache: i64,

    pub from_dht: i64,

    pub from_incoming: i64,

    pub from_lpd: i64,

    pub from_ltep: i64,

    pub from_pex: i64,

    pub from_tracker: i64,
}

/// A tracker announce URL.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct Tracker {
    pub announce: String,

    pub id: i64,

    pub scrape: String,

    pub tier: i64,
}

/// Announce and scrape statistics for one tracker.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct TrackerStat {
    pub announce: String,

    pub announce_state: i64,

    pub download_count: i64,

    pub host: String,

    pub id: i64,

    pub last_announce_peer_count: i64,

    pub last_announce_result: String,

    pub last_announce_start_time: i64,

    pub last_announce_time: i64,

    pub last_scrape_result: String,

    pub last_scrape_start_time: i64,

    pub last_scrape_time: i64,

    pub leecher_count: i64,

    pub next_announce_time: i64,

    pub next_scrape_time: i64,

    pub scrape: String,

    pub scrape_state: i64,

    pub seeder_count: i64,

    pub tier: i64,

    pub has_announced: bool,

    pub has_scraped: bool,

    pub is_backup: bool,

    pub last_announce_succeeded: bool,

    pub last_announce_timed_out: bool,

    pub last_scrape_succeeded: bool,

    /// Some daemons send this as `0`/`1`.
    pub last_scrape_timed_out: NumBool,
}

/// Torrent information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct Torrent {
    pub activity_date: i64,

    pub added_date: i64,

    pub bandwidth_priority: i64,

    pub comment: String,

    pub corrupt_ever: i64,

    pub creator: String,

    pub date_created: i64,

    pub desired_available: i64,

    pub done_date: i64,

    pub download_dir: String,

    pub downloaded_ever: i64,

    pub download_limit: i64,

    pub edit_date: i64,

    pub error: i64,

    pub error_string: String,

    pub eta: i64,

    pub eta_idle: i64,

    pub files: Vec<File>,

    pub file_stats: Vec<FileStat>,

    pub hash_string: String,

    pub have_unchecked: i64,

    pub have_valid: i64,

    pub id: i64,

    pub labels: Vec<String>,

    pub left_until_done: i64,

    pub magnet_link: String,

    pub manual_announce_time: i64,

    pub max_connected_peers: i64,

    pub metadata_percent_complete: f64,

    pub name: String,

    /// Only present in `torrent-rename-path` responses.
    pub path: String,

    #[serde(rename = "peer-limit")]
    pub peer_limit: i64,

    pub peers: Vec<Peer>,

    pub peers_connected: i64,

    pub peers_from: PeersFrom,

    pub peers_getting_from_us: i64,

    pub peers_sending_to_us: i64,

    pub percent_done: f64,

    pub pieces: String,

    pub piece_count: i64,

    pub piece_size: i64,

    pub priorities: Vec<i64>,

    pub queue_position: i64,

    pub rate_download: i64,

    pub rate_upload: i64,

    pub recheck_progress: f64,

    pub seconds_downloading: i64,

    pub seconds_seeding: i64,

    pub seed_idle_limit: i64,

    pub seed_idle_mode: i64,

    pub seed_ratio_limit: f64,

    pub seed_ratio_mode: i64,

    pub size_when_done: i64,

    pub start_date: i64,

    pub status: i64,

    pub trackers: Vec<Tracker>,

    pub tracker_stats: Vec<TrackerStat>,

    pub total_size: i64,

    pub torrent_file: String,

    pub uploaded_ever: i64,

    pub upload_limit: i64,

    pub upload_ratio: f64,

    pub wanted: Vec<i64>,

    pub webseeds: Vec<String>,

    pub webseeds_sending_to_us: i64,

    pub download_limited: bool,

    pub honors_session_limits: bool,

    pub is_finished: bool,

    pub is_private: bool,

    pub is_stalled: bool,

    pub upload_limited: bool,
}
