//! Session level results: `session-get`, `session-stats` and the utility
//! calls.

use serde::{Deserialize, Serialize};

/// Display units the daemon uses for speeds, sizes and memory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
#[allow(missing_docs)] // rationale: these are the same fields as in Transmission RPC
pub struct Units {
    pub speed_units: Vec<String>,

    pub speed_bytes: i64,

    pub size_units: Vec<String>,

    pub size_bytes: i64,

    pub memory_units: Vec<String>,

    pub memory_bytes: i64,
}

/// Daemon session settings, as returned by `session-get`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
#[allow(missing_docs)]
pub struct Session {
    pub alt_speed_down: i64,

    pub alt_speed_enabled: bool,

    pub alt_speed_time_begin: i64,

    pub alt_speed_time_enabled: bool,

    pub alt_speed_time_end: i64,

    pub alt_speed_time_day: i64,

    pub alt_speed_up: i64,

    pub blocklist_url: String,

    pub blocklist_enabled: bool,

    pub blocklist_size: i64,

    pub cache_size_mb: i64,

    pub config_dir: String,

    pub download_dir: String,

    pub download_queue_size: i64,

    pub download_queue_enabled: bool,

    pub dht_enabled: bool,

    pub encryption: String,

    pub idle_seeding_limit: i64,

    pub idle_seeding_limit_enabled: bool,

    pub incomplete_dir: String,

    pub incomplete_dir_enabled: bool,

    pub lpd_enabled: bool,

    pub peer_limit_global: i64,

    pub peer_limit_per_torrent: i64,

    pub pex_enabled: bool,

    pub peer_port: i64,

    pub peer_port_random_on_start: bool,

    pub port_forwarding_enabled: bool,

    pub queue_stalled_enabled: bool,

    pub queue_stalled_minutes: i64,

    pub rename_partial_files: bool,

    pub rpc_version: i64,

    pub rpc_version_minimum: i64,

    pub script_torrent_done_filename: String,

    pub script_torrent_done_enabled: bool,

    #[serde(rename = "seedRatioLimit")]
    pub seed_ratio_limit: f64,

    #[serde(rename = "seedRatioLimited")]
    pub seed_ratio_limited: bool,

    pub seed_queue_size: i64,

    pub seed_queue_enabled: bool,

    pub speed_limit_down: i64,

    pub speed_limit_down_enabled: bool,

    pub speed_limit_up: i64,

    pub speed_limit_up_enabled: bool,

    pub start_added_torrents: bool,

    pub trash_original_torrent_files: bool,

    pub units: Units,

    pub utp_enabled: bool,

    pub version: String,
}

/// Session statistics.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct SessionStats {
    pub active_torrent_count: i64,

    pub download_speed: i64,

    pub paused_torrent_count: i64,

    pub torrent_count: i64,

    pub upload_speed: i64,

    #[serde(rename = "cumulative-stats")]
    pub cumulative_stats: StatsDetails,

    #[serde(rename = "current-stats")]
    pub current_stats: StatsDetails,
}

/// Detailed statistics.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct StatsDetails {
    pub uploaded_bytes: i64,

    pub downloaded_bytes: i64,

    pub files_added: i64,

    pub session_count: i64,

    pub seconds_active: i64,
}

/// Free space in a directory on the daemon host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeSpace {
    /// The directory that was queried.
    pub path: String,

    /// Bytes available in `path`. Never sent, only read back.
    #[serde(rename = "size-bytes", skip_serializing)]
    pub size_bytes: i64,
}

/// Result of `port-test`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortCheck {
    /// Whether the peer port is reachable from the outside.
    #[serde(rename = "port-is-open")]
    pub port_is_open: bool,
}

/// Result of `blocklist-update`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlockList {
    /// Number of rules in the refreshed blocklist.
    #[serde(rename = "blocklist-size")]
    pub blocklist_size: i64,
}
