//! # Transmission RPC Types
//!
//! This crate defines the method names, request arguments, result records and
//! error type of the Transmission RPC protocol. It has no transport; see the
//! `transmission-rpc-client` crate for that.

mod args;
mod error;
mod ids;
mod method;
mod num_bool;
mod session;
mod torrent;

pub use args::{
    Filter, SessionGet, SessionSet, TorrentAdd, TorrentGet, TorrentMove, TorrentRemove,
    TorrentRename, TorrentSet, TrackerReplace,
};
pub use error::TransmissionError;
pub use ids::{Id, Ids};
pub use method::Method;
pub use num_bool::NumBool;
pub use session::{BlockList, FreeSpace, PortCheck, Session, SessionStats, StatsDetails, Units};
pub use torrent::{File, FileStat, Peer, PeersFrom, Torrent, Tracker, TrackerStat};
