//! RPC method names.

use std::fmt;

use serde::{Serialize, Serializer};

/// A Transmission RPC method, serialized as its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Method {
    TorrentStart,
    TorrentStartNow,
    TorrentStop,
    TorrentVerify,
    TorrentReannounce,
    TorrentSet,
    TorrentGet,
    TorrentAdd,
    TorrentRemove,
    TorrentSetLocation,
    TorrentRenamePath,

    SessionClose,
    SessionGet,
    SessionSet,
    SessionStats,

    QueueMoveTop,
    QueueMoveUp,
    QueueMoveDown,
    QueueMoveBottom,

    FreeSpace,
    PortTest,
    BlocklistUpdate,

    /// Not a daemon method. Sent by the handshake probe, which only cares
    /// about the session id it gets back.
    Ping,
}

impl Method {
    /// The method name as it appears in the request envelope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TorrentStart => "torrent-start",
            Self::TorrentStartNow => "torrent-start-now",
            Self::TorrentStop => "torrent-stop",
            Self::TorrentVerify => "torrent-verify",
            Self::TorrentReannounce => "torrent-reannounce",
            Self::TorrentSet => "torrent-set",
            Self::TorrentGet => "torrent-get",
            Self::TorrentAdd => "torrent-add",
            Self::TorrentRemove => "torrent-remove",
            Self::TorrentSetLocation => "torrent-set-location",
            Self::TorrentRenamePath => "torrent-rename-path",
            Self::SessionClose => "session-close",
            Self::SessionGet => "session-get",
            Self::SessionSet => "session-set",
            Self::SessionStats => "session-stats",
            Self::QueueMoveTop => "queue-move-top",
            Self::QueueMoveUp => "queue-move-up",
            Self::QueueMoveDown => "queue-move-down",
            Self::QueueMoveBottom => "queue-move-bottom",
            Self::FreeSpace => "free-space",
            Self::PortTest => "port-test",
            Self::BlocklistUpdate => "blocklist-update",
            Self::Ping => "ping",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
