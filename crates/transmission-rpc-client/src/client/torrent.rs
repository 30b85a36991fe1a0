//! `torrent-*` methods.

use tracing::debug;

use transmission_rpc_types::{
    Filter, Ids, Method, Torrent, TorrentAdd, TorrentGet, TorrentMove, TorrentRemove,
    TorrentRename, TorrentSet, TransmissionError,
};

use super::TransmissionClient;
use crate::envelope::RpcRequest;
use crate::transport::RpcTransport;

impl<T: RpcTransport> TransmissionClient<T> {
    /// Start torrents. `None` targets every torrent.
    pub async fn torrent_start(&self, ids: Option<Ids>) -> Result<(), TransmissionError> {
        debug!("Starting torrents {ids:?}");
        self.call(Method::TorrentStart, Filter { ids }).await?;
        debug!("Start command sent");
        Ok(())
    }

    /// Start torrents, bypassing the download queue.
    pub async fn torrent_start_now(&self, ids: Option<Ids>) -> Result<(), TransmissionError> {
        debug!("Starting torrents now {ids:?}");
        self.call(Method::TorrentStartNow, Filter { ids }).await?;
        debug!("Start-now command sent");
        Ok(())
    }

    /// Stop torrents.
    pub async fn torrent_stop(&self, ids: Option<Ids>) -> Result<(), TransmissionError> {
        debug!("Stopping torrents {ids:?}");
        self.call(Method::TorrentStop, Filter { ids }).await?;
        debug!("Stop command sent");
        Ok(())
    }

    /// Queue torrents for verification.
    pub async fn torrent_verify(&self, ids: Option<Ids>) -> Result<(), TransmissionError> {
        debug!("Verifying torrents {ids:?}");
        self.call(Method::TorrentVerify, Filter { ids }).await?;
        debug!("Verify command sent");
        Ok(())
    }

    /// Ask trackers for more peers.
    pub async fn torrent_reannounce(&self, ids: Option<Ids>) -> Result<(), TransmissionError> {
        debug!("Reannouncing torrents {ids:?}");
        self.call(Method::TorrentReannounce, Filter { ids }).await?;
        debug!("Reannounce command sent");
        Ok(())
    }

    /// Change torrent properties.
    pub async fn torrent_set(&self, args: TorrentSet) -> Result<(), TransmissionError> {
        debug!("Setting properties of torrents {:?}", args.ids);
        self.call(Method::TorrentSet, args).await?;
        debug!("Set command sent");
        Ok(())
    }

    /// Fetch the requested `fields` of the selected torrents.
    ///
    /// A daemon that knows no matching torrent omits the `torrents` key; that
    /// is returned as an empty list.
    pub async fn torrent_get(&self, args: TorrentGet) -> Result<Vec<Torrent>, TransmissionError> {
        debug!("Getting torrents {:?}", args.ids);
        let response = self
            .request(RpcRequest::new(Method::TorrentGet).with_arguments(args))
            .await?;
        let torrents: Vec<Torrent> = response.decode_key("torrents")?;
        debug!("Got {} torrents", torrents.len());
        Ok(torrents)
    }

    /// Add a torrent by URL, magnet link, path or base64 metainfo.
    ///
    /// Adding a torrent the daemon already has is not an error; the existing
    /// torrent is returned.
    pub async fn torrent_add(&self, args: TorrentAdd) -> Result<Torrent, TransmissionError> {
        debug!("Adding torrent {:?}", args.filename);
        let response = self
            .request(RpcRequest::new(Method::TorrentAdd).with_arguments(args))
            .await?;
        let torrent: Torrent =
            response.decode_first_key(&["torrent-added", "torrent-duplicate"])?;
        debug!("Added torrent {} ({})", torrent.id, torrent.hash_string);
        Ok(torrent)
    }

    /// Remove torrents, optionally deleting their data.
    pub async fn torrent_remove(&self, args: TorrentRemove) -> Result<(), TransmissionError> {
        debug!(
            "Removing torrents {:?}, delete_local_data={}",
            args.ids, args.delete_local_data
        );
        self.call(Method::TorrentRemove, args).await?;
        debug!("Remove command sent");
        Ok(())
    }

    /// Point torrents at a new location, moving the data if asked to.
    pub async fn torrent_set_location(&self, args: TorrentMove) -> Result<(), TransmissionError> {
        debug!("Moving torrents {:?} to {}", args.ids, args.location);
        self.call(Method::TorrentSetLocation, args).await?;
        debug!("Set-location command sent");
        Ok(())
    }

    /// Rename a file or directory inside a torrent.
    ///
    /// The daemon answers with `id`, `path` and `name` of the renamed torrent.
    pub async fn torrent_rename_path(
        &self,
        args: TorrentRename,
    ) -> Result<Torrent, TransmissionError> {
        debug!("Renaming {} to {} in torrents {:?}", args.path, args.name, args.ids);
        let response = self
            .request(RpcRequest::new(Method::TorrentRenamePath).with_arguments(args))
            .await?;
        let torrent: Torrent = response.decode_arguments()?;
        debug!("Renamed torrent {}", torrent.id);
        Ok(torrent)
    }
}
