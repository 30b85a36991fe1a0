//! `session-*` methods and the daemon utility calls.

use tracing::debug;

use transmission_rpc_types::{
    BlockList, FreeSpace, Method, PortCheck, Session, SessionGet, SessionSet, SessionStats,
    TransmissionError,
};

use super::TransmissionClient;
use crate::envelope::RpcRequest;
use crate::transport::RpcTransport;

impl<T: RpcTransport> TransmissionClient<T> {
    /// Read daemon settings. Empty `fields` asks for all of them.
    pub async fn session_get(&self, args: SessionGet) -> Result<Session, TransmissionError> {
        debug!("Getting session settings {:?}", args.fields);
        let response = self
            .request(RpcRequest::new(Method::SessionGet).with_arguments(args))
            .await?;
        let session: Session = response.decode_arguments()?;
        debug!("Daemon version {}, rpc version {}", session.version, session.rpc_version);
        Ok(session)
    }

    /// Change daemon settings.
    pub async fn session_set(&self, args: SessionSet) -> Result<(), TransmissionError> {
        debug!("Setting session {args:?}");
        self.call(Method::SessionSet, args).await?;
        debug!("Session settings sent");
        Ok(())
    }

    /// Transfer statistics of the current and all past sessions.
    pub async fn session_stats(&self) -> Result<SessionStats, TransmissionError> {
        debug!("Getting session statistics");
        let response = self.request(RpcRequest::new(Method::SessionStats)).await?;
        let stats: SessionStats = response.decode_arguments()?;
        debug!("Session statistics: {stats:?}");
        Ok(stats)
    }

    /// Shut the daemon down.
    pub async fn session_close(&self) -> Result<(), TransmissionError> {
        debug!("Closing session");
        self.request(RpcRequest::new(Method::SessionClose)).await?;
        debug!("Close command sent");
        Ok(())
    }

    /// Free space in `path` on the daemon host.
    pub async fn free_space(&self, path: &str) -> Result<FreeSpace, TransmissionError> {
        debug!("Getting free space in {path}");
        let args = FreeSpace {
            path: path.to_string(),
            ..FreeSpace::default()
        };
        let response = self
            .request(RpcRequest::new(Method::FreeSpace).with_arguments(args))
            .await?;
        let free: FreeSpace = response.decode_arguments()?;
        debug!("{} bytes free in {}", free.size_bytes, free.path);
        Ok(free)
    }

    /// Check whether the peer port is reachable from outside.
    pub async fn port_test(&self) -> Result<PortCheck, TransmissionError> {
        debug!("Testing peer port");
        let response = self.request(RpcRequest::new(Method::PortTest)).await?;
        let check: PortCheck = response.decode_arguments()?;
        debug!("Peer port open: {}", check.port_is_open);
        Ok(check)
    }

    /// Refresh the blocklist from its configured URL.
    pub async fn blocklist_update(&self) -> Result<BlockList, TransmissionError> {
        debug!("Updating blocklist");
        let response = self.request(RpcRequest::new(Method::BlocklistUpdate)).await?;
        let blocklist: BlockList = response.decode_arguments()?;
        debug!("Blocklist holds {} rules", blocklist.blocklist_size);
        Ok(blocklist)
    }
}
