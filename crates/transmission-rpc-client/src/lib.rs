//! # Session-aware client for the Transmission RPC protocol.
//!
//! The daemon guards its endpoint with a session id. A request without a
//! current id is answered with HTTP 409 and a fresh id in the
//! `X-Transmission-Session-Id` header. The client stores that id and resends
//! the request, so callers only see the outcome of the call.
//!
//! usage:
//!
//! ```rust,ignore
//! use transmission_rpc_client::{Ids, TorrentAdd, TorrentGet, TransmissionClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TransmissionClient::builder()
//!         .url("http://localhost:9091/transmission/rpc")
//!         .basic_auth("admin", "secret")
//!         .max_retries(3)
//!         .build()?;
//!
//!     let added = client
//!         .torrent_add(TorrentAdd {
//!             filename: Some("/path/to/file.torrent".into()),
//!             ..TorrentAdd::default()
//!         })
//!         .await?;
//!
//!     let torrents = client
//!         .torrent_get(TorrentGet {
//!             ids: Some(Ids::from(added.id)),
//!             fields: vec!["id".into(), "name".into(), "percentDone".into()],
//!         })
//!         .await?;
//!     println!("{torrents:?}");
//!
//!     client.torrent_stop(Some(Ids::from(added.id))).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod envelope;
mod transport;

#[cfg(test)]
mod testutil;

pub use client::{ClientBuilder, TransmissionClient};
pub use config::{
    ClientConfig, DEFAULT_MAX_RETRIES, DEFAULT_RPC_URL, MAX_RETRIES, normalize_max_retries,
};
pub use envelope::{RESULT_SUCCESS, RpcRequest, RpcResponse};
pub use tokio_util::sync::CancellationToken;
pub use transport::{HttpRequest, HttpResponse, RpcTransport, SESSION_ID_HEADER, USER_AGENT};
pub use transmission_rpc_types::*;

// Used by the integration tests only.
#[cfg(test)]
use {libc as _, tempfile as _, test_log as _, tracing_subscriber as _, wiremock as _};
