//! `queue-move-*` methods.

use tracing::debug;

use transmission_rpc_types::{Filter, Ids, Method, TransmissionError};

use super::TransmissionClient;
use crate::transport::RpcTransport;

impl<T: RpcTransport> TransmissionClient<T> {
    /// Move torrents to the front of the queue.
    pub async fn queue_move_top(&self, ids: Option<Ids>) -> Result<(), TransmissionError> {
        self.queue_move(Method::QueueMoveTop, ids).await
    }

    /// Move torrents one step towards the front.
    pub async fn queue_move_up(&self, ids: Option<Ids>) -> Result<(), TransmissionError> {
        self.queue_move(Method::QueueMoveUp, ids).await
    }

    /// Move torrents one step towards the back.
    pub async fn queue_move_down(&self, ids: Option<Ids>) -> Result<(), TransmissionError> {
        self.queue_move(Method::QueueMoveDown, ids).await
    }

    /// Move torrents to the back of the queue.
    pub async fn queue_move_bottom(&self, ids: Option<Ids>) -> Result<(), TransmissionError> {
        self.queue_move(Method::QueueMoveBottom, ids).await
    }

    async fn queue_move(&self, method: Method, ids: Option<Ids>) -> Result<(), TransmissionError> {
        debug!("{method} {ids:?}");
        self.call(method, Filter { ids }).await?;
        debug!("{method} command sent");
        Ok(())
    }
}
