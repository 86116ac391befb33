//! Channel-backed delivery
//!
//! Notices are pushed onto an unbounded `tokio::sync::mpsc` channel, so
//! delivery never waits on the subscriber. The subscriber drains its
//! [`Inbox`] at its own pace.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::dispatch::Notice;

use super::deliver::{Deliver, DeliveryError};

/// Receiving end of a [`ChannelDelivery`]
pub type Inbox = mpsc::UnboundedReceiver<Notice>;

/// Delivers notices into an in-process channel
#[derive(Debug, Clone)]
pub struct ChannelDelivery {
    tx: mpsc::UnboundedSender<Notice>,
}

impl ChannelDelivery {
    /// Create a capability and the inbox it feeds
    pub fn new() -> (Self, Inbox) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Check if the inbox has been dropped
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

#[async_trait]
impl Deliver for ChannelDelivery {
    async fn deliver(&self, notice: &Notice) -> Result<(), DeliveryError> {
        self.tx
            .send(notice.clone())
            .map_err(|_| DeliveryError::Closed)
    }
}
