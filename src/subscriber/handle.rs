//! Subscriber handle

use std::sync::Arc;

use crate::dispatch::Notice;

use super::deliver::{Deliver, DeliveryError};
use super::id::SubscriberId;

/// A subscriber: identity plus delivery capability
///
/// Cheap to clone. Two handles are equal when their ids are equal; the
/// capability is not part of the identity.
#[derive(Clone)]
pub struct Subscriber {
    id: SubscriberId,
    channel: Arc<dyn Deliver>,
}

impl Subscriber {
    /// Create a subscriber from an id and a capability
    pub fn new(id: impl Into<SubscriberId>, channel: impl Deliver) -> Self {
        Self {
            id: id.into(),
            channel: Arc::new(channel),
        }
    }

    /// Create a subscriber from an already shared capability
    pub fn from_arc(id: impl Into<SubscriberId>, channel: Arc<dyn Deliver>) -> Self {
        Self {
            id: id.into(),
            channel,
        }
    }

    /// Get the subscriber id
    pub fn id(&self) -> &SubscriberId {
        &self.id
    }

    /// Check if both handles share the same capability instance
    ///
    /// A subscriber that unsubscribes and requests again with a new
    /// capability has the same id but a different channel.
    pub fn same_channel(&self, other: &Subscriber) -> bool {
        Arc::ptr_eq(&self.channel, &other.channel)
    }

    /// Deliver a notice through this subscriber's capability
    pub async fn deliver(&self, notice: &Notice) -> Result<(), DeliveryError> {
        self.channel.deliver(notice).await
    }
}

impl PartialEq for Subscriber {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Subscriber {}

impl std::fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber").field("id", &self.id).finish()
    }
}
