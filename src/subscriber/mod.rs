//! Subscribers and their delivery capabilities
//!
//! A subscriber is an identity plus a way to reach it. The core never looks
//! inside a subscriber; it only hands [`Notice`](crate::dispatch::Notice)s to
//! the subscriber's [`Deliver`] capability.
//!
//! Two capabilities ship with the crate:
//! - [`ChannelDelivery`]: queues notices on an in-process channel
//! - [`FnDelivery`]: calls a closure directly

pub mod channel;
pub mod deliver;
pub mod direct;
pub mod handle;
pub mod id;

pub use channel::{ChannelDelivery, Inbox};
pub use deliver::{Deliver, DeliveryError, DeliveryFailed};
pub use direct::FnDelivery;
pub use handle::Subscriber;
pub use id::SubscriberId;
