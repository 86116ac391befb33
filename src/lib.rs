//! Broadcast availability notifications for exclusively held resources
//!
//! `claimcast` is a small pub/sub core built around a single primitive:
//! a named resource that at most one subscriber holds at a time. Anyone who
//! asks for the resource while it is held is put on its wait list. When the
//! holder releases it, every waiting subscriber is told that it is available
//! again, and whoever asks for it first gets it.
//!
//! ```text
//!   request(Dune, Bobby) ──► Claimed          holder = Bobby
//!   request(Dune, Billy) ──► Queued           waiting = [Billy]
//!   request(Dune, Isaac) ──► Queued           waiting = [Billy, Isaac]
//!   release(Dune, Bobby) ──► Released         broadcast ──► Billy, Isaac
//!   request(Dune, Isaac) ──► Claimed          waiting = [Billy]
//! ```
//!
//! The service never picks a winner. Notified subscribers race each other
//! and the per-resource lock decides who wins.
//!
//! # Example
//!
//! ```no_run
//! use claimcast::{BroadcastService, ChannelDelivery, ClaimResult, ResourceId, Subscriber};
//!
//! # async fn run() -> Result<(), claimcast::ReleaseError> {
//! let service = BroadcastService::new();
//! let dune = ResourceId::new("Dune");
//!
//! let (bobby_channel, _bobby_inbox) = ChannelDelivery::new();
//! let (billy_channel, mut billy_inbox) = ChannelDelivery::new();
//! let bobby = Subscriber::new("Bobby", bobby_channel);
//! let billy = Subscriber::new("Billy", billy_channel);
//!
//! assert_eq!(service.request(&dune, &bobby).await, ClaimResult::Claimed);
//! assert_eq!(service.request(&dune, &billy).await, ClaimResult::Queued);
//!
//! let outcome = service.release(&dune, bobby.id()).await?;
//! assert!(outcome.report.is_complete());
//!
//! let notice = billy_inbox.recv().await.unwrap();
//! println!("{}", notice.text());
//! assert_eq!(service.request(&dune, &billy).await, ClaimResult::Claimed);
//! # Ok(())
//! # }
//! ```

pub mod dispatch;
pub mod registry;
pub mod service;
pub mod subscriber;

pub use dispatch::{
    DeliveryMode, DeliveryOutcome, DeliveryReport, DeliveryStatus, Dispatcher, Notice,
};
pub use registry::{
    ClaimResult, ReleaseError, Released, Resource, ResourceId, ResourceState, ResourceStats,
    ResourceStore, WaitList,
};
pub use service::{BroadcastService, ReleaseOutcome, ServiceConfig};
pub use subscriber::{
    ChannelDelivery, Deliver, DeliveryError, DeliveryFailed, FnDelivery, Inbox, Subscriber,
    SubscriberId,
};
