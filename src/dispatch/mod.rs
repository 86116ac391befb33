//! Notification dispatch
//!
//! When a resource is released, the [`Dispatcher`] hands a [`Notice`] to
//! every subscriber that was waiting for it. Deliveries are independent: a
//! failure reaching one subscriber is recorded in the [`DeliveryReport`] and
//! never stops delivery to the others. The dispatcher does not pick who gets
//! the resource next.
//!
//! ```text
//!   release(Dune) ──► Dispatcher::broadcast(waiting, notice)
//!                         │
//!                         ├──► task ──► Billy.deliver()  ──► Delivered
//!                         ├──► task ──► Isaac.deliver()  ──► Failed(Closed)
//!                         └──► task ──► Ada.deliver()    ──► Delivered
//!                         │
//!                         ▼
//!                   DeliveryReport
//! ```

pub mod dispatcher;
pub mod notice;
pub mod report;

pub use dispatcher::{DeliveryMode, Dispatcher};
pub use notice::Notice;
pub use report::{DeliveryOutcome, DeliveryReport, DeliveryStatus};
