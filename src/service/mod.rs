//! Broadcast service
//!
//! [`BroadcastService`] is the entry point: it owns the resource store and
//! the dispatcher and exposes `request`, `release` and `unsubscribe`.
//! Build one per process (or per test) and share it behind an `Arc`.

pub mod broadcast;
pub mod config;

pub use broadcast::{BroadcastService, ReleaseOutcome};
pub use config::ServiceConfig;
