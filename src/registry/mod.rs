//! Resource registry
//!
//! The registry owns every resource and its wait list. Each resource sits
//! behind its own `tokio::sync::Mutex`, so claims and releases on one
//! resource are serialized while different resources never contend.
//!
//! # Architecture
//!
//! ```text
//!                        ResourceStore
//!              ┌───────────────────────────────┐
//!              │ resources: HashMap<Id,        │
//!              │   Arc<Mutex<Resource {        │
//!              │     holder: Option<Id>,       │
//!              │     waiting: WaitList,        │
//!              │   }>>                         │
//!              │ >                             │
//!              └───────────────┬───────────────┘
//!                              │
//!        ┌─────────────────────┼─────────────────────┐
//!        ▼                     ▼                     ▼
//!   claim(s)              release(s)        remove_subscriber(s)
//!   Claimed / Queued      snapshot of       drop from wait list
//!                         waiting ──► Dispatcher
//! ```
//!
//! # State machine
//!
//! ```text
//!   Available ──claim(s)──► Held(s)
//!   Held(s) ──claim(s)────► Held(s)              idempotent
//!   Held(s) ──claim(t)────► Held(s)              t joins the wait list
//!   Held(s) ──release(s)──► Available            wait list is broadcast
//! ```

pub mod error;
pub mod key;
pub mod resource;
pub mod store;
pub mod waitlist;

pub use error::ReleaseError;
pub use key::ResourceId;
pub use resource::{ClaimResult, Released, Resource, ResourceState, ResourceStats};
pub use store::ResourceStore;
pub use waitlist::WaitList;
