//! The delivery capability
//!
//! [`Deliver`] is the only way the core talks to a subscriber. Implementations
//! decide what "delivery" means: a direct call, a queued message, a network
//! send. The dispatcher treats each attempt independently, so one failing or
//! slow capability never affects the others.

use async_trait::async_trait;

use crate::dispatch::Notice;

use super::id::SubscriberId;

/// Capability to deliver a notice to one subscriber
///
/// Implementations should attempt delivery and return promptly. Long-running
/// work belongs on the subscriber's side of the capability (e.g. behind a
/// channel), not inside `deliver`.
#[async_trait]
pub trait Deliver: Send + Sync + 'static {
    /// Attempt to deliver a notice
    async fn deliver(&self, notice: &Notice) -> Result<(), DeliveryError>;
}

/// Why a single delivery attempt failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The receiving end is gone
    Closed,
    /// The capability refused the notice
    Rejected(String),
    /// The attempt did not finish within the configured delivery timeout
    TimedOut,
    /// The capability panicked while delivering
    Panicked,
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryError::Closed => write!(f, "Delivery channel closed"),
            DeliveryError::Rejected(reason) => write!(f, "Delivery rejected: {}", reason),
            DeliveryError::TimedOut => write!(f, "Delivery timed out"),
            DeliveryError::Panicked => write!(f, "Delivery panicked"),
        }
    }
}

impl std::error::Error for DeliveryError {}

/// A delivery failure attributed to a subscriber
///
/// Collected into a [`DeliveryReport`](crate::dispatch::DeliveryReport); never
/// fails the release that triggered the broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailed {
    /// Subscriber that could not be reached
    pub subscriber: SubscriberId,
    /// What went wrong
    pub error: DeliveryError,
}

impl std::fmt::Display for DeliveryFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Delivery to {} failed: {}", self.subscriber, self.error)
    }
}

impl std::error::Error for DeliveryFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
