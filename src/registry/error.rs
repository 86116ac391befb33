//! Registry error types
//!
//! Error types for resource state transitions.

use crate::subscriber::SubscriberId;

use super::key::ResourceId;

/// Error type for release operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseError {
    /// Resource is available, there is nothing to release
    NotHeld(ResourceId),
    /// Resource is held by someone other than the caller
    NotOwner {
        resource: ResourceId,
        holder: SubscriberId,
        caller: SubscriberId,
    },
}

impl std::fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseError::NotHeld(resource) => write!(f, "Resource not held: {}", resource),
            ReleaseError::NotOwner {
                resource,
                holder,
                caller,
            } => write!(
                f,
                "Resource {} is held by {}, not {}",
                resource, holder, caller
            ),
        }
    }
}

impl std::error::Error for ReleaseError {}
