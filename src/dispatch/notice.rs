//! Availability notice

use std::sync::Arc;

use crate::registry::ResourceId;
use crate::subscriber::SubscriberId;

/// Message broadcast when a resource becomes available
///
/// Cheap to clone: the text is shared by every recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    resource: ResourceId,
    previous_holder: SubscriberId,
    text: Arc<str>,
}

impl Notice {
    /// Create a notice with custom text
    pub fn new(
        resource: ResourceId,
        previous_holder: SubscriberId,
        text: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            resource,
            previous_holder,
            text: text.into(),
        }
    }

    /// Create the standard "resource is available" notice
    pub fn available(resource: ResourceId, previous_holder: SubscriberId) -> Self {
        let text = format!("{} has been returned and is available.", resource);
        Self::new(resource, previous_holder, text)
    }

    /// Resource that became available
    pub fn resource(&self) -> &ResourceId {
        &self.resource
    }

    /// Subscriber that released the resource
    pub fn previous_holder(&self) -> &SubscriberId {
        &self.previous_holder
    }

    /// Message text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
