//! Subscriber identity

/// Unique name of a subscriber (e.g. a library patron)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(String);

impl SubscriberId {
    /// Create a new subscriber id
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubscriberId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SubscriberId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
