//! Resource store
//!
//! Owns every resource. Resources are created on first reference and live
//! as long as the store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use super::key::ResourceId;
use super::resource::Resource;

/// Map of resource id to resource
///
/// The map itself is behind a `RwLock` and only write-locked when a new
/// resource is inserted. Each resource has its own `Mutex`, so operations on
/// different resources never wait on each other.
pub struct ResourceStore {
    resources: RwLock<HashMap<ResourceId, Arc<Mutex<Resource>>>>,
    waiting_capacity: usize,
}

impl ResourceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_waiting_capacity(0)
    }

    /// Create an empty store whose resources pre-size their wait lists
    pub fn with_waiting_capacity(waiting_capacity: usize) -> Self {
        Self {
            resources: RwLock::new(HashMap::new()),
            waiting_capacity,
        }
    }

    /// Get a resource, creating it if this is the first reference
    pub async fn get_or_create(&self, id: &ResourceId) -> Arc<Mutex<Resource>> {
        if let Some(resource) = self.resources.read().await.get(id) {
            return Arc::clone(resource);
        }

        let mut resources = self.resources.write().await;

        // Another caller may have created it between the two locks
        let resource = resources.entry(id.clone()).or_insert_with(|| {
            tracing::debug!(resource = %id, "Resource created");
            Arc::new(Mutex::new(Resource::with_capacity(
                id.clone(),
                self.waiting_capacity,
            )))
        });

        Arc::clone(resource)
    }

    /// Get an existing resource
    pub async fn get(&self, id: &ResourceId) -> Option<Arc<Mutex<Resource>>> {
        self.resources.read().await.get(id).map(Arc::clone)
    }

    /// Number of resources
    pub async fn len(&self) -> usize {
        self.resources.read().await.len()
    }

    /// Check if the store has no resources
    pub async fn is_empty(&self) -> bool {
        self.resources.read().await.is_empty()
    }

    /// Ids of all resources, sorted
    pub async fn ids(&self) -> Vec<ResourceId> {
        let mut ids: Vec<ResourceId> = self.resources.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for ResourceStore {
    fn default() -> Self {
        Self::new()
    }
}
