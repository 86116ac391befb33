//! Broadcast service implementation
//!
//! Composes the resource store and the dispatcher. Resource state changes
//! commit under the resource's lock; notices go out after the lock is
//! dropped, so notified subscribers (or anyone else) can claim the resource
//! while the broadcast is still in flight.

use crate::dispatch::{DeliveryReport, DeliveryStatus, Dispatcher, Notice};
use crate::registry::{
    ClaimResult, ReleaseError, ResourceId, ResourceState, ResourceStats, ResourceStore,
};
use crate::subscriber::{DeliveryError, Subscriber, SubscriberId};

use super::config::ServiceConfig;

/// Result of a successful release
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    /// Resource that was released
    pub resource: ResourceId,
    /// Subscriber that held it
    pub previous_holder: SubscriberId,
    /// Delivery results for every subscriber that was waiting
    pub report: DeliveryReport,
}

/// Subscribe / notify / claim service over named resources
pub struct BroadcastService {
    store: ResourceStore,
    dispatcher: Dispatcher,
    config: ServiceConfig,
}

impl BroadcastService {
    /// Create a service with default configuration
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default())
    }

    /// Create a service with custom configuration
    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            store: ResourceStore::with_waiting_capacity(config.waiting_capacity),
            dispatcher: Dispatcher::new(config.delivery_mode, config.delivery_timeout),
            config,
        }
    }

    /// Get the service configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Ask for a resource
    ///
    /// Creates the resource on first reference. Returns `Claimed` if the
    /// caller now holds it, `Queued` if someone else does and the caller was
    /// put on the wait list.
    pub async fn request(&self, resource: &ResourceId, subscriber: &Subscriber) -> ClaimResult {
        let entry = self.store.get_or_create(resource).await;
        let mut entry = entry.lock().await;

        let result = entry.claim(subscriber);
        match result {
            ClaimResult::Claimed => tracing::info!(
                resource = %resource,
                subscriber = %subscriber.id(),
                "Resource claimed"
            ),
            ClaimResult::Queued => tracing::debug!(
                resource = %resource,
                subscriber = %subscriber.id(),
                holder = ?entry.holder().map(SubscriberId::as_str),
                waiting = entry.waiting().len(),
                "Resource held, subscriber queued"
            ),
        }

        result
    }

    /// Give a resource back and notify everyone waiting for it
    ///
    /// Fails with `NotHeld` if nobody holds the resource and `NotOwner` if
    /// someone other than `caller` does; state is left untouched in both
    /// cases. Delivery failures never fail the release, they are reported in
    /// [`ReleaseOutcome::report`].
    pub async fn release(
        &self,
        resource: &ResourceId,
        caller: &SubscriberId,
    ) -> Result<ReleaseOutcome, ReleaseError> {
        let refused = |e: &ReleaseError| {
            tracing::warn!(
                resource = %resource,
                subscriber = %caller,
                error = %e,
                "Release refused"
            )
        };

        let entry = self
            .store
            .get(resource)
            .await
            .ok_or_else(|| ReleaseError::NotHeld(resource.clone()))
            .inspect_err(refused)?;

        let released = {
            let mut entry = entry.lock().await;
            entry.release(caller).inspect_err(refused)?
        };

        tracing::info!(
            resource = %resource,
            subscriber = %caller,
            waiting = released.waiting.len(),
            "Resource released"
        );

        let notice = Notice::available(resource.clone(), released.previous_holder.clone());
        let report = self.dispatcher.broadcast(&released.waiting, &notice).await;

        if self.config.drop_unreachable {
            let closed = DeliveryStatus::Failed(DeliveryError::Closed);
            let unreachable: Vec<&Subscriber> = released
                .waiting
                .iter()
                .filter(|s| report.status_of(s.id()) == Some(&closed))
                .collect();

            if !unreachable.is_empty() {
                let mut entry = entry.lock().await;
                for subscriber in unreachable {
                    // Only the handle that failed; a re-request since then stays
                    if entry.remove_if_same(subscriber) {
                        tracing::info!(
                            resource = %resource,
                            subscriber = %subscriber.id(),
                            "Unreachable subscriber dropped from wait list"
                        );
                    }
                }
            }
        }

        Ok(ReleaseOutcome {
            resource: resource.clone(),
            previous_holder: released.previous_holder,
            report,
        })
    }

    /// Stop waiting for a resource
    ///
    /// Returns `true` if the subscriber was on the wait list. Calling it
    /// again, or for an unknown resource, is a no-op.
    pub async fn unsubscribe(&self, resource: &ResourceId, subscriber: &SubscriberId) -> bool {
        let Some(entry) = self.store.get(resource).await else {
            return false;
        };

        let removed = entry.lock().await.remove_subscriber(subscriber);
        if removed {
            tracing::debug!(
                resource = %resource,
                subscriber = %subscriber,
                "Subscriber left wait list"
            );
        }
        removed
    }

    /// Current state of a resource (unknown resources are available)
    pub async fn state(&self, resource: &ResourceId) -> ResourceState {
        let Some(entry) = self.store.get(resource).await else {
            return ResourceState::Available;
        };
        let entry = entry.lock().await;
        entry.state()
    }

    /// Current holder of a resource
    pub async fn holder(&self, resource: &ResourceId) -> Option<SubscriberId> {
        match self.state(resource).await {
            ResourceState::Held(holder) => Some(holder),
            ResourceState::Available => None,
        }
    }

    /// Subscribers waiting for a resource, in arrival order
    pub async fn waiting(&self, resource: &ResourceId) -> Vec<SubscriberId> {
        let Some(entry) = self.store.get(resource).await else {
            return Vec::new();
        };
        let entry = entry.lock().await;
        entry.waiting_ids()
    }

    /// Statistics for a resource
    pub async fn stats(&self, resource: &ResourceId) -> Option<ResourceStats> {
        let entry = self.store.get(resource).await?;
        let entry = entry.lock().await;
        Some(entry.stats())
    }

    /// Ids of all known resources, sorted
    pub async fn resources(&self) -> Vec<ResourceId> {
        self.store.ids().await
    }

    /// Number of known resources
    pub async fn resource_count(&self) -> usize {
        self.store.len().await
    }
}

impl Default for BroadcastService {
    fn default() -> Self {
        Self::new()
    }
}
