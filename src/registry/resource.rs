//! Resource state and transitions
//!
//! A [`Resource`] holds the current holder and the wait list. All mutation
//! happens through [`Resource::claim`], [`Resource::release`] and
//! [`Resource::remove_subscriber`]; the store wraps each resource in a mutex
//! so these run one at a time.

use crate::subscriber::{Subscriber, SubscriberId};

use super::error::ReleaseError;
use super::key::ResourceId;
use super::waitlist::WaitList;

/// Result of a claim attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimResult {
    /// Caller now holds the resource (or already did)
    Claimed,
    /// Resource is held by someone else, caller is on the wait list
    Queued,
}

/// Observable state of a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Nobody holds the resource
    Available,
    /// The given subscriber holds the resource
    Held(SubscriberId),
}

/// Result of a successful release
///
/// Carries what the dispatcher needs to notify waiting subscribers.
#[derive(Debug)]
pub struct Released {
    /// Subscriber that held the resource
    pub previous_holder: SubscriberId,
    /// Wait list at the moment the resource became available
    pub waiting: Vec<Subscriber>,
}

/// Statistics for a resource
#[derive(Debug, Clone)]
pub struct ResourceStats {
    /// Current holder, if any
    pub holder: Option<SubscriberId>,
    /// Number of waiting subscribers
    pub waiting_count: usize,
    /// Successful claims (idempotent re-claims are not counted)
    pub claims: u64,
    /// Successful releases
    pub releases: u64,
    /// Times a subscriber was added to the wait list
    pub queued: u64,
}

/// A single exclusively held resource
#[derive(Debug)]
pub struct Resource {
    id: ResourceId,
    holder: Option<SubscriberId>,
    waiting: WaitList,
    claims: u64,
    releases: u64,
    queued: u64,
}

impl Resource {
    /// Create an available resource with an empty wait list
    pub fn new(id: ResourceId) -> Self {
        Self::with_capacity(id, 0)
    }

    /// Create an available resource with a pre-sized wait list
    pub fn with_capacity(id: ResourceId, waiting_capacity: usize) -> Self {
        Self {
            id,
            holder: None,
            waiting: WaitList::with_capacity(waiting_capacity),
            claims: 0,
            releases: 0,
            queued: 0,
        }
    }

    /// Get the resource id
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// Try to take the resource
    ///
    /// An available resource goes to the caller, who leaves the wait list if
    /// it was on it. Re-claiming a resource the caller already holds is a
    /// no-op. Otherwise the caller joins the wait list (once).
    pub fn claim(&mut self, subscriber: &Subscriber) -> ClaimResult {
        if let Some(holder) = &self.holder {
            if holder == subscriber.id() {
                return ClaimResult::Claimed;
            }
            if self.waiting.push(subscriber.clone()) {
                self.queued += 1;
            }
            return ClaimResult::Queued;
        }

        self.waiting.remove(subscriber.id());
        self.holder = Some(subscriber.id().clone());
        self.claims += 1;
        ClaimResult::Claimed
    }

    /// Give the resource up
    ///
    /// Only the holder may release. The wait list is left as is; a snapshot
    /// of it is returned for broadcasting.
    pub fn release(&mut self, caller: &SubscriberId) -> Result<Released, ReleaseError> {
        match &self.holder {
            None => return Err(ReleaseError::NotHeld(self.id.clone())),
            Some(holder) if holder != caller => {
                return Err(ReleaseError::NotOwner {
                    resource: self.id.clone(),
                    holder: holder.clone(),
                    caller: caller.clone(),
                })
            }
            Some(_) => {}
        }

        self.holder = None;
        self.releases += 1;

        Ok(Released {
            previous_holder: caller.clone(),
            waiting: self.waiting.snapshot(),
        })
    }

    /// Drop a subscriber from the wait list
    ///
    /// Returns `true` if it was waiting.
    pub fn remove_subscriber(&mut self, id: &SubscriberId) -> bool {
        self.waiting.remove(id)
    }

    /// Drop a wait list entry only if it is still the given handle
    ///
    /// Used to clean up after a failed delivery without touching an entry the
    /// subscriber has since replaced. Returns `true` if it was removed.
    pub fn remove_if_same(&mut self, subscriber: &Subscriber) -> bool {
        self.waiting.remove_if_same(subscriber)
    }

    /// Current state
    pub fn state(&self) -> ResourceState {
        match &self.holder {
            Some(holder) => ResourceState::Held(holder.clone()),
            None => ResourceState::Available,
        }
    }

    /// Current holder, if any
    pub fn holder(&self) -> Option<&SubscriberId> {
        self.holder.as_ref()
    }

    /// Check if nobody holds the resource
    pub fn is_available(&self) -> bool {
        self.holder.is_none()
    }

    /// Ids of waiting subscribers in arrival order
    pub fn waiting_ids(&self) -> Vec<SubscriberId> {
        self.waiting.ids()
    }

    /// Get the wait list
    pub fn waiting(&self) -> &WaitList {
        &self.waiting
    }

    /// Get resource statistics
    pub fn stats(&self) -> ResourceStats {
        ResourceStats {
            holder: self.holder.clone(),
            waiting_count: self.waiting.len(),
            claims: self.claims,
            releases: self.releases,
            queued: self.queued,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Notice;
    use crate::subscriber::FnDelivery;

    fn sub(name: &str) -> Subscriber {
        Subscriber::new(name, FnDelivery::new(|_: &Notice| Ok(())))
    }

    fn assert_holder_not_waiting(resource: &Resource) {
        if let Some(holder) = resource.holder() {
            assert!(
                !resource.waiting().contains(holder),
                "{} is both holder and waiting",
                holder
            );
        }
    }

    #[test]
    fn test_claim_available() {
        let mut dune = Resource::new(ResourceId::new("Dune"));
        let bobby = sub("Bobby");

        assert_eq!(dune.claim(&bobby), ClaimResult::Claimed);
        assert_eq!(dune.state(), ResourceState::Held(bobby.id().clone()));
        assert!(dune.waiting().is_empty());
    }

    #[test]
    fn test_reclaim_is_idempotent() {
        let mut dune = Resource::new(ResourceId::new("Dune"));
        let bobby = sub("Bobby");

        assert_eq!(dune.claim(&bobby), ClaimResult::Claimed);
        assert_eq!(dune.claim(&bobby), ClaimResult::Claimed);

        assert!(dune.waiting().is_empty());
        assert_eq!(dune.stats().claims, 1);
        assert_holder_not_waiting(&dune);
    }

    #[test]
    fn test_queue_is_duplicate_free() {
        let mut dune = Resource::new(ResourceId::new("Dune"));
        let bobby = sub("Bobby");
        let billy = sub("Billy");

        dune.claim(&bobby);
        assert_eq!(dune.claim(&billy), ClaimResult::Queued);
        assert_eq!(dune.claim(&billy), ClaimResult::Queued);

        assert_eq!(dune.waiting_ids(), vec![billy.id().clone()]);
        assert_eq!(dune.stats().queued, 1);
    }

    #[test]
    fn test_release_not_held() {
        let mut dune = Resource::new(ResourceId::new("Dune"));

        let result = dune.release(&SubscriberId::new("Bobby"));
        assert_eq!(
            result.unwrap_err(),
            ReleaseError::NotHeld(ResourceId::new("Dune"))
        );
        assert_eq!(dune.stats().releases, 0);
    }

    #[test]
    fn test_release_not_owner_leaves_state() {
        let mut dune = Resource::new(ResourceId::new("Dune"));
        let bobby = sub("Bobby");
        let billy = sub("Billy");
        dune.claim(&bobby);
        dune.claim(&billy);

        let result = dune.release(billy.id());
        assert!(matches!(result, Err(ReleaseError::NotOwner { .. })));

        assert_eq!(dune.state(), ResourceState::Held(bobby.id().clone()));
        assert_eq!(dune.waiting_ids(), vec![billy.id().clone()]);
        assert_holder_not_waiting(&dune);
    }

    #[test]
    fn test_release_keeps_wait_list() {
        let mut dune = Resource::new(ResourceId::new("Dune"));
        let bobby = sub("Bobby");
        let billy = sub("Billy");
        let isaac = sub("Isaac");
        dune.claim(&bobby);
        dune.claim(&billy);
        dune.claim(&isaac);

        let released = dune.release(bobby.id()).unwrap();

        assert_eq!(released.previous_holder, *bobby.id());
        assert_eq!(released.waiting, vec![billy.clone(), isaac.clone()]);
        assert!(dune.is_available());
        assert_eq!(dune.waiting_ids().len(), 2);
    }

    #[test]
    fn test_claim_after_release_leaves_wait_list() {
        let mut dune = Resource::new(ResourceId::new("Dune"));
        let bobby = sub("Bobby");
        let billy = sub("Billy");
        let isaac = sub("Isaac");
        dune.claim(&bobby);
        dune.claim(&billy);
        dune.claim(&isaac);
        dune.release(bobby.id()).unwrap();

        assert_eq!(dune.claim(&isaac), ClaimResult::Claimed);
        assert_eq!(dune.waiting_ids(), vec![billy.id().clone()]);
        assert_holder_not_waiting(&dune);

        assert_eq!(dune.claim(&billy), ClaimResult::Queued);
        assert_eq!(dune.waiting_ids(), vec![billy.id().clone()]);
    }

    #[test]
    fn test_remove_subscriber() {
        let mut dune = Resource::new(ResourceId::new("Dune"));
        let bobby = sub("Bobby");
        dune.claim(&bobby);
        dune.claim(&sub("Billy"));
        dune.claim(&sub("Isaac"));

        assert!(dune.remove_subscriber(&SubscriberId::new("Billy")));
        assert!(!dune.remove_subscriber(&SubscriberId::new("Billy")));
        assert_eq!(dune.waiting_ids(), vec![SubscriberId::new("Isaac")]);
    }

    #[test]
    fn test_remove_if_same() {
        let mut dune = Resource::new(ResourceId::new("Dune"));
        dune.claim(&sub("Bobby"));
        let stale = sub("Billy");
        dune.claim(&stale);
        dune.remove_subscriber(stale.id());
        dune.claim(&sub("Billy"));

        assert!(!dune.remove_if_same(&stale));
        assert_eq!(dune.waiting_ids(), vec![SubscriberId::new("Billy")]);
    }

    #[test]
    fn test_stats() {
        let mut dune = Resource::with_capacity(ResourceId::new("Dune"), 8);
        let bobby = sub("Bobby");
        let billy = sub("Billy");
        dune.claim(&bobby);
        dune.claim(&billy);
        dune.release(bobby.id()).unwrap();
        dune.claim(&billy);

        let stats = dune.stats();
        assert_eq!(stats.holder, Some(billy.id().clone()));
        assert_eq!(stats.waiting_count, 0);
        assert_eq!(stats.claims, 2);
        assert_eq!(stats.releases, 1);
        assert_eq!(stats.queued, 1);
    }
}
