//! Per-subscriber delivery results

use crate::subscriber::{DeliveryError, DeliveryFailed, SubscriberId};

/// Whether a single delivery went through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The capability accepted the notice
    Delivered,
    /// The attempt failed, see the error
    Failed(DeliveryError),
}

/// Delivery result for one subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    /// Subscriber the notice was meant for
    pub subscriber: SubscriberId,
    /// How the attempt went
    pub status: DeliveryStatus,
}

impl DeliveryOutcome {
    /// Check if the notice went through
    pub fn is_delivered(&self) -> bool {
        self.status == DeliveryStatus::Delivered
    }
}

/// Results of one broadcast, one entry per notified subscriber
///
/// Entry order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    outcomes: Vec<DeliveryOutcome>,
}

impl DeliveryReport {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, subscriber: SubscriberId, result: Result<(), DeliveryError>) {
        let status = match result {
            Ok(()) => DeliveryStatus::Delivered,
            Err(error) => DeliveryStatus::Failed(error),
        };
        self.outcomes.push(DeliveryOutcome { subscriber, status });
    }

    /// All outcomes
    pub fn outcomes(&self) -> &[DeliveryOutcome] {
        &self.outcomes
    }

    /// Subscribers that were reached
    pub fn delivered(&self) -> Vec<&SubscriberId> {
        self.outcomes
            .iter()
            .filter(|o| o.is_delivered())
            .map(|o| &o.subscriber)
            .collect()
    }

    /// Subscribers that could not be reached, with the reason
    pub fn failed(&self) -> Vec<DeliveryFailed> {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.status {
                DeliveryStatus::Failed(error) => Some(DeliveryFailed {
                    subscriber: o.subscriber.clone(),
                    error: error.clone(),
                }),
                DeliveryStatus::Delivered => None,
            })
            .collect()
    }

    /// Status for a given subscriber, if it was part of the broadcast
    pub fn status_of(&self, subscriber: &SubscriberId) -> Option<&DeliveryStatus> {
        self.outcomes
            .iter()
            .find(|o| &o.subscriber == subscriber)
            .map(|o| &o.status)
    }

    /// Check if every subscriber was reached
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(DeliveryOutcome::is_delivered)
    }

    /// Number of notified subscribers
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if nobody was notified
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
