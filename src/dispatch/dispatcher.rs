//! Broadcast dispatcher

use std::time::Duration;

use crate::subscriber::{DeliveryError, Subscriber};

use super::notice::Notice;
use super::report::{DeliveryReport, DeliveryStatus};

/// How deliveries of one broadcast are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// Every delivery runs on its own task; completion order is arbitrary
    #[default]
    Concurrent,
    /// Deliveries run one at a time in wait-list order
    Sequential,
}

/// Delivers notices to a snapshot of waiting subscribers
///
/// Every delivery runs on a spawned task, in both modes, so a capability
/// that panics only fails its own delivery.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    mode: DeliveryMode,
    timeout: Option<Duration>,
}

impl Dispatcher {
    /// Create a dispatcher
    pub fn new(mode: DeliveryMode, timeout: Option<Duration>) -> Self {
        Self { mode, timeout }
    }

    /// Get the delivery mode
    pub fn mode(&self) -> DeliveryMode {
        self.mode
    }

    /// Get the per-delivery timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Deliver `notice` to every subscriber in `waiting`
    ///
    /// Returns once every delivery attempt has finished, failed or timed out.
    pub async fn broadcast(&self, waiting: &[Subscriber], notice: &Notice) -> DeliveryReport {
        let mut report = DeliveryReport::with_capacity(waiting.len());

        match self.mode {
            DeliveryMode::Concurrent => {
                let handles: Vec<_> = waiting
                    .iter()
                    .map(|subscriber| (subscriber.id().clone(), self.spawn(subscriber, notice)))
                    .collect();

                for (id, handle) in handles {
                    report.record(id, flatten(handle.await));
                }
            }
            DeliveryMode::Sequential => {
                for subscriber in waiting {
                    let result = flatten(self.spawn(subscriber, notice).await);
                    report.record(subscriber.id().clone(), result);
                }
            }
        }

        for outcome in report.outcomes() {
            match &outcome.status {
                DeliveryStatus::Delivered => tracing::debug!(
                    resource = %notice.resource(),
                    subscriber = %outcome.subscriber,
                    "Notice delivered"
                ),
                DeliveryStatus::Failed(error) => tracing::warn!(
                    resource = %notice.resource(),
                    subscriber = %outcome.subscriber,
                    error = %error,
                    "Notice delivery failed"
                ),
            }
        }

        report
    }

    fn spawn(
        &self,
        subscriber: &Subscriber,
        notice: &Notice,
    ) -> tokio::task::JoinHandle<Result<(), DeliveryError>> {
        let subscriber = subscriber.clone();
        let notice = notice.clone();
        let timeout = self.timeout;

        tokio::spawn(async move {
            match timeout {
                Some(limit) => tokio::time::timeout(limit, subscriber.deliver(&notice))
                    .await
                    .unwrap_or(Err(DeliveryError::TimedOut)),
                None => subscriber.deliver(&notice).await,
            }
        })
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DeliveryMode::default(), None)
    }
}

fn flatten(
    joined: Result<Result<(), DeliveryError>, tokio::task::JoinError>,
) -> Result<(), DeliveryError> {
    match joined {
        Ok(result) => result,
        Err(e) if e.is_panic() => Err(DeliveryError::Panicked),
        Err(_) => Err(DeliveryError::Rejected("delivery task cancelled".into())),
    }
}
