//! Service configuration

use std::time::Duration;

use crate::dispatch::DeliveryMode;

/// Broadcast service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// How deliveries of one broadcast are scheduled
    pub delivery_mode: DeliveryMode,

    /// Upper bound for a single delivery attempt (None = wait indefinitely)
    pub delivery_timeout: Option<Duration>,

    /// Remove subscribers from the wait list when their inbox is closed
    pub drop_unreachable: bool,

    /// Initial wait list capacity for new resources
    pub waiting_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            delivery_mode: DeliveryMode::Concurrent,
            delivery_timeout: Some(Duration::from_secs(5)),
            drop_unreachable: false,
            waiting_capacity: 4,
        }
    }
}

impl ServiceConfig {
    /// Set the delivery mode
    pub fn delivery_mode(mut self, mode: DeliveryMode) -> Self {
        self.delivery_mode = mode;
        self
    }

    /// Set the per-delivery timeout
    pub fn delivery_timeout(mut self, timeout: Duration) -> Self {
        self.delivery_timeout = Some(timeout);
        self
    }

    /// Let deliveries run without a timeout
    pub fn no_delivery_timeout(mut self) -> Self {
        self.delivery_timeout = None;
        self
    }

    /// Remove subscribers whose inbox is closed after each broadcast
    pub fn drop_unreachable(mut self, enabled: bool) -> Self {
        self.drop_unreachable = enabled;
        self
    }

    /// Set the initial wait list capacity
    pub fn waiting_capacity(mut self, capacity: usize) -> Self {
        self.waiting_capacity = capacity;
        self
    }
}
