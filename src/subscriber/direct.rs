//! Direct-call delivery

use async_trait::async_trait;

use crate::dispatch::Notice;

use super::deliver::{Deliver, DeliveryError};

/// Delivers notices by calling a closure in place
///
/// The closure runs on the dispatcher's task, so it should not block.
pub struct FnDelivery<F> {
    f: F,
}

impl<F> FnDelivery<F>
where
    F: Fn(&Notice) -> Result<(), DeliveryError> + Send + Sync + 'static,
{
    /// Wrap a closure as a delivery capability
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F> Deliver for FnDelivery<F>
where
    F: Fn(&Notice) -> Result<(), DeliveryError> + Send + Sync + 'static,
{
    async fn deliver(&self, notice: &Notice) -> Result<(), DeliveryError> {
        (self.f)(notice)
    }
}
