//! Notification port
//!
//! Best-effort outbound notification dispatched after a successful save.
//! Failures are logged by the caller and never change the save outcome.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for sending an address-update notification
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationPort: Send + Sync {
    /// Notify that the monitored address changed.
    ///
    /// `raw_input` is the submitted text before normalization, included
    /// for debugging on the receiving end.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification could not be delivered; the
    /// caller treats this as best-effort and only logs it.
    async fn address_updated(&self, address: &str, raw_input: &str)
    -> Result<(), ApplicationError>;
}
