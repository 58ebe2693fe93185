//! Address read/update service
//!
//! Orchestrates the read-modify-write of the settings record and the
//! best-effort notification sent after a successful save. The notification
//! is dispatched after the commit point and never changes the reported
//! outcome of the save.

use std::sync::Arc;

use domain::{Address, SettingsRecord};
use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{NotificationPort, SettingsStorePort};

/// Service owning the monitored address lifecycle
pub struct AddressService {
    store: Arc<dyn SettingsStorePort>,
    notifier: Option<Arc<dyn NotificationPort>>,
}

impl std::fmt::Debug for AddressService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressService")
            .field("has_notifier", &self.notifier.is_some())
            .finish_non_exhaustive()
    }
}

impl AddressService {
    /// Create a new address service without notifications
    #[must_use]
    pub fn new(store: Arc<dyn SettingsStorePort>) -> Self {
        Self {
            store,
            notifier: None,
        }
    }

    /// Attach a notifier for address-update notifications
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationPort>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Read the current settings record, with the address key present
    /// (initialized to the empty string if the file had none)
    pub async fn current(&self) -> SettingsRecord {
        let mut record = self.store.read().await;
        record.ensure_address_key();
        record
    }

    /// Validate, normalize and persist a new address.
    ///
    /// Performs a read-modify-write of the whole record so that unknown
    /// fields already in the file survive the update. On success a
    /// best-effort notification is dispatched in the background.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Domain` if the input fails validation
    /// - `ApplicationError::Persistence` if the atomic write fails; the
    ///   stored file is unchanged in that case
    #[instrument(skip(self, raw_input))]
    pub async fn update_address(&self, raw_input: &str) -> Result<SettingsRecord, ApplicationError> {
        let address = Address::parse(raw_input)?;

        let mut record = self.store.read().await;
        record.set_address(&address);
        self.store.write_atomic(&record).await?;

        info!(address = %address, "Address updated");

        if let Some(notifier) = &self.notifier {
            let notifier = Arc::clone(notifier);
            let saved = address.as_str().to_string();
            let raw = raw_input.to_string();
            tokio::spawn(async move {
                if let Err(e) = notifier.address_updated(&saved, &raw).await {
                    warn!(error = %e, "Address-update notification failed");
                }
            });
        }

        Ok(record)
    }
}
