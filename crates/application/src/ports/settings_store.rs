//! Settings store port
//!
//! Durable persistence for the single settings record. Reads never fail;
//! a missing, unreadable or corrupt file degrades to an empty record.
//! Writes are all-or-nothing: a failed write must leave the stored file
//! untouched.

use async_trait::async_trait;
use domain::SettingsRecord;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for reading and atomically writing the settings record
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SettingsStorePort: Send + Sync {
    /// Read the current settings record.
    ///
    /// Never fails: a missing file, an unreadable file, or contents that
    /// do not parse as a top-level mapping all yield an empty record.
    async fn read(&self) -> SettingsRecord;

    /// Persist the complete record with all-or-nothing semantics.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Persistence` if the record could not be
    /// durably written; in that case the previously stored file is
    /// unchanged and the caller must not assume the record was saved.
    async fn write_atomic(&self, record: &SettingsRecord) -> Result<(), ApplicationError>;
}
