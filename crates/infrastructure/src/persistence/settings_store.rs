//! JSON settings file store
//!
//! Stores the settings record as pretty-printed JSON in a single file.
//! Writes are all-or-nothing: the new content is staged in a temp file in
//! the target's directory, locked, flushed to disk, and only then renamed
//! over the target. A failure at any stage removes the temp file and
//! leaves the target exactly as it was.
//!
//! Reads never fail. A missing file, an unreadable file, or contents that
//! are not a top-level JSON mapping all degrade to an empty record with a
//! warning.
//!
//! Concurrent writers are each individually atomic but race on the final
//! rename; the last committed write wins and the file is never observed
//! in a partially written state.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use application::error::ApplicationError;
use application::ports::SettingsStorePort;
use domain::SettingsRecord;

/// Errors raised while persisting the settings file
#[derive(Debug, Error)]
pub enum SettingsStoreError {
    /// Record could not be serialized to JSON
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Temp file could not be created next to the target
    #[error("Temp file creation failed: {0}")]
    TempFile(std::io::Error),

    /// Exclusive lock on the temp file could not be acquired or released
    #[error("Lock failed: {0}")]
    Lock(std::io::Error),

    /// Staged content could not be written or flushed
    #[error("Write failed: {0}")]
    Write(std::io::Error),

    /// Staged file could not be moved over the target
    #[error("Commit failed: {0}")]
    Commit(std::io::Error),
}

/// Settings store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Create a store for the given settings file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the settings file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_sync(path: &Path) -> SettingsRecord {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Settings file absent, starting empty");
                return SettingsRecord::new();
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Settings file unreadable, starting empty");
                return SettingsRecord::new();
            },
        };

        match serde_json::from_str::<serde_json::Value>(&content) {
            // Non-mapping top levels also collapse to empty here
            Ok(value) => SettingsRecord::from_value(value),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Settings file corrupt, starting empty");
                SettingsRecord::new()
            },
        }
    }

    fn write_sync(path: &Path, record: &SettingsRecord) -> Result<(), SettingsStoreError> {
        let staged = Self::stage(path, record)?;
        Self::commit(staged, path)
    }

    /// Stage the serialized record in a locked temp file.
    ///
    /// The temp file lives in the target's directory so the commit rename
    /// stays on one filesystem. Dropping the returned handle without
    /// committing removes the temp file and leaves the target untouched.
    fn stage(path: &Path, record: &SettingsRecord) -> Result<NamedTempFile, SettingsStoreError> {
        let payload = serde_json::to_vec_pretty(record)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = tempfile::Builder::new()
            .prefix("tmp_settings_")
            .tempfile_in(dir)
            .map_err(SettingsStoreError::TempFile)?;

        // Temp files default to 0600; the committed file should be readable
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged
                .as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))
                .map_err(SettingsStoreError::TempFile)?;
        }

        staged
            .as_file()
            .lock_exclusive()
            .map_err(SettingsStoreError::Lock)?;

        let file = staged.as_file_mut();
        file.set_len(0).map_err(SettingsStoreError::Write)?;
        file.write_all(&payload).map_err(SettingsStoreError::Write)?;
        file.flush().map_err(SettingsStoreError::Write)?;
        file.sync_all().map_err(SettingsStoreError::Write)?;

        FileExt::unlock(staged.as_file()).map_err(SettingsStoreError::Lock)?;

        Ok(staged)
    }

    /// Move the staged file over the target.
    ///
    /// Rename is atomic on the same filesystem. If rename is refused
    /// (some mounts, some platforms), fall back to copy-then-delete,
    /// which replaces the content but without the atomicity guarantee.
    fn commit(staged: NamedTempFile, path: &Path) -> Result<(), SettingsStoreError> {
        match staged.persist(path) {
            Ok(_) => Ok(()),
            Err(persist_err) => {
                warn!(
                    path = %path.display(),
                    error = %persist_err.error,
                    "Rename failed, falling back to copy"
                );
                Self::commit_via_copy(persist_err.file, path)
            },
        }
    }

    fn commit_via_copy(staged: NamedTempFile, path: &Path) -> Result<(), SettingsStoreError> {
        match fs::copy(staged.path(), path) {
            Ok(_) => {
                // The target holds the new record at this point, so a
                // failure to remove the temp file is not a save failure
                if let Err(e) = staged.close() {
                    warn!(error = %e, "Could not remove staged settings file after copy");
                }
                Ok(())
            },
            Err(copy_err) => {
                // Best effort: the temp handle's drop also removes it
                let _ = staged.close();
                Err(SettingsStoreError::Commit(copy_err))
            },
        }
    }
}

#[async_trait]
impl SettingsStorePort for JsonSettingsStore {
    #[instrument(skip(self))]
    async fn read(&self) -> SettingsRecord {
        let path = self.path.clone();
        match tokio::task::spawn_blocking(move || Self::read_sync(&path)).await {
            Ok(record) => record,
            Err(e) => {
                error!(error = %e, "Settings read task failed");
                SettingsRecord::new()
            },
        }
    }

    #[instrument(skip(self, record))]
    async fn write_atomic(&self, record: &SettingsRecord) -> Result<(), ApplicationError> {
        let path = self.path.clone();
        let record = record.clone();
        tokio::task::spawn_blocking(move || Self::write_sync(&path, &record))
            .await
            .map_err(|e| ApplicationError::Internal(e.to_string()))?
            .map_err(|e| ApplicationError::Persistence(e.to_string()))
    }
}
