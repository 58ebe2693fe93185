//! Persistence layer
//!
//! File-backed storage for the settings record.

mod settings_store;

pub use settings_store::{JsonSettingsStore, SettingsStoreError};
