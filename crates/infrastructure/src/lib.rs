//! Infrastructure layer for the Wind Lantern address service
//!
//! Configuration loading, the JSON settings file store, and the adapters
//! that back the application ports with the real outbound integrations.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use config::AppConfig;
pub use persistence::JsonSettingsStore;
