//! Application-level errors
//!
//! Each outbound lookup stage has its own variant so the page can show a
//! distinct message per failure, and a failed stage short-circuits the rest
//! without touching the separately stored address.

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level validation error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Geocoding service unreachable or failed
    #[error("Failed to fetch coordinates: {0}")]
    Geocoding(String),

    /// Geocoder returned no results for the address
    #[error("No results found for the given address.")]
    AddressNotFound,

    /// Weather service unreachable or failed
    #[error("Failed to fetch weather data: {0}")]
    Weather(String),

    /// Weather response was missing expected fields
    #[error("Weather data incomplete: {0}")]
    IncompleteData(String),

    /// Settings store failed to persist the record
    #[error("Failed to write settings: {0}")]
    Persistence(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// True for errors caused by user input rather than the system
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
