//! Geocoding service port

use async_trait::async_trait;
use domain::{Address, GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for converting free-text addresses into coordinates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Look up the best-match coordinates for an address.
    ///
    /// Returns `Ok(None)` when the geocoder has no results for the
    /// address ("address not found" is not an error at this seam).
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Geocoding` if the service is
    /// unreachable or responds with something unusable.
    async fn geocode(&self, address: &Address) -> Result<Option<GeoLocation>, ApplicationError>;
}
