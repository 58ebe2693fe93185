//! Weather service port

use async_trait::async_trait;
use domain::{GeoLocation, WindSpeed};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Current wind conditions at a location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindObservation {
    /// Sustained wind speed at 10m
    pub speed: WindSpeed,
    /// Wind gusts at 10m
    pub gusts: WindSpeed,
}

/// Port for fetching current wind conditions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch the current wind speed and gusts for a location.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Weather` if the service call fails, or
    /// `ApplicationError::IncompleteData` if the response is missing the
    /// wind fields.
    async fn current_wind(&self, location: &GeoLocation)
    -> Result<WindObservation, ApplicationError>;
}
