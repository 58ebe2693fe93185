//! Open-Meteo wind client
//!
//! HTTP client for the Open-Meteo Weather API, requesting only the
//! current wind speed and gust fields.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiResponse, CurrentWind};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Response arrived but the wind fields were missing
    #[error("Incomplete data: missing {0}")]
    IncompleteData(&'static str),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching wind data
#[async_trait]
pub trait WindClient: Send + Sync {
    /// Get current wind conditions for a location
    async fn current_wind(&self, latitude: f64, longitude: f64)
    -> Result<CurrentWind, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Extract the wind fields, treating any missing field as incomplete data
    fn parse_current_wind(response: &ApiResponse) -> Result<CurrentWind, WeatherError> {
        let current = response
            .current
            .as_ref()
            .ok_or(WeatherError::IncompleteData("current"))?;

        let speed_kmh = current
            .wind_speed_10m
            .ok_or(WeatherError::IncompleteData("wind_speed_10m"))?;
        let gusts_kmh = current
            .wind_gusts_10m
            .ok_or(WeatherError::IncompleteData("wind_gusts_10m"))?;

        Ok(CurrentWind {
            speed_kmh,
            gusts_kmh,
        })
    }
}

#[async_trait]
impl WindClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn current_wind(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWind, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!(
            "{}/forecast?latitude={latitude}&longitude={longitude}&current=wind_speed_10m,wind_gusts_10m",
            self.config.base_url
        );

        debug!(url = %url, "Fetching current wind");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        debug!(
            resolved_lat = api_response.latitude,
            resolved_lon = api_response.longitude,
            "Wind data received"
        );

        Self::parse_current_wind(&api_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WindData;

    #[test]
    fn config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn validate_coordinates_valid() {
        assert!(OpenMeteoClient::validate_coordinates(0.0, 0.0).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(90.0, 180.0).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(-90.0, -180.0).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(40.7128, -74.006).is_ok());
    }

    #[test]
    fn validate_coordinates_invalid() {
        assert!(OpenMeteoClient::validate_coordinates(91.0, 0.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(-91.0, 0.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(0.0, 181.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(0.0, -181.0).is_err());
    }

    #[test]
    fn parse_current_wind_extracts_both_fields() {
        let response = ApiResponse {
            latitude: 40.75,
            longitude: -74.0,
            current: Some(WindData {
                wind_speed_10m: Some(12.5),
                wind_gusts_10m: Some(25.0),
            }),
        };
        let wind = OpenMeteoClient::parse_current_wind(&response).unwrap();
        assert!((wind.speed_kmh - 12.5).abs() < f64::EPSILON);
        assert!((wind.gusts_kmh - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_current_wind_rejects_missing_speed() {
        let response = ApiResponse {
            latitude: 0.0,
            longitude: 0.0,
            current: Some(WindData {
                wind_speed_10m: None,
                wind_gusts_10m: Some(25.0),
            }),
        };
        let err = OpenMeteoClient::parse_current_wind(&response).unwrap_err();
        assert!(matches!(err, WeatherError::IncompleteData("wind_speed_10m")));
    }

    #[test]
    fn parse_current_wind_rejects_missing_current_block() {
        let response = ApiResponse {
            latitude: 0.0,
            longitude: 0.0,
            current: None,
        };
        let err = OpenMeteoClient::parse_current_wind(&response).unwrap_err();
        assert!(matches!(err, WeatherError::IncompleteData("current")));
    }

    #[test]
    fn client_creation() {
        let client = OpenMeteoClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn weather_error_display() {
        let err = WeatherError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));

        let err = WeatherError::IncompleteData("wind_gusts_10m");
        assert!(err.to_string().contains("wind_gusts_10m"));
    }
}
