//! Weather port adapter over the Open-Meteo client

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use application::error::ApplicationError;
use application::ports::{WeatherPort, WindObservation};
use domain::{GeoLocation, WindSpeed};
use integration_weather::{WeatherError, WindClient};

/// Adapts the Open-Meteo client to the application's weather port
pub struct WeatherAdapter {
    client: Arc<dyn WindClient>,
}

impl WeatherAdapter {
    /// Create an adapter over any wind client
    pub fn new(client: Arc<dyn WindClient>) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter").finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn current_wind(
        &self,
        location: &GeoLocation,
    ) -> Result<WindObservation, ApplicationError> {
        let wind = self
            .client
            .current_wind(location.latitude(), location.longitude())
            .await
            .map_err(|e| match e {
                WeatherError::IncompleteData(field) => {
                    ApplicationError::IncompleteData(field.to_string())
                },
                other => ApplicationError::Weather(other.to_string()),
            })?;

        Ok(WindObservation {
            speed: WindSpeed::from_kmh(wind.speed_kmh),
            gusts: WindSpeed::from_kmh(wind.gusts_kmh),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integration_weather::CurrentWind;

    struct FixedClient(Result<CurrentWind, fn() -> WeatherError>);

    #[async_trait]
    impl WindClient for FixedClient {
        async fn current_wind(
            &self,
            _latitude: f64,
            _longitude: f64,
        ) -> Result<CurrentWind, WeatherError> {
            match &self.0 {
                Ok(wind) => Ok(*wind),
                Err(make) => Err(make()),
            }
        }
    }

    fn location() -> GeoLocation {
        GeoLocation::new(40.7484, -73.9857).unwrap()
    }

    #[tokio::test]
    async fn kmh_values_become_wind_speeds() {
        let adapter = WeatherAdapter::new(Arc::new(FixedClient(Ok(CurrentWind {
            speed_kmh: 12.5,
            gusts_kmh: 25.0,
        }))));

        let wind = adapter.current_wind(&location()).await.unwrap();
        assert!((wind.speed.as_kmh() - 12.5).abs() < f64::EPSILON);
        assert!((wind.speed.as_mph() - 7.77).abs() < 1e-9);
        assert!((wind.gusts.as_mph() - 15.53).abs() < 1e-9);
    }

    #[tokio::test]
    async fn incomplete_data_keeps_its_own_variant() {
        let adapter = WeatherAdapter::new(Arc::new(FixedClient(Err(|| {
            WeatherError::IncompleteData("wind_gusts_10m")
        }))));

        let err = adapter.current_wind(&location()).await.unwrap_err();
        match err {
            ApplicationError::IncompleteData(field) => assert_eq!(field, "wind_gusts_10m"),
            other => panic!("expected IncompleteData, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn service_failure_becomes_weather_error() {
        let adapter = WeatherAdapter::new(Arc::new(FixedClient(Err(|| {
            WeatherError::ServiceUnavailable("HTTP 503".to_string())
        }))));

        let err = adapter.current_wind(&location()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Weather(_)));
    }
}
