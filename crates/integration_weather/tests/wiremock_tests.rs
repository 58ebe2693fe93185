//! Integration tests for the wind client using wiremock
//!
//! These tests verify the Open-Meteo client's behavior against a mock HTTP
//! server, ensuring proper handling of various response scenarios.

use integration_weather::{OpenMeteoClient, WeatherConfig, WeatherError, WindClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample Open-Meteo API response for testing
fn sample_wind_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 40.75,
        "longitude": -74.0,
        "generationtime_ms": 0.123,
        "utc_offset_seconds": -14400,
        "timezone": "GMT",
        "timezone_abbreviation": "GMT",
        "elevation": 10.0,
        "current_units": {
            "time": "iso8601",
            "wind_speed_10m": "km/h",
            "wind_gusts_10m": "km/h"
        },
        "current": {
            "time": "2026-08-30T12:00",
            "interval": 900,
            "wind_speed_10m": 12.5,
            "wind_gusts_10m": 25.0
        }
    })
}

/// Create a test client configured to use the mock server
fn create_test_client(mock_server: &MockServer) -> OpenMeteoClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    OpenMeteoClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the /forecast endpoint with the given response
async fn setup_forecast_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn current_wind_success() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_wind_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_wind(40.7484, -73.9857).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let wind = result.unwrap();
    assert!((wind.speed_kmh - 12.5).abs() < 0.1);
    assert!((wind.gusts_kmh - 25.0).abs() < 0.1);
}

#[tokio::test]
async fn request_asks_only_for_wind_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("current", "wind_speed_10m,wind_gusts_10m"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_wind_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_wind(40.7484, -73.9857).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn missing_wind_fields_report_incomplete_data() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": 40.75,
            "longitude": -74.0,
            "current": {"time": "2026-08-30T12:00"}
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let err = client.current_wind(40.7484, -73.9857).await.unwrap_err();
    assert!(matches!(err, WeatherError::IncompleteData(_)));
}

#[tokio::test]
async fn invalid_coordinates_fail_before_any_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_wind_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.current_wind(95.0, 0.0).await.unwrap_err();
    assert!(matches!(err, WeatherError::InvalidCoordinates));
}

#[tokio::test]
async fn server_error_maps_to_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(500)).await;

    let client = create_test_client(&mock_server);
    let err = client.current_wind(40.7484, -73.9857).await.unwrap_err();
    assert!(matches!(err, WeatherError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn rate_limit_maps_to_dedicated_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(429)).await;

    let client = create_test_client(&mock_server);
    let err = client.current_wind(40.7484, -73.9857).await.unwrap_err();
    assert!(matches!(err, WeatherError::RateLimitExceeded));
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let err = client.current_wind(40.7484, -73.9857).await.unwrap_err();
    assert!(matches!(err, WeatherError::ParseError(_)));
}
