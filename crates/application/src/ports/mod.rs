//! Port definitions
//!
//! Trait seams between the application services and the outside world:
//! the settings file, the geocoder, the weather API and the notifier.

mod geocoding_port;
mod notification_port;
mod settings_store;
mod weather_port;

pub use geocoding_port::GeocodingPort;
pub use notification_port::NotificationPort;
pub use settings_store::SettingsStorePort;
pub use weather_port::{WeatherPort, WindObservation};

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use notification_port::MockNotificationPort;
#[cfg(test)]
pub use settings_store::MockSettingsStorePort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
