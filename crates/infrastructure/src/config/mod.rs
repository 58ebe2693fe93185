//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `settings`: Location of the persisted settings file
//! - `notification`: Outbound mail notification
//!
//! Geocoding and weather settings reuse the integration crates' own
//! config types so defaults live next to the clients they configure.

mod notification;
mod server;
mod settings;

use serde::{Deserialize, Serialize};

pub use integration_geocoding::GeocodingConfig;
pub use integration_weather::WeatherConfig;
pub use notification::NotificationConfig;
pub use server::ServerConfig;
pub use settings::SettingsConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Settings file configuration
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Nominatim geocoding configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Open-Meteo weather configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Mail notification configuration
    #[serde(default)]
    pub notification: NotificationConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Layering, later sources override earlier ones:
    /// defaults, then `config.{toml,json,yaml}` next to the binary,
    /// then `WINDLANTERN_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is present but malformed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .add_source(config::File::with_name("config").required(false))
            // e.g. WINDLANTERN_SERVER_PORT=8080
            .add_source(
                config::Environment::with_prefix("WINDLANTERN")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
