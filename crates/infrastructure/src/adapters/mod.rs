//! Outbound adapters
//!
//! Implementations of the application ports over the real integration
//! clients and the SMTP relay.

mod geocoding_adapter;
mod smtp_notifier;
mod weather_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use smtp_notifier::SmtpNotifier;
pub use weather_adapter::WeatherAdapter;
