//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo Weather API (<https://open-meteo.com>).
//! Fetches current wind speed and gusts without requiring an API key.

pub mod client;
mod models;

pub use client::{OpenMeteoClient, WeatherConfig, WeatherError, WindClient};
pub use models::CurrentWind;
