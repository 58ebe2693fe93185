//! Wind speed value object
//!
//! Open-Meteo reports wind magnitudes in km/h; the page displays mph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversion factor from kilometers/hour to miles/hour
pub const KMH_TO_MPH: f64 = 0.621_371_19;

/// A wind speed or gust magnitude, stored in km/h
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindSpeed(f64);

impl WindSpeed {
    /// Create from a km/h magnitude
    #[must_use]
    pub const fn from_kmh(kmh: f64) -> Self {
        Self(kmh)
    }

    /// The magnitude in km/h
    #[must_use]
    pub const fn as_kmh(&self) -> f64 {
        self.0
    }

    /// The magnitude in mph, rounded to 2 decimal places
    #[must_use]
    pub fn as_mph(&self) -> f64 {
        (self.0 * KMH_TO_MPH * 100.0).round() / 100.0
    }
}

impl fmt::Display for WindSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} mph", self.as_mph())
    }
}
