use serde::{Deserialize, Serialize};
use std::fmt;

use crate::derive::ClothingCategory;

/// Caller position as reported by the IP-geolocation provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    pub city: String,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.city, self.latitude, self.longitude)
    }
}

/// The subset of a current-weather response the report needs.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub city_name: String,
    pub temperature_f: f64,
    pub condition: String,
    /// Epoch seconds.
    pub sunrise: i64,
    /// Epoch seconds.
    pub sunset: i64,
}

/// Everything printed in the weather block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub city_name: String,
    pub temperature_f: i64,
    pub temperature_c: i64,
    pub condition: String,
    pub daytime: bool,
    pub category: ClothingCategory,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Weather Info ===")?;
        writeln!(f, "City: {}", self.city_name)?;
        writeln!(
            f,
            "Temperature: {}°F / {}°C",
            self.temperature_f, self.temperature_c
        )?;
        writeln!(f, "Condition: {}", self.condition)?;
        writeln!(f, "Time: {}", if self.daytime { "Day" } else { "Night" })?;
        writeln!(f, "Recommendation: Wear a {} outfit.", self.category)
    }
}
