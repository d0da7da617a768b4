//! Pure derivations from a weather reading.

use chrono::{DateTime, Utc};
use std::fmt;

/// Fahrenheit above which it is "hot".
pub const HOT_ABOVE_F: i64 = 86;
/// Lowest Fahrenheit that is still "warm".
pub const WARM_FROM_F: i64 = 66;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClothingCategory {
    Hot,
    Warm,
    Cold,
}

impl ClothingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingCategory::Hot => "hot",
            ClothingCategory::Warm => "warm",
            ClothingCategory::Cold => "cold",
        }
    }
}

impl fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round a provider temperature to whole degrees (half away from zero).
pub fn round_fahrenheit(temp_f: f64) -> i64 {
    temp_f.round() as i64
}

/// Whole-degree Fahrenheit to rounded Celsius.
///
/// Takes the already rounded Fahrenheit value so the printed pair stays consistent.
/// Computed in floating point so no Fahrenheit value can overflow.
pub fn to_celsius(temp_f: i64) -> i64 {
    ((temp_f as f64 - 32.0) * 5.0 / 9.0).round() as i64
}

pub fn classify_temperature(temp_f: i64) -> ClothingCategory {
    if temp_f > HOT_ABOVE_F {
        ClothingCategory::Hot
    } else if temp_f >= WARM_FROM_F {
        ClothingCategory::Warm
    } else {
        ClothingCategory::Cold
    }
}

/// Strictly between sunrise and sunset; both edges count as night.
pub fn is_daytime(sunrise: i64, sunset: i64, now: i64) -> bool {
    sunrise < now && now < sunset
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
