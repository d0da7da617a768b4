//! External JSON providers: IP geolocation and current weather.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SchemaError;

pub mod ipapi;
pub mod openweather;

pub use ipapi::resolve_location;
pub use openweather::{resolve_weather, weather_url};

/// Typed extraction of one field group from an untyped response.
pub(crate) fn extract<T: DeserializeOwned>(
    group: &'static str,
    value: &Value,
) -> Result<T, SchemaError> {
    T::deserialize(value).map_err(|source| SchemaError::Fields { group, source })
}
