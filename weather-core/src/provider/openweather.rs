use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{FetchError, SchemaError},
    fetch::JsonSource,
    model::WeatherReading,
};

use super::extract;

/// Readings are requested in Fahrenheit.
const UNITS: &str = "imperial";

/// Build the current-weather URL. Every query value is percent-encoded and
/// coordinates use plain decimal notation.
pub fn weather_url(
    base: &str,
    latitude: f64,
    longitude: f64,
    api_key: &str,
) -> Result<Url, FetchError> {
    Url::parse_with_params(
        base,
        &[
            ("lat", latitude.to_string().as_str()),
            ("lon", longitude.to_string().as_str()),
            ("units", UNITS),
            ("appid", api_key),
        ],
    )
    .map_err(|e| FetchError::InvalidUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })
}

/// Fetch the raw current-weather document for a position.
pub async fn resolve_weather(
    source: &dyn JsonSource,
    base: &str,
    latitude: f64,
    longitude: f64,
    api_key: &str,
) -> Result<Value, FetchError> {
    let url = weather_url(base, latitude, longitude, api_key)?;
    source.get_json(url.as_str()).await
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    sys: OwSys,
}

impl WeatherReading {
    /// Pull the report fields out of a current-weather document.
    ///
    /// Only the first condition is kept.
    pub fn from_json(value: &Value) -> Result<Self, SchemaError> {
        let parsed: OwCurrentResponse = extract("weather", value)?;

        let condition = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.main)
            .ok_or(SchemaError::Empty("weather condition"))?;

        Ok(Self {
            city_name: parsed.name,
            temperature_f: parsed.main.temp,
            condition,
            sunrise: parsed.sys.sunrise,
            sunset: parsed.sys.sunset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::HttpFetcher;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn new_york() -> Value {
        serde_json::json!({
            "name": "New York",
            "main": {"temp": 75.4, "humidity": 40},
            "weather": [{"main": "Clouds", "description": "broken clouds"}, {"main": "Mist"}],
            "sys": {"sunrise": 1700000000, "sunset": 1700040000}
        })
    }

    #[test]
    fn url_has_params_in_order() {
        let url = weather_url(crate::config::DEFAULT_WEATHER_URL, 40.7, -74.0, "KEY").unwrap();
        assert_eq!(url.path(), "/data/2.5/weather");
        assert_eq!(
            url.query(),
            Some("lat=40.7&lon=-74&units=imperial&appid=KEY")
        );
    }

    #[test]
    fn url_never_uses_exponent_notation() {
        let url = weather_url("http://localhost/w", 0.0000001, 179.999999, "K").unwrap();
        assert_eq!(
            url.query(),
            Some("lat=0.0000001&lon=179.999999&units=imperial&appid=K")
        );
    }

    #[test]
    fn url_encodes_reserved_characters_in_key() {
        let url = weather_url("http://localhost/w", 1.0, 2.0, "a&b=c").unwrap();
        assert!(url.as_str().ends_with("appid=a%26b%3Dc"), "{url}");

        let appid = url
            .query_pairs()
            .find(|(k, _)| k == "appid")
            .map(|(_, v)| v.into_owned());
        assert_eq!(appid.as_deref(), Some("a&b=c"));
    }

    #[test]
    fn bad_base_is_invalid_url() {
        let err = weather_url("not a url", 1.0, 2.0, "K").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn reading_keeps_first_condition() {
        let reading = WeatherReading::from_json(&new_york()).unwrap();

        assert_eq!(
            reading,
            WeatherReading {
                city_name: "New York".into(),
                temperature_f: 75.4,
                condition: "Clouds".into(),
                sunrise: 1_700_000_000,
                sunset: 1_700_040_000,
            }
        );
    }

    #[test]
    fn integer_temperature_is_accepted() {
        let mut body = new_york();
        body["main"]["temp"] = serde_json::json!(60);
        assert_eq!(WeatherReading::from_json(&body).unwrap().temperature_f, 60.0);
    }

    #[test]
    fn empty_condition_list_is_error() {
        let mut body = new_york();
        body["weather"] = serde_json::json!([]);

        let err = WeatherReading::from_json(&body).unwrap_err();
        assert!(matches!(err, SchemaError::Empty(_)));
    }

    #[test]
    fn missing_sys_is_error() {
        let mut body = new_york();
        body.as_object_mut().unwrap().remove("sys");

        let err = WeatherReading::from_json(&body).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Fields {
                group: "weather",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn resolve_weather_returns_raw_document() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("lat", "40.7"))
            .and(query_param("lon", "-74"))
            .and(query_param("units", "imperial"))
            .and(query_param("appid", "SECRET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(new_york()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let base = format!("{}/data/2.5/weather", mock_server.uri());

        let raw = resolve_weather(&fetcher, &base, 40.7, -74.0, "SECRET")
            .await
            .unwrap();
        assert_eq!(raw, new_york());
    }
}
