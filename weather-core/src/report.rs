//! Sequencing of one weather report run.

use std::{io::Write, path::Path};

use crate::{
    config::{Config, Endpoints},
    derive::{Clock, SystemClock, classify_temperature, is_daytime, round_fahrenheit, to_celsius},
    error::{ReportError, ResolveError},
    fetch::{HttpFetcher, JsonSource},
    model::{WeatherReading, WeatherReport},
    provider::{resolve_location, resolve_weather},
};

/// Turn a reading into the printed report, sampling `clock` for day/night.
pub fn build_report(reading: WeatherReading, clock: &dyn Clock) -> WeatherReport {
    let temperature_f = round_fahrenheit(reading.temperature_f);
    let daytime = is_daytime(reading.sunrise, reading.sunset, clock.now().timestamp());

    WeatherReport {
        city_name: reading.city_name,
        temperature_f,
        temperature_c: to_celsius(temperature_f),
        condition: reading.condition,
        daytime,
        category: classify_temperature(temperature_f),
    }
}

/// Runs the location -> weather -> render pipeline against a JSON source.
#[derive(Debug)]
pub struct Reporter<S, C> {
    source: S,
    clock: C,
    endpoints: Endpoints,
}

impl<S: JsonSource, C: Clock> Reporter<S, C> {
    pub fn new(source: S, clock: C, endpoints: Endpoints) -> Self {
        Self {
            source,
            clock,
            endpoints,
        }
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    pub async fn run<W: Write>(
        &self,
        api_key: &str,
        out: &mut W,
    ) -> Result<WeatherReport, ReportError> {
        writeln!(out, "Detecting your location...")?;
        out.flush()?;

        // Failures are reported once by the caller; only trace them here.
        let location = resolve_location(&self.source, &self.endpoints.location_url)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "location lookup failed");
                ReportError::Location(e)
            })?;

        writeln!(out, "Detected Location: {location}")?;

        let reading = self
            .fetch_reading(location.latitude, location.longitude, api_key)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "weather lookup failed");
                ReportError::Weather(e)
            })?;

        let report = build_report(reading, &self.clock);
        tracing::info!(
            city = %report.city_name,
            temp_f = report.temperature_f,
            "weather resolved"
        );

        writeln!(out)?;
        write!(out, "{report}")?;
        out.flush()?;

        Ok(report)
    }

    async fn fetch_reading(
        &self,
        latitude: f64,
        longitude: f64,
        api_key: &str,
    ) -> Result<WeatherReading, ResolveError> {
        let raw = resolve_weather(
            &self.source,
            &self.endpoints.weather_url,
            latitude,
            longitude,
            api_key,
        )
        .await?;

        Ok(WeatherReading::from_json(&raw)?)
    }
}

/// Load the settings at `config_path` and print a report for the caller's location.
///
/// Nothing touches the network until the configuration is known to be usable.
pub async fn run<W: Write>(config_path: &Path, out: &mut W) -> Result<WeatherReport, ReportError> {
    let config = Config::load(config_path).map_err(ReportError::Config)?;
    let api_key = config.api_key(config_path).map_err(ReportError::Config)?;

    // Client setup is part of the first network step.
    let fetcher =
        HttpFetcher::new(config.timeout()).map_err(|e| ReportError::Location(e.into()))?;

    Reporter::new(fetcher, SystemClock, config.endpoints())
        .run(api_key, out)
        .await
}
