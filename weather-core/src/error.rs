use std::{io, path::PathBuf};

/// Failure to load or store the settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config file {} has no \"apiKey\" entry", .0.display())]
    MissingApiKey(PathBuf),

    #[error("failed to write config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// One GET-and-parse that did not produce a JSON value.
///
/// Callers treat every variant alike; they only differ in what gets logged.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to initialise HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// A successfully parsed response that lacks a field or carries the wrong type.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("unexpected {group} response: {source}")]
    Fields {
        group: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} list is empty")]
    Empty(&'static str),
}

/// Errors from a resolver that both fetches and extracts.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Terminal failure of a report run, tagged with the stage it happened in.
///
/// `Display` yields the one-line diagnostic shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Error: {0}. Please create it with your OpenWeather API key.")]
    Config(#[source] ConfigError),

    #[error("Failed to detect location ({0}). Please check your network.")]
    Location(#[source] ResolveError),

    #[error("Failed to retrieve or parse weather data ({0}).")]
    Weather(#[source] ResolveError),

    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}
