use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path, time::Duration};

use crate::error::ConfigError;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

pub const DEFAULT_LOCATION_URL: &str = "http://ip-api.com/json";
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings file contents.
///
/// Example:
/// { "apiKey": "..." }
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// OpenWeather API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Provider endpoints used for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub location_url: String,
    pub weather_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            location_url: DEFAULT_LOCATION_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
        }
    }
}

impl Config {
    /// Load config from `path`. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from `path`, or return an empty default if it doesn't exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Save config as pretty JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        fs::write(path, json + "\n").map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The configured API key; `path` is only used for the error message.
    pub fn api_key(&self, path: &Path) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey(path.to_path_buf()))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn endpoints(&self) -> Endpoints {
        let defaults = Endpoints::default();
        Endpoints {
            location_url: self.location_url.clone().unwrap_or(defaults.location_url),
            weather_url: self.weather_url.clone().unwrap_or(defaults.weather_url),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
