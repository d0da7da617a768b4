//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration loading and saving
//! - JSON fetching and the location / weather providers
//! - Shared domain models and the derived report values
//! - The report pipeline used by the binary
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod derive;
pub mod error;
pub mod fetch;
pub mod model;
pub mod provider;
pub mod report;

pub use config::{Config, Endpoints};
pub use derive::{ClothingCategory, Clock, SystemClock};
pub use error::{ConfigError, FetchError, ReportError, ResolveError, SchemaError};
pub use fetch::{HttpFetcher, JsonSource};
pub use model::{Location, WeatherReading, WeatherReport};
pub use report::{Reporter, run};
