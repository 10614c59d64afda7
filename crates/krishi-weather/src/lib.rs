//! Weather adapter for KrishiSahay.
//!
//! Current conditions plus a 5-entry forecast, metric units, queried by
//! city name. The two upstream calls run concurrently and either both
//! land or the whole refresh fails.

pub mod client;
pub mod error;
pub mod types;

pub use client::WeatherClient;
pub use error::WeatherError;
pub use types::{CurrentWeather, ForecastEntry, WeatherSnapshot};
