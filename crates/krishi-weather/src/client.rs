//! Weather provider client.

use std::time::Duration;

use tracing::instrument;

use crate::error::WeatherError;
use crate::types::*;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const FORECAST_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: &str) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at another endpoint (config override, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Current conditions for a city, metric units.
    #[instrument(skip(self), level = "info")]
    pub async fn current(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let url = format!(
            "{}/weather?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(city),
            self.api_key
        );

        let raw: CurrentResponse = self.get_json(&url).await?;
        Ok(raw.into())
    }

    /// Five forecast slots for a city, metric units.
    #[instrument(skip(self), level = "info")]
    pub async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, WeatherError> {
        let url = format!(
            "{}/forecast?q={}&appid={}&units=metric&cnt={}",
            self.base_url,
            urlencoding::encode(city),
            self.api_key,
            FORECAST_COUNT
        );

        let raw: ForecastResponse = self.get_json(&url).await?;
        Ok(raw.list.into_iter().map(Into::into).collect())
    }

    /// One UI refresh: current + forecast issued concurrently and joined.
    /// Either call failing fails the snapshot; the caller keeps whatever it
    /// was already showing.
    pub async fn snapshot(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let (current, forecast) = tokio::try_join!(self.current(city), self.forecast(city))?;
        Ok(WeatherSnapshot { current, forecast })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(WeatherError::from_send)?;

        if !response.status().is_success() {
            return Err(WeatherError::Unavailable {
                status: response.status().as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))
    }
}
