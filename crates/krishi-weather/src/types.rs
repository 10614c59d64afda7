//! Weather data types and provider wire structures.

use serde::Deserialize;

/// Normalized current conditions for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    /// Metres; the provider omits it in some regions.
    pub visibility_m: Option<u32>,
    pub condition: String,
    pub description: String,
    pub cloud_cover: u8,
}

/// One forecast slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub time: String,
    pub temp_c: f64,
    pub condition: String,
    pub description: String,
}

/// Everything one weather query produces. Replaced wholesale per refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub current: CurrentWeather,
    pub forecast: Vec<ForecastEntry>,
}

// Provider wire shapes (conventional current-weather and forecast-list
// schemas).

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    pub name: String,
    #[serde(default)]
    pub sys: Sys,
    pub main: Thermals,
    #[serde(default)]
    pub wind: Wind,
    pub visibility: Option<u32>,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub clouds: Clouds,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Sys {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thermals {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Wind {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Condition {
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Clouds {
    #[serde(default)]
    pub all: u8,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastItem {
    #[serde(default)]
    pub dt_txt: String,
    pub main: Thermals,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

impl From<CurrentResponse> for CurrentWeather {
    fn from(raw: CurrentResponse) -> Self {
        let (condition, description) = first_condition(raw.weather);
        Self {
            city: raw.name,
            country: raw.sys.country,
            temp_c: raw.main.temp,
            feels_like_c: raw.main.feels_like,
            humidity: raw.main.humidity,
            wind_speed: raw.wind.speed,
            visibility_m: raw.visibility,
            condition,
            description,
            cloud_cover: raw.clouds.all,
        }
    }
}

impl From<ForecastItem> for ForecastEntry {
    fn from(raw: ForecastItem) -> Self {
        let (condition, description) = first_condition(raw.weather);
        Self {
            time: raw.dt_txt,
            temp_c: raw.main.temp,
            condition,
            description,
        }
    }
}

fn first_condition(mut conditions: Vec<Condition>) -> (String, String) {
    if conditions.is_empty() {
        (String::new(), String::new())
    } else {
        let first = conditions.swap_remove(0);
        (first.main, first.description)
    }
}
