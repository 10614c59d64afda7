use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use crate::locale::Locale;

/// Sample key published with the open government dataset; fine as a default
/// because the market path degrades to embedded data anyway.
const DEFAULT_MARKET_API_KEY: &str =
    "579b464db66ec23bdd000001e994c89d42c74da65b540e8f107a9a39";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// External provider endpoints and keys
    pub providers: ProviderConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Chat completions endpoint base (OpenAI-compatible)
    pub chat_base_url: String,
    /// Chat model identifier
    pub chat_model: String,
    /// Chat API key (optional, can be set via KRISHI_CHAT_API_KEY)
    pub chat_api_key: Option<String>,

    /// Vision endpoint base
    pub vision_base_url: String,
    /// Vision model identifier
    pub vision_model: String,
    /// Vision API key (optional, can be set via KRISHI_VISION_API_KEY)
    pub vision_api_key: Option<String>,

    /// Weather endpoint base
    pub weather_base_url: String,
    /// Weather API key (optional, can be set via KRISHI_WEATHER_API_KEY)
    pub weather_api_key: Option<String>,

    /// Open government dataset base
    pub market_base_url: String,
    /// Dataset API key
    pub market_api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// City shown on the weather view before the first search
    pub default_city: String,

    /// Startup display language
    pub locale: Locale,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_city: "Delhi".to_string(),
            locale: Locale::En,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("krishisahay");

        Self {
            config_dir,
            providers: ProviderConfig {
                chat_base_url: "https://api.groq.com/openai/v1".to_string(),
                chat_model: "llama-3.3-70b-versatile".to_string(),
                chat_api_key: std::env::var("KRISHI_CHAT_API_KEY").ok(),
                vision_base_url: "https://generativelanguage.googleapis.com".to_string(),
                vision_model: "gemini-2.0-flash".to_string(),
                vision_api_key: std::env::var("KRISHI_VISION_API_KEY").ok(),
                weather_base_url: "https://api.openweathermap.org/data/2.5".to_string(),
                weather_api_key: std::env::var("KRISHI_WEATHER_API_KEY").ok(),
                market_base_url: "https://api.data.gov.in".to_string(),
                market_api_key: DEFAULT_MARKET_API_KEY.to_string(),
            },
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        if !validation.warnings.is_empty() {
            for warning in &validation.warnings {
                tracing::warn!("Config warning: {}", warning);
            }
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(
            &self.providers.chat_base_url,
            "providers.chat_base_url",
            &mut result,
        );
        self.validate_url(
            &self.providers.vision_base_url,
            "providers.vision_base_url",
            &mut result,
        );
        self.validate_url(
            &self.providers.weather_base_url,
            "providers.weather_base_url",
            &mut result,
        );
        self.validate_url(
            &self.providers.market_base_url,
            "providers.market_base_url",
            &mut result,
        );

        // Missing keys degrade individual features, not the whole app
        if self.providers.chat_api_key.is_none() {
            result.add_warning("providers.chat_api_key", "Chat assistant will be unavailable");
        }
        if self.providers.vision_api_key.is_none() {
            result.add_warning(
                "providers.vision_api_key",
                "Crop diagnosis will be unavailable",
            );
        }
        if self.providers.weather_api_key.is_none() {
            result.add_warning(
                "providers.weather_api_key",
                "Weather forecasts will be unavailable",
            );
        }

        if self.ui.default_city.trim().is_empty() {
            result.add_error("ui.default_city", "Default city must not be empty");
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("krishisahay");

        Ok(config_dir.join("config.toml"))
    }
}
