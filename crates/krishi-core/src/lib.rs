pub mod app;
pub mod config;
pub mod error;
pub mod locale;

pub use app::{AppState, View};
pub use config::{Config, ProviderConfig, UiConfig};
pub use error::AppError;
pub use locale::{failure_notice, text, Locale, MessageKey};

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("KrishiSahay core initialized");
    Ok(())
}
