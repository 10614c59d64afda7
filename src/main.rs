use anyhow::Result;

use krishi_auth::{CredentialStore, Identity};
use krishi_chat::Conversation;
use krishi_core::{text, AppState, Config, MessageKey, View};
use krishi_market::{schemes, MarketClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    krishi_core::init()?;

    let (config, _validation) = Config::load_validated()?;
    let providers = &config.providers;

    // Ensure the credential file location exists before the auth screen
    CredentialStore::open_default()?;

    // Guest session, the way the auth screen's guest button starts one
    let mut state = AppState::new(config.ui.locale);
    state.login(Identity::Guest);

    let conversation = Conversation::new(state.locale());

    if providers.chat_api_key.is_none() {
        tracing::warn!("Chat API key not set; the assistant view will be unavailable");
    }
    if providers.vision_api_key.is_none() {
        tracing::warn!("Vision API key not set; crop diagnosis will be unavailable");
    }
    if providers.weather_api_key.is_none() {
        tracing::warn!("Weather API key not set; forecasts will be unavailable");
    }

    state.navigate(View::Prices);
    let market = MarketClient::new(&providers.market_api_key)?
        .with_base_url(providers.market_base_url.clone());
    let prices = market.query("Maharashtra", None).await;

    let name = state
        .identity()
        .map(Identity::display_name)
        .unwrap_or_default();
    println!(
        "{}, {}! KrishiSahay - Farmer's Companion",
        text(MessageKey::Greeting, state.locale()),
        name
    );
    println!("\nConfiguration:");
    println!("  Config directory: {}", config.config_dir.display());
    println!("  Locale: {}", state.locale().as_tag());
    println!("  Default city: {}", config.ui.default_city);
    println!("\nContent:");
    println!("  Government schemes: {}", schemes().len());
    println!(
        "  Mandi rows for Maharashtra: {} ({})",
        prices.records().len(),
        if prices.is_fallback() {
            "fallback data"
        } else {
            "live data"
        }
    );
    println!("  Chat log: {} message(s)", conversation.messages().len());

    Ok(())
}
