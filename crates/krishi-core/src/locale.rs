//! Display languages and the session-layer string table.
//!
//! Every string the session layer can show exists for every locale; the
//! match in [`text`] is total, so a missing translation fails to compile.

use serde::{Deserialize, Serialize};

/// Supported display/response languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
    Te,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Hi, Locale::Te];

    /// Parse a BCP-47-ish tag; unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "hi" => Self::Hi,
            "te" => Self::Te,
            _ => Self::En,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Te => "te",
        }
    }
}

/// Keys for the strings the session layer produces itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    ChatWelcome,
    ChatInputHint,
    ErrorPrefix,
    TryAgain,
    AnalysisFailed,
    WeatherUnavailable,
    Greeting,
    GuestBadge,
}

/// Total mapping from (key, locale) to display text.
pub fn text(key: MessageKey, locale: Locale) -> &'static str {
    use Locale::*;
    use MessageKey::*;

    match key {
        ChatWelcome => match locale {
            En => "Namaste! I am KrishiSahay, your farming helper. Ask me anything about crops, diseases, fertilizers, or government schemes! 🌾",
            Hi => "नमस्ते! मैं KrishiSahay हूं, आपका कृषि सहायक। फसलों, बीमारियों, उर्वरकों या सरकारी योजनाओं के बारे में कुछ भी पूछें! 🌾",
            Te => "నమస్కారం! నేను KrishiSahay, మీ వ్యవసాయ సహాయకుడు. పంటలు, వ్యాధులు, ఎరువులు లేదా ప్రభుత్వ పథకాల గురించి ఏదైనా అడగండి! 🌾",
        },
        ChatInputHint => match locale {
            En => "Ask about crops, diseases, schemes... (Enter to send)",
            Hi => "फसलों, बीमारियों, योजनाओं के बारे में पूछें... (Enter दबाएं)",
            Te => "పంటలు, వ్యాధులు, పథకాల గురించి అడగండి... (Enter నొక్కండి)",
        },
        ErrorPrefix => match locale {
            En => "Error",
            Hi => "त्रुटि",
            Te => "లోపం",
        },
        TryAgain => match locale {
            En => "Please try again.",
            Hi => "कृपया पुनः प्रयास करें।",
            Te => "దయచేసి మళ్ళీ ప్రయత్నించండి.",
        },
        AnalysisFailed => match locale {
            En => "Analysis failed",
            Hi => "विश्लेषण विफल",
            Te => "విశ్లేషణ విఫలమైంది",
        },
        WeatherUnavailable => match locale {
            En => "Could not fetch weather. Check city name or API key.",
            Hi => "मौसम जानकारी प्राप्त नहीं हो सकी। शहर का नाम जांचें।",
            Te => "వాతావరణ సమాచారం పొందలేకపోయాము. నగరం పేరు తనిఖీ చేయండి.",
        },
        Greeting => match locale {
            En => "Hello",
            Hi => "नमस्ते",
            Te => "నమస్కారం",
        },
        GuestBadge => match locale {
            En => "Guest",
            Hi => "अतिथि",
            Te => "అతిథి",
        },
    }
}

/// Format a provider failure the way the chat view shows it:
/// `⚠️ <prefix>: <detail>. <try again>`.
pub fn failure_notice(locale: Locale, detail: &str) -> String {
    format!(
        "⚠️ {}: {}. {}",
        text(MessageKey::ErrorPrefix, locale),
        detail,
        text(MessageKey::TryAgain, locale)
    )
}
