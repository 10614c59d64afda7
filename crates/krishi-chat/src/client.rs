//! Chat completions client.

use std::time::Duration;

use tracing::instrument;

use krishi_core::Locale;

use crate::error::ChatError;
use crate::types::*;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1024;
const GENERIC_FAILURE: &str = "Service unavailable. Please try again.";

const SYSTEM_PROMPT: &str = "\
You are KrishiSahay, an expert agricultural assistant for Indian farmers.
You have deep knowledge of:
- Crop cultivation (Kharif, Rabi, Zaid crops)
- Pest and disease management
- Fertilizers (NPK, organic, bio-fertilizers)
- Government schemes (PM-KISAN, Fasal Bima Yojana, Kisan Credit Card, etc.)
- Soil health and irrigation techniques
- Market prices and MSP (Minimum Support Price)
- Weather-based farming advice
- Organic farming and sustainable agriculture

Always respond in a helpful, simple manner suitable for farmers.
If the user writes in Hindi, respond in Hindi. If in Telugu, respond in Telugu.
Provide practical, actionable advice. Use bullet points for clarity.
Always mention safety precautions when discussing pesticides or chemicals.
Format your responses with clear sections using **bold** for headers.
Do NOT mention AI model names, company names, or technical details in your responses.";

const HINDI_DIRECTIVE: &str =
    "\n\nIMPORTANT: Always respond in Hindi (Devanagari script).";
const TELUGU_DIRECTIVE: &str =
    "\n\nIMPORTANT: Always respond in Telugu (తెలుగు script).";

/// Build the system instruction, forcing the reply script for hi/te.
pub fn build_system_prompt(locale: Locale) -> String {
    let mut prompt = SYSTEM_PROMPT.to_string();
    match locale {
        Locale::En => {}
        Locale::Hi => prompt.push_str(HINDI_DIRECTIVE),
        Locale::Te => prompt.push_str(TELUGU_DIRECTIVE),
    }
    prompt
}

pub struct ChatClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl ChatClient {
    pub fn new(api_key: &str, model: &str) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at another endpoint (config override, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Send the conversation so far and return the assistant's reply verbatim.
    ///
    /// One synchronous call: no retry, no backoff, no streaming. A failed
    /// call surfaces immediately with a displayable message.
    #[instrument(skip(self, history), fields(turns = history.len()), level = "info")]
    pub async fn ask(&self, history: &[ChatMessage], locale: Locale) -> Result<String, ChatError> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(RequestMessage {
            role: "system",
            content: build_system_prompt(locale),
        });
        messages.extend(history.iter().map(|m| RequestMessage {
            role: m.role.as_str(),
            content: m.content.clone(),
        }));

        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::TimedOut
                } else {
                    ChatError::Network(e)
                }
            })?;

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or_else(|_| GENERIC_FAILURE.to_string());
            return Err(ChatError::ServiceUnavailable(detail));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ChatError::InvalidResponse("no choices in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ChatClient {
        ChatClient::new("test_key", "test-model")
            .unwrap()
            .with_base_url(server.uri())
    }

    #[test]
    fn test_hindi_prompt_forces_devanagari() {
        let prompt = build_system_prompt(Locale::Hi);
        assert!(prompt.contains("Devanagari script"));

        let prompt = build_system_prompt(Locale::Te);
        assert!(prompt.contains("Telugu"));

        let prompt = build_system_prompt(Locale::En);
        assert!(!prompt.contains("Devanagari script"));
        assert!(!prompt.contains("IMPORTANT:"));
    }

    #[tokio::test]
    async fn test_ask_returns_first_completion_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "**Wheat** needs urea in *two* splits."}}
                ]
            })))
            .mount(&mock_server)
            .await;

        let history = [ChatMessage::user("Best fertilizer for wheat?")];
        let reply = client(&mock_server).ask(&history, Locale::En).await.unwrap();

        // Markup passes through untouched
        assert_eq!(reply, "**Wheat** needs urea in *two* splits.");
    }

    #[tokio::test]
    async fn test_request_carries_system_prompt_and_history_in_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "ok"}}]
            })))
            .mount(&mock_server)
            .await;

        let history = [
            ChatMessage::assistant("Namaste!"),
            ChatMessage::user("मेरी फसल में कीड़े हैं"),
        ];
        client(&mock_server).ask(&history, Locale::Hi).await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["role"], "system");
        assert!(messages[0]["content"]
            .as_str()
            .unwrap()
            .contains("Devanagari script"));
        assert_eq!(messages[1]["role"], "assistant");
        assert_eq!(messages[2]["role"], "user");

        assert_eq!(body["temperature"], 0.7);
        assert_eq!(body["max_tokens"], 1024);
        assert_eq!(body["model"], "test-model");
    }

    #[tokio::test]
    async fn test_english_request_has_no_script_directive() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "ok"}}]
            })))
            .mount(&mock_server)
            .await;

        let history = [ChatMessage::user("hello")];
        client(&mock_server).ask(&history, Locale::En).await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(!body["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("Devanagari"));
    }

    #[tokio::test]
    async fn test_provider_error_message_is_extracted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {"message": "Rate limit reached for model"}
            })))
            .mount(&mock_server)
            .await;

        let history = [ChatMessage::user("hi")];
        let err = client(&mock_server).ask(&history, Locale::En).await.unwrap_err();

        match err {
            ChatError::ServiceUnavailable(msg) => {
                assert_eq!(msg, "Rate limit reached for model")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body_falls_back() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&mock_server)
            .await;

        let history = [ChatMessage::user("hi")];
        let err = client(&mock_server).ask(&history, Locale::En).await.unwrap_err();

        match err {
            ChatError::ServiceUnavailable(msg) => {
                assert_eq!(msg, "Service unavailable. Please try again.")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&mock_server)
            .await;

        let history = [ChatMessage::user("hi")];
        let err = client(&mock_server).ask(&history, Locale::En).await.unwrap_err();
        assert!(matches!(err, ChatError::InvalidResponse(_)));
    }
}
