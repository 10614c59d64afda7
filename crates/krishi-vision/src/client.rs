//! Image diagnosis client.

use std::time::Duration;

use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::VisionError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;

const DIAGNOSIS_PROMPT: &str = "\
You are an expert agricultural plant pathologist and crop scientist helping Indian farmers.
Analyze this crop/plant image and provide a comprehensive diagnosis in simple language:

1. **Plant/Crop Identification**: What crop or plant is this?
2. **Health Status**: Is the plant healthy or diseased?
3. **Disease/Pest Identification** (if any):
   - Name of disease/pest (in simple terms)
   - Severity (Mild/Moderate/Severe)
4. **Symptoms Observed**: Describe visible symptoms
5. **Causes**: What causes this condition?
6. **Treatment & Cure**:
   - Immediate actions
   - Chemical treatments (with dosage)
   - Organic/natural remedies
7. **Prevention**: How to prevent this in future
8. **Yield Impact**: Expected impact on yield if untreated
9. **Recommended Action**: Urgency level and next steps

If the image is not of a plant/crop, politely say so and ask for a plant image.
Be specific, practical, and farmer-friendly. Use simple language.";

/// Caller-boundary guard: the provider handles everything else itself.
pub fn is_supported_image(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// Base64-encode raw image bytes for the wire.
pub fn encode_image(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

pub struct VisionClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl VisionClient {
    pub fn new(api_key: &str, model: &str) -> Result<Self, VisionError> {
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

    /// Submit one image for diagnosis and return the generated text.
    ///
    /// `image_base64` is the already-encoded payload (see [`encode_image`]).
    /// Single call, no streaming; a new submission replaces the prior result
    /// on the caller's side.
    #[instrument(skip(self, image_base64), fields(mime = mime_type), level = "info")]
    pub async fn diagnose(
        &self,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<String, VisionError> {
        if !is_supported_image(mime_type) {
            return Err(VisionError::UnsupportedImage(mime_type.to_string()));
        }

        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![
                    RequestPart {
                        text: Some(DIAGNOSIS_PROMPT.to_string()),
                        inline_data: None,
                    },
                    RequestPart {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: mime_type.to_string(),
                            data: image_base64.to_string(),
                        }),
                    },
                ],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(&self.api_key)
        );

        let response = self.client.post(&url).json(&request).send().await.map_err(|e| {
            if e.is_timeout() {
                VisionError::TimedOut
            } else {
                VisionError::Network(e)
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or_else(|_| format!("provider returned {}", status));
            return Err(VisionError::AnalysisFailed(detail));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| VisionError::InvalidResponse(e.to_string()))?;

        generated
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| VisionError::InvalidResponse("no text in response".to_string()))
    }
}
