use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{AssistantError, ChatModel, ImageModel};
use crate::config::AssistantConfig;
use crate::models::{ChatMessage, ChatRole};

/// Gemini REST client for chat turns and Imagen avatar generation.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    chat_model: String,
    image_model: String,
    client: reqwest::blocking::Client,
    timeout_secs: Option<u64>,
}

impl GeminiClient {
    pub fn new(config: &AssistantConfig) -> Result<Self, AssistantError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(AssistantError::NotConfigured)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout_secs.map(std::time::Duration::from_secs))
            .build()
            .map_err(|e| AssistantError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            chat_model: config.chat_model.clone(),
            image_model: config.image_model.clone(),
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{model}:{method}", self.base_url)
    }

    fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<R, AssistantError> {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    AssistantError::Connection(self.base_url.clone())
                } else if let Some(secs) = self.timeout_secs.filter(|_| e.is_timeout()) {
                    AssistantError::HttpClient(format!("Request timed out after {secs}s"))
                } else {
                    AssistantError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AssistantError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| AssistantError::ResponseParsing(e.to_string()))
    }
}

// ═══════════════════════════════════════════
// Wire types
// ═══════════════════════════════════════════

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

/// Body for `models/{model}:generateContent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
}

/// Body for Imagen `models/{model}:predict`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictRequest<'a> {
    instances: Vec<PredictInstance<'a>>,
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    aspect_ratio: &'static str,
    output_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
    mime_type: Option<String>,
}

fn chat_request(system: &str, history: &[ChatMessage], message: &str) -> GenerateContentRequest {
    let mut contents: Vec<Content> = history
        .iter()
        .map(|m| Content::text(Some(m.role.as_str()), &m.text))
        .collect();
    contents.push(Content::text(Some(ChatRole::User.as_str()), message));

    GenerateContentRequest {
        system_instruction: Content::text(None, system),
        contents,
    }
}

/// Concatenated text of the first candidate.
fn answer_text(response: GenerateContentResponse) -> Result<String, AssistantError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AssistantError::EmptyResponse);
    }
    Ok(text)
}

/// First prediction as a `data:` URL.
fn image_data_url(response: PredictResponse) -> Result<String, AssistantError> {
    let prediction = response
        .predictions
        .into_iter()
        .next()
        .ok_or(AssistantError::EmptyResponse)?;
    let bytes = prediction
        .bytes_base64_encoded
        .filter(|b| !b.is_empty())
        .ok_or(AssistantError::EmptyResponse)?;
    let mime = prediction.mime_type.unwrap_or_else(|| "image/png".to_string());
    Ok(format!("data:{mime};base64,{bytes}"))
}

impl ChatModel for GeminiClient {
    fn send(&self, system: &str, history: &[ChatMessage], message: &str) -> Result<String, AssistantError> {
        let url = self.endpoint(&self.chat_model, "generateContent");
        let body = chat_request(system, history, message);
        tracing::debug!(model = %self.chat_model, turns = body.contents.len(), "Sending chat turn");

        let response: GenerateContentResponse = self.post(&url, &body)?;
        answer_text(response)
    }
}

impl ImageModel for GeminiClient {
    fn generate_image(&self, prompt: &str) -> Result<String, AssistantError> {
        let url = self.endpoint(&self.image_model, "predict");
        let body = PredictRequest {
            instances: vec![PredictInstance { prompt }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: "1:1",
                output_mime_type: "image/png",
            },
        };
        tracing::debug!(model = %self.image_model, "Requesting image generation");

        let response: PredictResponse = self.post(&url, &body)?;
        image_data_url(response)
    }
}
