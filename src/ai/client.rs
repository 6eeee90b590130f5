use std::time::Duration;

use serde_json::{Value, json};

use crate::config::Config;
use crate::error::StudioError;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Async client for Gemini's `generateContent` endpoint. One attempt per
/// call: a failed or timed-out request is surfaced immediately, never
/// retried here.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    vision_model: String,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, StudioError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StudioError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: API_BASE.to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            vision_model: config.vision_model.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Point the client at a different API host. Used by tests to target a
    /// mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Plain text generation: the template instruction as the system
    /// directive, the rendered field block as user content. Returns the
    /// model's reply text verbatim.
    pub async fn generate_text(
        &self,
        system_instruction: &str,
        user_content: &str,
    ) -> Result<String, StudioError> {
        let payload = json!({
            "systemInstruction": { "parts": [{ "text": system_instruction }] },
            "contents": [{ "parts": [{ "text": user_content }] }]
        });
        self.call(&self.model, payload).await
    }

    /// Vision call: inline image bytes plus an instruction requesting strict
    /// JSON. `response_schema` nudges the model further toward the expected
    /// shape; the caller still parses defensively.
    pub async fn describe_image(
        &self,
        instruction: &str,
        image_base64: &str,
        mime_type: &str,
        response_schema: Option<Value>,
    ) -> Result<String, StudioError> {
        let mut payload = json!({
            "systemInstruction": { "parts": [{ "text": instruction }] },
            "contents": [{ "parts": [
                { "inlineData": { "mimeType": mime_type, "data": image_base64 } }
            ] }],
            "generationConfig": { "responseMimeType": "application/json" }
        });
        if let Some(schema) = response_schema {
            payload["generationConfig"]["responseSchema"] = schema;
        }
        self.call(&self.vision_model, payload).await
    }

    async fn call(&self, model: &str, payload: Value) -> Result<String, StudioError> {
        let url = format!("{}/models/{}:generateContent?key={}", self.base_url, model, self.api_key);

        let res = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            log::error!("Gemini API error {status}: {body}");
            return Err(StudioError::GenerationFailed(format!("API error {status}: {body}")));
        }

        let body: Value = res.json().await.map_err(|e| self.map_transport(e))?;

        let text = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| StudioError::GenerationFailed("no text content in model reply".into()))?;

        Ok(text.to_string())
    }

    fn map_transport(&self, err: reqwest::Error) -> StudioError {
        if err.is_timeout() {
            StudioError::GenerationTimeout(self.timeout_secs)
        } else {
            StudioError::GenerationFailed(format!("request failed: {err}"))
        }
    }
}
