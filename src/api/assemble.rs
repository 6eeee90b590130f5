//! Assemble-prompt operation: structured field values in, one finished
//! prompt string out, formatted for the requested target service.

use serde_json::{Map, Value, json};

use crate::ai::client::GeminiClient;
use crate::error::StudioError;
use crate::studio::preset;
use crate::studio::template::PromptTemplate;

pub async fn run(client: &GeminiClient, body: &Value) -> Result<Value, StudioError> {
    let service = body
        .get("targetService")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| StudioError::MissingInput("targetService".into()))?;

    // The original studio clients send the field bag as "inputs"; the
    // documented name is "fields". Accept both.
    let mut fields: Map<String, Value> = body
        .get("fields")
        .or_else(|| body.get("inputs"))
        .and_then(Value::as_object)
        .cloned()
        .ok_or_else(|| StudioError::MissingInput("fields".into()))?;

    if let Some(name) = body.get("preset").and_then(Value::as_str) {
        let preset = preset::find(name)
            .ok_or_else(|| StudioError::MissingInput(format!("unknown preset '{name}'")))?;
        preset::apply(preset, &mut fields);
    }

    let template = PromptTemplate::select(service);
    let user_content = template.render_user_content(&fields);

    log::info!(
        "assembling prompt for '{service}' ({} fields supplied)",
        fields.len()
    );

    let final_prompt = client.generate_text(template.instruction, &user_content).await?;

    Ok(json!({ "finalPrompt": final_prompt }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;

    fn test_client(base_url: String) -> GeminiClient {
        GeminiClient::new(&Config {
            api_key: "test-key".into(),
            bind_addr: "127.0.0.1:0".into(),
            model: "gemini-test".into(),
            vision_model: "gemini-test".into(),
            timeout_secs: 5,
            max_body_bytes: 1024,
        })
        .unwrap()
        .with_base_url(base_url)
    }

    fn reply(text: &str) -> String {
        serde_json::to_string(&json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn missing_service_or_fields_is_missing_input() {
        let client = test_client("http://127.0.0.1:1".into());

        let err = run(&client, &json!({ "fields": {} })).await.unwrap_err();
        assert_eq!(err.category(), "missing_input");
        assert!(err.to_string().contains("targetService"));

        let err = run(&client, &json!({ "targetService": "Kling" })).await.unwrap_err();
        assert_eq!(err.category(), "missing_input");
        assert!(err.to_string().contains("fields"));
    }

    #[tokio::test]
    async fn unknown_preset_is_rejected_before_any_call() {
        let client = test_client("http://127.0.0.1:1".into());
        let body = json!({ "targetService": "Veo 3+ Studio", "fields": {}, "preset": "Nope" });
        let err = run(&client, &body).await.unwrap_err();
        assert_eq!(err.category(), "missing_input");
        assert!(err.to_string().contains("Nope"));
    }

    #[tokio::test]
    async fn returns_model_reply_as_final_prompt() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/models/gemini-test:generateContent?key=test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply("A ghost drifts through a ruined chapel. --ar 16:9"))
            .create_async()
            .await;

        let client = test_client(server.url());
        let body = json!({
            "targetService": "Veo 3+ Studio",
            "fields": { "genre": "Horror", "character": "a ghost", "duration": 8 }
        });
        let out = run(&client, &body).await.unwrap();
        assert_eq!(out["finalPrompt"], json!("A ghost drifts through a ruined chapel. --ar 16:9"));
    }

    #[tokio::test]
    async fn identical_requests_yield_identical_prompts() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/models/gemini-test:generateContent?key=test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply("deterministic output"))
            .expect(2)
            .create_async()
            .await;

        let client = test_client(server.url());
        let body = json!({ "targetService": "Runway Gen 4", "fields": { "genre": "Drama" } });
        let first = run(&client, &body).await.unwrap();
        let second = run(&client, &body).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn accepts_legacy_inputs_key() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/models/gemini-test:generateContent?key=test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply("ok"))
            .create_async()
            .await;

        let client = test_client(server.url());
        let body = json!({ "targetService": "Pixverse", "inputs": { "mainPrompt": "a fox" } });
        assert!(run(&client, &body).await.is_ok());
    }
}
