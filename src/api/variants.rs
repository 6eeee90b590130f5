//! Suggest-variants operation: one field's text in, three alternative
//! phrasings out. The only operation allowed to degrade: if the model's
//! reply is not a JSON array, the raw text comes back as a single
//! suggestion instead of an error.

use serde_json::{Value, json};

use crate::ai::client::GeminiClient;
use crate::ai::{extract, prompts};
use crate::error::StudioError;

pub async fn run(client: &GeminiClient, body: &Value) -> Result<Value, StudioError> {
    let text = body
        .get("text")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| StudioError::MissingInput("text".into()))?;

    let raw = client.generate_text(prompts::VARIANT_WRITER, text).await?;
    let suggestions = parse_suggestions(&raw);

    Ok(json!({ "suggestions": suggestions }))
}

/// Strict array parse with graceful fallback. Callers may rely on the
/// result being non-empty, but not on it holding exactly three entries.
pub fn parse_suggestions(raw: &str) -> Vec<String> {
    let stripped = extract::strip_code_fences(raw);

    if let Some(sliced) = extract::extract_array(stripped) {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(sliced) {
            if !items.is_empty() {
                return items;
            }
        }
    }

    log::warn!("variant reply was not a JSON array of strings, returning raw text");
    vec![stripped.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn well_formed_array_passes_through() {
        assert_eq!(parse_suggestions(r#"["x","y","z"]"#), vec!["x", "y", "z"]);
    }

    #[test]
    fn fenced_array_is_unwrapped() {
        let raw = "```json\n[\"one\", \"two\", \"three\"]\n```";
        assert_eq!(parse_suggestions(raw), vec!["one", "two", "three"]);
    }

    #[test]
    fn malformed_reply_degrades_to_single_suggestion() {
        assert_eq!(parse_suggestions("not json"), vec!["not json"]);
    }

    #[test]
    fn array_of_non_strings_degrades_to_raw_text() {
        assert_eq!(parse_suggestions(r#"[1, 2, 3]"#), vec!["[1, 2, 3]"]);
    }

    #[test]
    fn empty_array_degrades_rather_than_returning_nothing() {
        assert_eq!(parse_suggestions("[]"), vec!["[]"]);
    }

    #[tokio::test]
    async fn blank_text_is_missing_input() {
        let client = GeminiClient::new(&Config {
            api_key: "test-key".into(),
            bind_addr: "127.0.0.1:0".into(),
            model: "gemini-test".into(),
            vision_model: "gemini-test".into(),
            timeout_secs: 5,
            max_body_bytes: 1024,
        })
        .unwrap();

        for body in [json!({}), json!({ "text": "" }), json!({ "text": "   " })] {
            let err = run(&client, &body).await.unwrap_err();
            assert_eq!(err.category(), "missing_input");
        }
    }

    #[tokio::test]
    async fn returns_three_suggestions_from_mocked_reply() {
        let body = serde_json::to_string(&json!({
            "candidates": [{ "content": { "parts": [{
                "text": "```json\n[\"a brave knight\", \"a weary paladin\", \"a wandering swordsman\"]\n```"
            }] } }]
        }))
        .unwrap();

        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/models/gemini-test:generateContent?key=test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = GeminiClient::new(&Config {
            api_key: "test-key".into(),
            bind_addr: "127.0.0.1:0".into(),
            model: "gemini-test".into(),
            vision_model: "gemini-test".into(),
            timeout_secs: 5,
            max_body_bytes: 1024,
        })
        .unwrap()
        .with_base_url(server.url());

        let out = run(&client, &json!({ "text": "a knight" })).await.unwrap();
        let suggestions = out["suggestions"].as_array().unwrap();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0], json!("a brave knight"));
    }
}
