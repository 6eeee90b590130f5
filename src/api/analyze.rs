//! Describe-image operation: an inlined reference image goes to the vision
//! model, and the reply comes back as a typed breakdown suitable for
//! pre-filling a prompt form. All-or-nothing: a reply that does not parse
//! into the expected shape is an error, never a partially filled result.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ai::client::GeminiClient;
use crate::ai::{extract, prompts, schema_utils};
use crate::error::StudioError;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub character_description: String,
    pub scene_description: String,
    #[serde(default)]
    pub detected_objects: Vec<DetectedObject>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetectedObject {
    pub name: String,
    #[serde(default)]
    pub suggested_motions: Vec<String>,
}

pub async fn run(client: &GeminiClient, body: &Value) -> Result<Value, StudioError> {
    let image = body
        .get("image")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| StudioError::MissingInput("image".into()))?;
    let mime_type = body
        .get("mimeType")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| StudioError::MissingInput("mimeType".into()))?;

    let schema = match schema_utils::response_schema(schemars::schema_for!(AnalysisResult)) {
        Ok(schema) => Some(schema),
        Err(e) => {
            log::warn!("analysis response schema unavailable: {e}");
            None
        }
    };

    log::info!("analyzing {mime_type} image ({} base64 bytes)", image.len());
    let raw = client.describe_image(prompts::VISION_ANALYST, image, mime_type, schema).await?;

    let result = parse_analysis(&raw)?;
    serde_json::to_value(result)
        .map_err(|e| StudioError::GenerationFailed(format!("failed to serialize analysis: {e}")))
}

/// Slice the reply from the first '{' to the last '}' and strict-parse it.
/// The raw reply is logged for diagnosis on failure but never returned to
/// the caller.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, StudioError> {
    let sliced = extract::extract_object(raw).ok_or_else(|| {
        log::warn!("analysis reply contained no JSON object: {raw}");
        StudioError::InvalidModelOutput("model reply contained no JSON object".into())
    })?;

    serde_json::from_str(sliced).map_err(|e| {
        log::warn!("analysis reply failed to parse ({e}): {raw}");
        StudioError::InvalidModelOutput("model reply was not the expected JSON shape".into())
    })
}
