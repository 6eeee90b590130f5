//! Per-service prompt templates: the ordered field list that becomes the
//! user-content block, and the voice instruction handed to the model as the
//! system directive. Templates are static data; selection never fails.

use serde_json::{Map, Value};

use crate::ai::prompts;
use crate::studio::service::TargetService;

/// One line of the rendered block: `{label}: {value or default}`.
///
/// `suffix` is appended to caller-supplied scalar values (e.g. "s" for a
/// duration in seconds). Defaults are literal rendered text and carry their
/// own suffix already.
#[derive(Debug, Clone, Copy)]
pub struct PromptField {
    pub key: &'static str,
    pub label: &'static str,
    pub default: &'static str,
    pub suffix: &'static str,
}

const fn field(key: &'static str, label: &'static str, default: &'static str) -> PromptField {
    PromptField { key, label, default, suffix: "" }
}

#[derive(Debug)]
pub struct PromptTemplate {
    pub service: Option<TargetService>,
    pub instruction: &'static str,
    pub fields: &'static [PromptField],
}

const VEO3_FIELDS: &[PromptField] = &[
    field("genre", "Genre", "Not specified"),
    field("character", "Character & Action", "Not specified"),
    field("scene", "Scene & Environment", "Not specified"),
    field("style", "Artistic Style", "Not specified"),
    field("lighting", "Lighting Style", "Not specified"),
    field("shot", "Camera Shot", "Not specified"),
    field("motion", "Camera Motion", "Not specified"),
    field("audioDesc", "Audio Description", "Not specified"),
    field("dialogue", "Dialogue", "Not specified"),
    field("aspect", "Aspect Ratio", "16:9"),
    PromptField { key: "duration", label: "Duration", default: "5s", suffix: "s" },
    field("negative", "Negative Prompt", "None"),
];

const RUNWAY_FIELDS: &[PromptField] = &[
    field("genre", "Genre", "Not specified"),
    field("motionDescription", "Motion Description", "Not specified"),
    field("style", "Artistic Style", "Not specified"),
    field("cameraMotion", "Camera Motion", "Static"),
    field("motionStrength", "Motion Strength", "5"),
];

const KLING_FIELDS: &[PromptField] = &[
    field("genre", "Genre", "Not specified"),
    field("character", "Character & Action", "Not specified"),
    field("scene", "Scene & Environment", "Not specified"),
    field("style", "Artistic Style", "Not specified"),
    field("motionSpeed", "Motion Speed", "Real-time"),
    field("physics", "Physics Style", "Realistic Physics"),
    field("realism", "Realism Level", "Photorealistic"),
];

const LUMA_FIELDS: &[PromptField] = &[
    field("genre", "Genre", "Not specified"),
    field("mainPrompt", "Main Prompt", "Not specified"),
    field("style", "Artistic Style", "Not specified"),
    field("cameraEffect", "Camera Effect", "Static"),
    field("motionFluidity", "Motion Fluidity", "5"),
    field("characterConsistency", "Character Consistency", "7"),
    field("hasImage", "Reference Image Attached", "No"),
];

const PIXVERSE_FIELDS: &[PromptField] = &[
    field("mainPrompt", "Main Prompt", "Not specified"),
    field("negativePrompt", "Negative Prompt", "None"),
    field("style", "Artistic Style", "Not specified"),
    field("cameraMovement", "Camera Movement", "Static"),
    field("aspectRatio", "Aspect Ratio", "16:9"),
];

const MIDJOURNEY_FIELDS: &[PromptField] = &[
    field("scenePrompt", "Scene", "Not specified"),
    field("characterPrompt", "Character", "Not specified"),
    field("cameraSettingsPrompt", "Camera Settings", "Not specified"),
    field("lightingPrompt", "Lighting", "Not specified"),
    field("genrePrompt", "Genre & Vibe", "Not specified"),
    field("formatPrompt", "Format & Quality", "Not specified"),
    field("negativePrompt", "Negative Prompt", "None"),
    field("motionLevel", "Motion Level", "Low Motion"),
    field("stylize", "Stylize", "250"),
    field("chaos", "Chaos", "0"),
    field("styleRaw", "Raw Mode", "Yes"),
    field("aspectRatio", "Aspect Ratio", "16:9"),
    field("crefUrl", "Character Reference URL", "None"),
    field("srefUrl", "Style Reference URL", "None"),
];

static VEO3: PromptTemplate = PromptTemplate {
    service: Some(TargetService::Veo3Studio),
    instruction: prompts::VEO3_DIRECTOR,
    fields: VEO3_FIELDS,
};
static RUNWAY: PromptTemplate = PromptTemplate {
    service: Some(TargetService::RunwayGen4),
    instruction: prompts::RUNWAY_DIRECTOR,
    fields: RUNWAY_FIELDS,
};
static KLING: PromptTemplate = PromptTemplate {
    service: Some(TargetService::Kling),
    instruction: prompts::KLING_DIRECTOR,
    fields: KLING_FIELDS,
};
static LUMA: PromptTemplate = PromptTemplate {
    service: Some(TargetService::LumaDreamMachine),
    instruction: prompts::LUMA_DIRECTOR,
    fields: LUMA_FIELDS,
};
static PIXVERSE: PromptTemplate = PromptTemplate {
    service: Some(TargetService::Pixverse),
    instruction: prompts::PIXVERSE_DIRECTOR,
    fields: PIXVERSE_FIELDS,
};
static MIDJOURNEY: PromptTemplate = PromptTemplate {
    service: Some(TargetService::MidjourneyVideo),
    instruction: prompts::MIDJOURNEY_DIRECTOR,
    fields: MIDJOURNEY_FIELDS,
};

/// Fallback for unrecognized service identifiers: no declared fields, every
/// supplied key rendered as-is.
static GENERIC: PromptTemplate =
    PromptTemplate { service: None, instruction: prompts::GENERIC_COMBINE, fields: &[] };

impl PromptTemplate {
    pub fn for_service(service: TargetService) -> &'static PromptTemplate {
        match service {
            TargetService::Veo3Studio => &VEO3,
            TargetService::RunwayGen4 => &RUNWAY,
            TargetService::Kling => &KLING,
            TargetService::LumaDreamMachine => &LUMA,
            TargetService::Pixverse => &PIXVERSE,
            TargetService::MidjourneyVideo => &MIDJOURNEY,
        }
    }

    /// Resolve a wire identifier to its template. Never fails: unknown names
    /// get the generic combine-all-fields template.
    pub fn select(name: &str) -> &'static PromptTemplate {
        match TargetService::from_wire(name) {
            Some(service) => Self::for_service(service),
            None => &GENERIC,
        }
    }

    /// Build the user-content block handed to the model alongside the
    /// instruction. Every declared field produces exactly one line, in
    /// declared order; absent or blank values render the field's default, so
    /// the block keeps a stable shape no matter how much the caller filled in.
    pub fn render_user_content(&self, fields: &Map<String, Value>) -> String {
        let mut out = String::with_capacity(256);

        if self.fields.is_empty() {
            // Generic template: render whatever the caller sent, sorted by
            // key so the block is deterministic.
            let mut keys: Vec<&String> = fields.keys().collect();
            keys.sort();
            for key in keys {
                if let Some(value) = render_value(&fields[key.as_str()], "") {
                    push_line(&mut out, key, &value);
                }
            }
            return out;
        }

        for field in self.fields {
            let value = fields
                .get(field.key)
                .and_then(|v| render_value(v, field.suffix))
                .unwrap_or_else(|| field.default.to_string());
            push_line(&mut out, field.label, &value);
        }
        out
    }
}

fn push_line(out: &mut String, label: &str, value: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(label);
    out.push_str(": ");
    out.push_str(value);
}

/// Render a field value to text, or None if it is absent in spirit (null,
/// blank string, empty array) and the field default should be used instead.
fn render_value(value: &Value, suffix: &str) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() { None } else { Some(format!("{trimmed}{suffix}")) }
        }
        Value::Number(n) => Some(format!("{n}{suffix}")),
        Value::Bool(b) => Some(if *b { "Yes".into() } else { "No".into() }),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            if parts.is_empty() { None } else { Some(parts.join(", ")) }
        }
        Value::Null | Value::Object(_) => None,
    }
}
