//! Named starting points for the Veo 3+ Studio form. A preset fills fields
//! the caller left empty; explicit caller values always win.

use serde_json::{Map, Value, json};

use crate::studio::service::TargetService;

pub struct Preset {
    pub name: &'static str,
    pub service: TargetService,
    pub values: &'static [(&'static str, &'static str)],
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Street Interview",
        service: TargetService::Veo3Studio,
        values: &[
            ("genre", "Comedy"),
            (
                "character",
                "An eccentric alien with shimmering skin, holding a retro microphone, asking passersby about their favorite human food.",
            ),
            (
                "scene",
                "A busy, sun-drenched city sidewalk with a diverse crowd of people walking by, some stopping to look at the camera.",
            ),
            ("shot", "Medium Close-up"),
            ("motion", "Handheld Shaky Cam"),
            ("lighting", "Hard, Direct Light"),
            (
                "dialogue",
                "Alien: (In a curious, high-pitched voice) 'Excuse me, human, what is your opinion on this delicacy you call... pizza?'",
            ),
            (
                "audioDesc",
                "City ambiance, chatter, occasional car horn, a faint, strange humming sound from the alien's microphone.",
            ),
        ],
    },
    Preset {
        name: "Cinematic Vlog",
        service: TargetService::Veo3Studio,
        values: &[
            ("genre", "Drama"),
            (
                "character",
                "A solo traveler, journaling in a notebook while sipping coffee, a look of thoughtful reflection on their face.",
            ),
            (
                "scene",
                "A cozy, rain-streaked cafe window overlooking a misty mountain range at dawn.",
            ),
            ("style", "Cinematic"),
            ("shot", "Medium Shot"),
            ("motion", "Slow Pan Left"),
            ("lighting", "Soft, Diffused Light"),
            (
                "audioDesc",
                "Lofi hip-hop music, gentle rain sounds, the soft scratch of a pen on paper.",
            ),
        ],
    },
    Preset {
        name: "Unboxing Demo",
        service: TargetService::Veo3Studio,
        values: &[
            ("genre", "Sci-Fi"),
            (
                "character",
                "A pair of clean, gloved hands carefully opening a mysterious, glowing box on a pedestal.",
            ),
            (
                "scene",
                "A clean, minimalist tabletop with a soft, out-of-focus background. The room is dark except for the light from the box.",
            ),
            ("style", "Photorealistic"),
            ("shot", "Close-up"),
            ("motion", "Static Camera"),
            ("lighting", "Low-Key Lighting (Chiaroscuro)"),
            (
                "audioDesc",
                "Satisfying sounds of tearing paper, a soft click as the box opens, a gentle, ethereal hum from the object inside.",
            ),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

/// Merge preset values into the field bag without overriding anything the
/// caller set to a non-blank value.
pub fn apply(preset: &Preset, fields: &mut Map<String, Value>) {
    for (key, value) in preset.values {
        let taken = fields
            .get(*key)
            .map(|v| !matches!(v, Value::Null) && v.as_str().map(|s| !s.trim().is_empty()).unwrap_or(true))
            .unwrap_or(false);
        if !taken {
            fields.insert((*key).to_string(), Value::String((*value).to_string()));
        }
    }
}

/// Response body for the preset listing route.
pub fn listing() -> Value {
    let presets: Vec<Value> = PRESETS
        .iter()
        .map(|p| {
            let values: Map<String, Value> = p
                .values
                .iter()
                .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
                .collect();
            json!({ "name": p.name, "targetService": p.service.as_str(), "values": values })
        })
        .collect();
    json!({ "presets": presets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn find_is_case_insensitive() {
        assert!(find("street interview").is_some());
        assert!(find("Unboxing Demo").is_some());
        assert!(find("Nonexistent").is_none());
    }

    #[test]
    fn apply_fills_only_unset_fields() {
        let preset = find("Cinematic Vlog").unwrap();
        let mut fields =
            json!({ "genre": "Horror", "scene": "", "duration": 8 }).as_object().cloned().unwrap();
        apply(preset, &mut fields);

        // Caller's explicit genre survives; blank scene gets the preset text.
        assert_eq!(fields["genre"], json!("Horror"));
        assert!(fields["scene"].as_str().unwrap().contains("rain-streaked cafe"));
        assert_eq!(fields["duration"], json!(8));
        assert_eq!(fields["shot"], json!("Medium Shot"));
    }

    #[test]
    fn listing_exposes_all_presets_with_service() {
        let body = listing();
        let presets = body["presets"].as_array().unwrap();
        assert_eq!(presets.len(), PRESETS.len());
        for p in presets {
            assert_eq!(p["targetService"], json!("Veo 3+ Studio"));
            assert!(p["values"].is_object());
        }
    }
}
