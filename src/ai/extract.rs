//! Tolerant extraction of JSON payloads from model replies. The model is
//! instructed to answer with bare JSON but routinely wraps it in markdown
//! fences or surrounds it with prose, so callers slice out the JSON
//! substring before parsing strictly.

/// Strip a markdown code fence wrapper (```json ... ``` or ``` ... ```),
/// if present, and trim surrounding whitespace.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let opened = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let closed = opened.trim_end().strip_suffix("```").unwrap_or(opened);
    closed.trim()
}

/// Slice from the first '{' to the last '}'. None if no such pair exists.
pub fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Slice from the first '[' to the last ']'. None if no such pair exists.
pub fn extract_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fences() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn strips_bare_fences() {
        let raw = "```\n[1, 2]\n```";
        assert_eq!(strip_code_fences(raw), "[1, 2]");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fences("  plain text  "), "plain text");
    }

    #[test]
    fn object_slice_tolerates_surrounding_prose() {
        let raw = "Sure! Here is the JSON you asked for:\n{\"key\": \"value\"}\nHope that helps.";
        assert_eq!(extract_object(raw), Some("{\"key\": \"value\"}"));
    }

    #[test]
    fn object_slice_fails_without_braces() {
        assert_eq!(extract_object("no json here"), None);
        assert_eq!(extract_object("} reversed {"), None);
    }

    #[test]
    fn array_slice_finds_outermost_brackets() {
        let raw = "```json\n[\"x\", \"y\", \"z\"]\n```";
        assert_eq!(extract_array(strip_code_fences(raw)), Some("[\"x\", \"y\", \"z\"]"));
        assert_eq!(extract_array("not json"), None);
    }
}
