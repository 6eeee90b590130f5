//! Turn a schemars-derived schema into the shape Gemini's structured-output
//! mode accepts: `$ref`s inlined, draft-07 metadata stripped.

use serde_json::{Map, Value};

/// `root` is the output of `schemars::schema_for!`.
pub fn response_schema<T: serde::Serialize>(root: T) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(root)?;

    let definitions = value
        .get("definitions")
        .or_else(|| value.get("$defs"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    clean_node(&mut value, &definitions);
    Ok(value)
}

fn clean_node(node: &mut Value, definitions: &Map<String, Value>) {
    // Inline a $ref before anything else; the definition body may itself
    // need cleaning.
    let ref_name = node
        .as_object()
        .and_then(|map| map.get("$ref"))
        .and_then(Value::as_str)
        .and_then(|r| r.rsplit('/').next())
        .map(str::to_string);
    if let Some(name) = ref_name {
        if let Some(def) = definitions.get(&name) {
            *node = def.clone();
        }
    }

    match node {
        Value::Object(map) => {
            for key in
                ["$schema", "$ref", "$defs", "definitions", "title", "format", "additionalProperties"]
            {
                map.remove(key);
            }
            if let Some(Value::Object(props)) = map.get_mut("properties") {
                for prop in props.values_mut() {
                    clean_node(prop, definitions);
                }
            }
            if let Some(items) = map.get_mut("items") {
                clean_node(items, definitions);
            }
        }
        Value::Array(items) => {
            for item in items {
                clean_node(item, definitions);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::{JsonSchema, schema_for};
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    #[allow(dead_code)]
    struct Inner {
        name: String,
    }

    #[derive(Deserialize, JsonSchema)]
    #[allow(dead_code)]
    struct Outer {
        label: String,
        children: Vec<Inner>,
    }

    #[test]
    fn refs_are_inlined_and_metadata_stripped() {
        let schema = response_schema(schema_for!(Outer)).unwrap();
        let text = serde_json::to_string(&schema).unwrap();
        assert!(!text.contains("$ref"));
        assert!(!text.contains("$schema"));
        assert!(!text.contains("definitions"));

        let items = &schema["properties"]["children"]["items"];
        assert_eq!(items["type"], "object");
        assert_eq!(items["properties"]["name"]["type"], "string");
    }
}
