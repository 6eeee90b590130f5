use crate::error::StudioError;

const DEFAULT_ADDR: &str = "127.0.0.1:8787";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Process configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub bind_addr: String,
    pub model: String,
    pub vision_model: String,
    pub timeout_secs: u64,
    pub max_body_bytes: usize,
}

impl Config {
    /// Load from the environment. A missing `GEMINI_API_KEY` is fatal here,
    /// before the listener binds, so the process never accepts requests it
    /// cannot fulfill.
    pub fn from_env() -> Result<Self, StudioError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| StudioError::Config("GEMINI_API_KEY is not set".into()))?;
        if api_key.trim().is_empty() {
            return Err(StudioError::Config("GEMINI_API_KEY is empty".into()));
        }

        let model = std::env::var("PROMPTSTUDIO_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let vision_model =
            std::env::var("PROMPTSTUDIO_VISION_MODEL").unwrap_or_else(|_| model.clone());

        Ok(Self {
            api_key,
            bind_addr: std::env::var("PROMPTSTUDIO_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into()),
            model,
            vision_model,
            timeout_secs: parse_var(
                "PROMPTSTUDIO_TIMEOUT_SECS",
                std::env::var("PROMPTSTUDIO_TIMEOUT_SECS").ok().as_deref(),
                DEFAULT_TIMEOUT_SECS,
            )?,
            max_body_bytes: parse_var(
                "PROMPTSTUDIO_MAX_BODY_BYTES",
                std::env::var("PROMPTSTUDIO_MAX_BODY_BYTES").ok().as_deref(),
                DEFAULT_MAX_BODY_BYTES,
            )?,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &str,
    raw: Option<&str>,
    default: T,
) -> Result<T, StudioError> {
    match raw {
        None => Ok(default),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| StudioError::Config(format!("{name} has an invalid value: '{s}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_falls_back_to_default() {
        let v: u64 = parse_var("X", None, 60).unwrap();
        assert_eq!(v, 60);
    }

    #[test]
    fn parse_var_accepts_valid_numbers() {
        let v: usize = parse_var("X", Some("1048576"), 0).unwrap();
        assert_eq!(v, 1_048_576);
    }

    #[test]
    fn parse_var_rejects_garbage() {
        let err = parse_var::<u64>("PROMPTSTUDIO_TIMEOUT_SECS", Some("soon"), 60).unwrap_err();
        assert_eq!(err.category(), "config");
        assert!(err.to_string().contains("PROMPTSTUDIO_TIMEOUT_SECS"));
    }
}
