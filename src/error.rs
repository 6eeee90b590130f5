use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Invalid model output: {0}")]
    InvalidModelOutput(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Generation timed out after {0}s")]
    GenerationTimeout(u64),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StudioError {
    /// Machine-oriented category string used in error response bodies.
    pub fn category(&self) -> &'static str {
        match self {
            StudioError::MissingInput(_) => "missing_input",
            StudioError::InvalidModelOutput(_) => "invalid_model_output",
            StudioError::GenerationFailed(_) => "generation_failed",
            StudioError::GenerationTimeout(_) => "generation_timeout",
            StudioError::Config(_) => "config",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            StudioError::MissingInput(_) => 400,
            StudioError::GenerationTimeout(_) => 504,
            StudioError::InvalidModelOutput(_)
            | StudioError::GenerationFailed(_)
            | StudioError::Config(_) => 500,
        }
    }
}
