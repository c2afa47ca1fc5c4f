use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised at the fallible edges of the crate (parsing and config loading).
/// Rendering itself never fails.
#[derive(Error, Debug, Clone)]
pub enum RenderError {
    #[error("JSON parse error: {0}")]
    Json(String),

    #[error("YAML parse error: {0}")]
    Yaml(String),

    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Unsupported config format for '{path}': expected .yaml, .yml or .json")]
    UnsupportedConfigFormat { path: String },
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::Yaml(err.to_string())
    }
}
