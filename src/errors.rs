use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Backend read failed: {0}")]
    Backend(String),

    #[error("Cache error: {0}")]
    Cache(String),
}
