use thiserror::Error;

pub type Result<T> = std::result::Result<T, OutlineError>;

#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("malformed outline: {0}")]
    MalformedTree(String),

    #[error("invalid path index {index}; children length is {len}")]
    PathResolution { index: usize, len: usize },

    #[error("position out of range: {position} (0..{len})")]
    Range { position: usize, len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl OutlineError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::MalformedTree(_) => "MALFORMED_TREE",
            Self::PathResolution { .. } => "PATH_RESOLUTION",
            Self::Range { .. } => "RANGE",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }
}
