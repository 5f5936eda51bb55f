use thiserror::Error;

/// Errors raised while generating or exporting a world.
#[derive(Debug, Error)]
pub enum WorldGenError {
    /// A stage ran before the collections it reads were produced.
    #[error("{requires} must be generated before {stage}")]
    MissingDependency {
        stage: &'static str,
        requires: &'static str,
    },

    #[error("template pool `{pool}` is empty")]
    EmptyTemplatePool { pool: String },

    #[error("no geography available to place {stage}")]
    NoGeography { stage: &'static str },

    #[error("invalid world level {0}; expected 1-9")]
    InvalidLevel(u8),

    #[error("invalid world generation config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WorldGenError>;

impl WorldGenError {
    pub fn missing(stage: &'static str, requires: &'static str) -> Self {
        WorldGenError::MissingDependency { stage, requires }
    }
}
