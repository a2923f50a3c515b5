use thiserror::Error;

/// Errors that can occur while setting up or loading a tour
#[derive(Debug, Error)]
pub enum TourError {
    /// A tour needs at least one point of interest to have a first state
    #[error("Tour has no points of interest")]
    EmptySequence,

    #[error("Invalid point of interest at index {index}: {reason}")]
    InvalidNode { index: usize, reason: String },

    #[error("Invalid configuration value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Failed to parse tour data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read tour file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tour operations
pub type TourResult<T> = Result<T, TourError>;
