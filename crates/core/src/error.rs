use thiserror::Error;

/// Top-level error type used across the entire library.
#[derive(Debug, Error)]
pub enum SbarError {
    /// The sketchybar binary could not be spawned at all.
    #[error("invoke error: {0}")]
    Invoke(String),

    /// A query response was not valid JSON (e.g. sketchybar printed an
    /// error string instead of a record).
    #[error("parse error: {0}")]
    Parse(String),

    /// A query response was valid JSON but did not match the record schema.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = SbarError> = std::result::Result<T, E>;
