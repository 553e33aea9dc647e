use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum TripError {
    #[error("failure opening trip source '{path}': {source}")]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failure reading trip source at line {line_number}: {source}")]
    ReadError {
        line_number: usize,
        source: std::io::Error,
    },
    #[error("failure loading trip analyzer configuration: {0}")]
    ConfigurationError(#[from] config::ConfigError),
    #[error("invalid trip analyzer configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failure writing csv output: {0}")]
    OutputError(#[from] csv::Error),
    #[error("failure writing json output: {0}")]
    JsonOutputError(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
