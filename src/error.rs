use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrateError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing required CSV header: {0}")]
    MissingHeader(String),

    #[error("Unknown output mode '{0}' (expected markdown, html or plain)")]
    UnknownOutputMode(String),
}

pub type Result<T> = std::result::Result<T, CrateError>;
