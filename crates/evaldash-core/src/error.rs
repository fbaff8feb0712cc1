use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Score out of range [0, 1]: {0}")]
    InvalidScore(f64),

    #[error("Unsupported upload: {0}")]
    UnsupportedUpload(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
