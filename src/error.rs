#[derive(Debug, thiserror::Error)]
pub enum ActivityStatsError {
    #[error("Invalid amount {value:?} ({location})")]
    InvalidAmount { value: String, location: String },

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ActivityStatsError>;
