// Error types for tradeflow.
// Covers configuration loading, terminal IO, and logging setup.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TradeFlowError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid color in config: {value}")]
    InvalidColor { value: String },

    #[error("Could not determine a config directory for this platform")]
    NoConfigDir,

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, TradeFlowError>;
