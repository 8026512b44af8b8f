//! Error handling for the pricing library

/// Library error type
///
/// Pricing calculations themselves never fail; only loading configuration
/// and decoding request payloads can.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
