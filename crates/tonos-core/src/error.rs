use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid value '{value}' for risk factor '{field}'")]
    InvalidRiskFactor { field: &'static str, value: String },
}
