use thiserror::Error;

/// Validation and contract errors exposed by `seedval-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("benchmark set must contain at least one comparable")]
    EmptyBenchmarkSet,
    #[error("benchmark '{name}' field '{field}' must be a positive finite multiple, got {value}")]
    InvalidMultiple {
        name: String,
        field: &'static str,
        value: f64,
    },
    #[error("benchmark name cannot be empty")]
    EmptyBenchmarkName,

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("adjustment factor floor must be finite and non-negative, got {value}")]
    InvalidFactorFloor { value: f64 },

    #[error("invalid funding stage '{value}', expected one of Pre-Seed, Seed")]
    InvalidStage { value: String },
    #[error(
        "invalid business model '{value}', expected one of SaaS, Marketplace, eCommerce, Fintech, Proptech, Other"
    )]
    InvalidBusinessModel { value: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
