use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarmonicError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("Insufficient telemetry: {have} samples, need at least {need}")]
    InsufficientData { have: usize, need: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type HarmonicResult<T> = Result<T, HarmonicError>;
