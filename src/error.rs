use thiserror::Error;

/// Errors reported by the trainers before any weight is touched, and by the
/// config loader.
#[derive(Debug, Error)]
pub enum SgdError {
    #[error("dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("weight row {row} out of range (matrix has {n_rows} rows)")]
    RowOutOfRange { row: usize, n_rows: usize },

    /// PEGASOS divides by `alpha * t`.
    #[error("the pegasos learning rate requires alpha > 0")]
    PegasosRequiresAlpha,

    #[error("unknown learning rate schedule '{0}'")]
    UnknownLearningRate(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SgdError>;
