/// Errors the benchmark driver can hit before or while setting up a run.
#[derive(Debug, thiserror::Error)]
pub enum TransposeError {
    #[error("matrix dimension must be at least 1")]
    ZeroDimension,

    #[error("block size must be at least 1")]
    ZeroBlockSize,

    #[error("diagnostics print a 4x4 corner but the matrix is only {dimension}x{dimension}")]
    DiagnosticsTooSmall { dimension: usize },

    #[error("could not allocate a {dimension}x{dimension} f64 matrix")]
    Allocation { dimension: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, TransposeError>`.
pub type Result<T> = std::result::Result<T, TransposeError>;
