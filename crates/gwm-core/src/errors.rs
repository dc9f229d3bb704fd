use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum GwmError {
    #[error("{0}")]
    Error(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Iteration did not converge after {iterations} iterations. Last change={last_change:e}, tolerance={tolerance:e}")]
    NotConverged {
        iterations: usize,
        last_change: f64,
        tolerance: f64,
    },
    #[error("Root is not bracketed by [{lower}, {upper}]: f(lower)={f_lower}, f(upper)={f_upper}")]
    RootNotBracketed {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },
    #[error("Index ({row}, {col}) is outside of the {nrow}x{ncol} grid")]
    OutOfGrid {
        row: usize,
        col: usize,
        nrow: usize,
        ncol: usize,
    },
    #[error("Time {0} is not part of the timeseries")]
    MissingTime(f64),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Failed to serialise output: {0}")]
    Serialization(String),
}

/// Convenience type for `Result<T, GwmError>`.
pub type GwmResult<T> = Result<T, GwmError>;
