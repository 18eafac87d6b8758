use thiserror::Error;

/// Errors raised by the integration core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The integration bounds do not describe a non-empty finite interval.
    #[error("invalid interval [{lo}, {hi}]: lower bound must be finite and strictly less than upper bound")]
    InvalidInterval { lo: f64, hi: f64 },

    /// The integrand failed, or produced a non-finite value, at a sampled point.
    #[error("evaluation failed at x = {x}: {reason}")]
    Evaluation { x: f64, reason: String },
}

impl Error {
    /// Builds an [`Error::Evaluation`] for the sample point `x`.
    pub fn evaluation(x: f64, reason: impl Into<String>) -> Self {
        Error::Evaluation {
            x,
            reason: reason.into(),
        }
    }
}

/// Result type for integration operations
pub type Result<T> = std::result::Result<T, Error>;
