//! Error types for noise generation.

use thiserror::Error;

/// Result type for noise generation operations.
pub type NoiseResult<T> = Result<T, NoiseError>;

/// Errors that can occur during noise buffer generation.
///
/// Generation itself is total: for valid inputs the algorithms cannot fail.
/// The only rejected conditions are the input constraints below, checked
/// eagerly before any buffer is allocated.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// Sample rate must be positive.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// Duration must be positive and finite.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The rejected duration.
        duration: f64,
    },
}
