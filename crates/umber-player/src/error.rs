//! Error types for the playback layer.

use thiserror::Error;
use umber_noise::NoiseError;

use crate::sink::SinkError;

/// Result type for playback operations.
pub type PlayerResult<T> = Result<T, PlayerError>;

/// Errors surfaced by the playback controller.
///
/// Cache failures are deliberately absent: the cache is an optional
/// optimization, so its errors are logged and swallowed rather than failing
/// generation or playback.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Buffer generation was rejected.
    #[error("noise generation failed: {0}")]
    Generation(#[from] NoiseError),

    /// The platform sink could not accept or play a buffer. An inaudible
    /// "success" is worse than a visible error, so this always propagates.
    #[error(transparent)]
    PlaybackUnavailable(#[from] SinkError),
}
