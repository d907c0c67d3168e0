//! Playback sink contract.
//!
//! The concrete audio device lives outside this workspace (it is platform
//! glue, not core), so the crate defines the seam it must satisfy: accept a
//! mono PCM buffer, loop it indefinitely, and expose stop and volume
//! controls. Tests drive the controller through scripted implementations of
//! this trait.

use thiserror::Error;

/// The sink could not accept or play a buffer ("playback unavailable").
#[derive(Debug, Error)]
#[error("playback unavailable: {message}")]
pub struct SinkError {
    /// Human-readable cause.
    pub message: String,
}

impl SinkError {
    /// Creates a sink error from any displayable cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A playback sink that loops one mono PCM buffer indefinitely.
///
/// Implementations own the clipping of samples outside [-1.0, 1.0]; the
/// generator hands over raw algorithm output.
pub trait AudioSink {
    /// Loads `samples` at `sample_rate` and starts looping playback from the
    /// beginning of the buffer.
    ///
    /// Replaces any buffer loaded earlier. Callers guarantee playback is
    /// stopped before a new buffer is started.
    fn start(&mut self, samples: &[f32], sample_rate: u32) -> Result<(), SinkError>;

    /// Stops playback. Must be safe to call when nothing is playing.
    fn stop(&mut self);

    /// Applies an output gain. The controller clamps to [0.0, 1.0] before
    /// calling; volume changes never touch the loaded buffer.
    fn set_volume(&mut self, volume: f32);
}
