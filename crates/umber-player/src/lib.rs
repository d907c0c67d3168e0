//! Umber playback layer
//!
//! Sits between the noise core and the platform glue: owns the playback
//! state machine (current noise type, playing flag, volume), defines the
//! contract a looping audio sink must satisfy, and optionally caches
//! generated buffers as WAV files on disk.
//!
//! The concrete audio device and the UI are external collaborators. The
//! controller is generic over [`AudioSink`] so the state machine is fully
//! testable without a sound card.
//!
//! # Example
//!
//! ```ignore
//! use umber_player::{FsBufferCache, NoisePlayer};
//! use umber_noise::NoiseType;
//!
//! let mut player = NoisePlayer::new(device_sink)?
//!     .with_cache(Box::new(FsBufferCache::new()?));
//! player.play()?;
//! player.switch_to(NoiseType::Green)?; // stop-then-start, still audible
//! player.set_volume(0.5);
//! ```

pub mod cache;
pub mod controller;
pub mod error;
pub mod sink;

#[cfg(test)]
mod tests_controller;

// Re-export main types at crate root
pub use cache::{BufferCache, CacheError, CacheManifest, CacheResult, FsBufferCache, MemoryCache};
pub use controller::{NoisePlayer, DEFAULT_VOLUME};
pub use error::{PlayerError, PlayerResult};
pub use sink::{AudioSink, SinkError};
