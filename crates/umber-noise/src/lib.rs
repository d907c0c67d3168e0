//! Umber noise core
//!
//! Generates fixed-length, loopable colored-noise buffers for ambient and
//! focus listening. Four colors are supported:
//!
//! - **Brown** - leaky integration of white noise, deep rumble
//! - **White** - independent uniform draws, flat spectrum
//! - **Grey** - white noise with positional perceptual weighting
//! - **Green** - band-weighted noise with a slow swell, evoking surf
//!
//! # Determinism
//!
//! The algorithms are deterministic up to the injected random source. All
//! randomness flows through [`rng::RandomSource`]; production code seeds a
//! PCG32 stream per generation (derived with BLAKE3), so a given seed always
//! reproduces the same buffer while successive generations differ.
//!
//! # Range and clipping
//!
//! Buffers carry raw algorithm output. The amplified noise types can exceed
//! [-1.0, 1.0]; samples are clamped exactly once, at the PCM encoding
//! boundary in [`wav`], and playback sinks are expected to do the same.
//!
//! # Example
//!
//! ```ignore
//! use umber_noise::{generate, NoiseType};
//!
//! let buffer = generate(NoiseType::Brown, 44_100, 5.0, seed)?;
//! assert_eq!(buffer.len(), 220_500);
//!
//! let wav = umber_noise::wav::WavResult::from_buffer(&buffer);
//! std::fs::write("brown.wav", &wav.wav_data)?;
//! ```
//!
//! # Crate structure
//!
//! - [`generate()`] - validated entry point for buffer generation
//! - [`params`] - noise types and compiled-in tuning constants
//! - [`rng`] - deterministic random source with seed derivation
//! - [`synthesis`] - the four generation algorithms
//! - [`wav`] - deterministic WAV encoding of generated buffers

pub mod error;
pub mod generate;
pub mod params;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use error::{NoiseError, NoiseResult};
pub use generate::{
    generate, generate_from_params, NoiseBuffer, DEFAULT_DURATION_SECONDS, DEFAULT_SAMPLE_RATE,
};
pub use params::{NoiseType, Params};
pub use wav::WavResult;
