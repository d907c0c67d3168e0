//! Colored-noise generation algorithms.
//!
//! Each module implements one noise color:
//! - `brown` - first-order leaky integration of white noise
//! - `white` - independent uniform draws, flat spectrum
//! - `grey` - white noise with positional perceptual weighting
//! - `green` - band-weighted noise with slow swell modulation and smoothing
//!
//! All algorithms consume randomness exclusively through
//! [`RandomSource`](crate::rng::RandomSource), making the exact output a
//! deterministic function of the drawn sequence.

pub mod brown;
pub mod green;
pub mod grey;
pub mod white;

pub use brown::{BrownIntegrator, BrownSynth};
pub use green::GreenSynth;
pub use grey::GreySynth;
pub use white::WhiteSynth;

use crate::rng::RandomSource;

/// Common trait for the noise synthesizers.
pub trait Synthesizer {
    /// Generates `num_samples` mono samples, consuming draws from `rng`.
    ///
    /// Output is the raw algorithm result; depending on the tuning constants
    /// it may exceed [-1.0, 1.0]. Clamping happens at the PCM encoding
    /// boundary.
    fn synthesize<R: RandomSource>(&self, num_samples: usize, rng: &mut R) -> Vec<f32>;
}
