//! Main entry point for noise buffer generation.
//!
//! Validates the request, builds the per-call random source, and dispatches
//! to the synthesizer for the requested noise type. Generation is total for
//! valid inputs; the only failure paths are the eager input checks here and
//! allocation exhaustion, which aborts rather than being silently recovered.

use crate::error::{NoiseError, NoiseResult};
use crate::params::{NoiseType, Params};
use crate::rng::{PcgSource, RandomSource};
use crate::synthesis::{BrownSynth, GreenSynth, GreySynth, Synthesizer, WhiteSynth};

/// Sample rate the playback layer generates at.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Loop length the playback layer generates, in seconds. Longer loops repeat
/// less noticeably.
pub const DEFAULT_DURATION_SECONDS: f64 = 5.0;

/// A generated mono noise buffer.
///
/// Owned by the caller that requested it; every generation call produces a
/// fresh instance.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseBuffer {
    /// Mono samples. Raw algorithm output, which may exceed [-1.0, 1.0] for
    /// amplified noise types; clamping happens at the PCM encoding boundary.
    pub samples: Vec<f32>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl NoiseBuffer {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Generates a noise buffer with the type's compiled-in tuning.
///
/// # Arguments
/// * `noise_type` - The noise color to generate
/// * `sample_rate` - Samples per second, must be positive
/// * `duration_seconds` - Loop length, must be positive and finite
/// * `seed` - Seed for the per-call PCG32 random source
///
/// # Returns
/// A buffer of exactly `round(duration_seconds * sample_rate)` samples
pub fn generate(
    noise_type: NoiseType,
    sample_rate: u32,
    duration_seconds: f64,
    seed: u32,
) -> NoiseResult<NoiseBuffer> {
    let params = noise_type.default_params();
    let mut rng = PcgSource::new(seed);
    generate_from_params(&params, sample_rate, duration_seconds, &mut rng)
}

/// Generates a noise buffer from explicit parameters and a caller-supplied
/// random source.
///
/// This is the core used by both production code and tests; injecting a
/// scripted source makes the output an exact function of the draw sequence.
pub fn generate_from_params<R: RandomSource>(
    params: &Params,
    sample_rate: u32,
    duration_seconds: f64,
    rng: &mut R,
) -> NoiseResult<NoiseBuffer> {
    if sample_rate == 0 {
        return Err(NoiseError::InvalidSampleRate { rate: sample_rate });
    }
    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return Err(NoiseError::InvalidDuration {
            duration: duration_seconds,
        });
    }

    let num_samples = (duration_seconds * sample_rate as f64).round() as usize;

    let samples = match params {
        Params::Brown(p) => BrownSynth::new(*p).synthesize(num_samples, rng),
        Params::White(p) => WhiteSynth::new(*p).synthesize(num_samples, rng),
        Params::Grey(p) => GreySynth::new(*p).synthesize(num_samples, rng),
        Params::Green(p) => GreenSynth::new(*p).synthesize(num_samples, rng),
    };

    Ok(NoiseBuffer {
        samples,
        sample_rate,
    })
}
