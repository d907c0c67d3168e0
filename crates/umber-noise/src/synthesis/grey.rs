//! Grey noise - white noise with positional perceptual weighting.
//!
//! A cheap approximation of equal-loudness weighting: instead of a spectral
//! filter, sample positions are scaled by band factors chosen from their
//! index. The branch order is significant and fixed: divisibility by 4 wins
//! over 3, which wins over 2, and exactly one factor (or none) applies per
//! index.

use super::{Synthesizer, WhiteSynth};
use crate::params::{GreyParams, WhiteParams};
use crate::rng::RandomSource;

/// Grey noise synthesizer.
#[derive(Debug, Clone)]
pub struct GreySynth {
    /// Tuning parameters.
    pub params: GreyParams,
}

impl GreySynth {
    /// Creates a grey noise synthesizer.
    pub fn new(params: GreyParams) -> Self {
        Self { params }
    }
}

impl Synthesizer for GreySynth {
    fn synthesize<R: RandomSource>(&self, num_samples: usize, rng: &mut R) -> Vec<f32> {
        let white = WhiteSynth::new(WhiteParams {
            amplitude: self.params.amplitude,
        });
        let mut output = white.synthesize(num_samples, rng);

        for (i, sample) in output.iter_mut().enumerate() {
            if i % 4 == 0 {
                *sample *= self.params.low_freq_factor;
            } else if i % 3 == 0 {
                *sample *= self.params.mid_freq_factor;
            } else if i % 2 == 0 {
                *sample *= self.params.high_freq_factor;
            }
        }

        output
    }
}
