//! White noise - independent uniform draws, one per sample.

use super::Synthesizer;
use crate::params::WhiteParams;
use crate::rng::RandomSource;

/// White noise synthesizer.
///
/// Every sample is an independent draw scaled to
/// [-amplitude, amplitude]; there is no inter-sample state.
#[derive(Debug, Clone)]
pub struct WhiteSynth {
    /// Tuning parameters.
    pub params: WhiteParams,
}

impl WhiteSynth {
    /// Creates a white noise synthesizer.
    pub fn new(params: WhiteParams) -> Self {
        Self { params }
    }
}

impl Synthesizer for WhiteSynth {
    fn synthesize<R: RandomSource>(&self, num_samples: usize, rng: &mut R) -> Vec<f32> {
        let amplitude = self.params.amplitude;
        (0..num_samples).map(|_| amplitude * rng.next_bipolar()).collect()
    }
}
