//! Brown noise - first-order leaky integration of white noise.
//!
//! Integrating uniform draws with a decay produces a 1/f^2-like spectrum:
//! deep rumble with steeply attenuated highs. The recursion makes each
//! output sample depend on the previous integrator state, so buffers are
//! generated strictly in sample order; this is part of the contract, not an
//! implementation detail.

use super::Synthesizer;
use crate::params::BrownParams;
use crate::rng::RandomSource;

/// The sequential accumulator for the brown noise recursion.
///
/// Kept separate from the synthesizer so the exact per-sample formula can be
/// unit-tested in isolation: for each white draw `w`,
/// `last = (last + last_value_factor * w) / integration_factor`, and the
/// output sample is `last * amplification`.
#[derive(Debug, Clone)]
pub struct BrownIntegrator {
    params: BrownParams,
    last_value: f32,
}

impl BrownIntegrator {
    /// Creates an integrator with state initialized to zero.
    pub fn new(params: BrownParams) -> Self {
        Self {
            params,
            last_value: 0.0,
        }
    }

    /// Advances the integrator by one white draw, returning the output sample.
    pub fn advance(&mut self, white: f32) -> f32 {
        self.last_value = (self.last_value + self.params.last_value_factor * white)
            / self.params.integration_factor;
        self.last_value * self.params.amplification
    }

    /// Current integrator state, before amplification.
    pub fn last_value(&self) -> f32 {
        self.last_value
    }
}

/// Brown noise synthesizer.
#[derive(Debug, Clone)]
pub struct BrownSynth {
    /// Tuning parameters.
    pub params: BrownParams,
}

impl BrownSynth {
    /// Creates a brown noise synthesizer.
    pub fn new(params: BrownParams) -> Self {
        Self { params }
    }
}

impl Synthesizer for BrownSynth {
    fn synthesize<R: RandomSource>(&self, num_samples: usize, rng: &mut R) -> Vec<f32> {
        let mut integrator = BrownIntegrator::new(self.params);
        let mut output = Vec::with_capacity(num_samples);

        for _ in 0..num_samples {
            output.push(integrator.advance(rng.next_bipolar()));
        }

        output
    }
}
