//! Green noise - band-weighted noise with a slow swell, meant to evoke surf.
//!
//! Three passes over the buffer:
//! 1. a base floor of uniform draws,
//! 2. positional band weighting plus a slow sinusoidal amplitude swell,
//! 3. a trailing moving average that takes the edge off.
//!
//! The weighting chain here has two arms (divisible by 2, else divisible
//! by 3), so even indices never receive the mid boost. That asymmetry with
//! grey noise is intentional observed behavior; do not "fix" it.

use std::f32::consts::TAU;

use super::Synthesizer;
use crate::params::GreenParams;
use crate::rng::RandomSource;

/// Green noise synthesizer.
#[derive(Debug, Clone)]
pub struct GreenSynth {
    /// Tuning parameters.
    pub params: GreenParams,
}

impl GreenSynth {
    /// Creates a green noise synthesizer.
    pub fn new(params: GreenParams) -> Self {
        Self { params }
    }
}

impl Synthesizer for GreenSynth {
    fn synthesize<R: RandomSource>(&self, num_samples: usize, rng: &mut R) -> Vec<f32> {
        let p = &self.params;

        // Pass 1: base noise floor.
        let mut output: Vec<f32> = (0..num_samples)
            .map(|_| p.base_factor * rng.next_bipolar())
            .collect();

        // Pass 2: band weighting, then the swell.
        for (i, sample) in output.iter_mut().enumerate() {
            if i % 2 == 0 {
                *sample *= p.low_freq_factor;
            } else if i % 3 == 0 {
                *sample *= p.mid_freq_factor;
            }

            let swell = (i as f32 / p.modulation_speed * TAU).sin();
            *sample *= 1.0 + swell * p.modulation_depth;
        }

        // Pass 3: smoothing.
        smooth(&mut output, p.smoothing_window);

        output
    }
}

/// Trailing moving average over the pre-smoothing values.
///
/// Each index `i >= window` becomes the mean of the pre-smoothing samples
/// `[i - window + 1 ..= i]`; earlier indices copy through unchanged. The
/// window always reads the unsmoothed values, so results never compound.
fn smooth(samples: &mut [f32], window: usize) {
    if window == 0 || samples.len() <= window {
        return;
    }

    let pre = samples.to_vec();
    for i in window..samples.len() {
        let sum: f32 = pre[i + 1 - window..=i].iter().sum();
        samples[i] = sum / window as f32;
    }
}
