//! Noise types and their tuning parameters.
//!
//! Each noise color carries a fixed set of compiled-in tuning constants. The
//! parameter structs are serializable so presets can be stored or inspected
//! as JSON, with field-level defaults matching the compiled-in values.

use serde::{Deserialize, Serialize};

/// The closed set of noise colors the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseType {
    /// Deep, rumbling noise with heavy low-frequency weighting.
    Brown,
    /// Equal intensity across all frequencies.
    White,
    /// White noise reweighted toward human hearing perception.
    Grey,
    /// Ocean-like noise with band emphasis and slow periodic swell.
    Green,
}

impl NoiseType {
    /// All noise types, in presentation order.
    pub const ALL: [NoiseType; 4] = [
        NoiseType::Brown,
        NoiseType::White,
        NoiseType::Grey,
        NoiseType::Green,
    ];

    /// Lowercase name, used as the display label and the cache key.
    pub fn label(&self) -> &'static str {
        match self {
            NoiseType::Brown => "brown",
            NoiseType::White => "white",
            NoiseType::Grey => "grey",
            NoiseType::Green => "green",
        }
    }

    /// One-line description for selection UIs.
    pub fn description(&self) -> &'static str {
        match self {
            NoiseType::Brown => "Deep, rumbling noise that reduces higher frequencies",
            NoiseType::White => "Equal intensity across all frequencies",
            NoiseType::Grey => "White noise adjusted to match human hearing perception",
            NoiseType::Green => "Ocean-like waves with gentle, periodic rhythm",
        }
    }

    /// Display color as an RGB triple. A hint for selection UIs only.
    pub fn color(&self) -> [u8; 3] {
        match self {
            NoiseType::Brown => [150, 103, 74],
            NoiseType::White => [255, 255, 255],
            NoiseType::Grey => [142, 142, 147],
            NoiseType::Green => [52, 199, 89],
        }
    }

    /// The compiled-in tuning parameters for this noise type.
    pub fn default_params(&self) -> Params {
        match self {
            NoiseType::Brown => Params::Brown(BrownParams::default()),
            NoiseType::White => Params::White(WhiteParams::default()),
            NoiseType::Grey => Params::Grey(GreyParams::default()),
            NoiseType::Green => Params::Green(GreenParams::default()),
        }
    }
}

/// Tuning parameters for one generation run, tagged by noise type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Params {
    /// Brown noise (leaky integration of white noise).
    Brown(BrownParams),
    /// White noise (independent uniform draws).
    White(WhiteParams),
    /// Grey noise (white noise with positional perceptual weighting).
    Grey(GreyParams),
    /// Green noise (band-weighted, slowly modulated, smoothed).
    Green(GreenParams),
}

impl Params {
    /// The noise type these parameters belong to.
    pub fn noise_type(&self) -> NoiseType {
        match self {
            Params::Brown(_) => NoiseType::Brown,
            Params::White(_) => NoiseType::White,
            Params::Grey(_) => NoiseType::Grey,
            Params::Green(_) => NoiseType::Green,
        }
    }
}

/// Brown noise tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrownParams {
    /// Integration gain applied to each incoming white draw (0.01 to 0.05).
    /// Higher values give a smoother, more bass-weighted sound.
    #[serde(default = "default_last_value_factor")]
    pub last_value_factor: f32,
    /// Decay divisor controlling frequency rolloff (1.01 to 1.04). Higher
    /// values attenuate high frequencies faster.
    #[serde(default = "default_integration_factor")]
    pub integration_factor: f32,
    /// Output gain (1.0 to 5.0). Can push samples beyond unit range; clipping
    /// is applied at the PCM encoding boundary, not here.
    #[serde(default = "default_amplification")]
    pub amplification: f32,
}

fn default_last_value_factor() -> f32 {
    0.04
}

fn default_integration_factor() -> f32 {
    1.03
}

fn default_amplification() -> f32 {
    2.75
}

impl Default for BrownParams {
    fn default() -> Self {
        Self {
            last_value_factor: default_last_value_factor(),
            integration_factor: default_integration_factor(),
            amplification: default_amplification(),
        }
    }
}

/// White noise tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhiteParams {
    /// Peak amplitude of each draw (0.1 to 1.0).
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
}

fn default_amplitude() -> f32 {
    0.6
}

impl Default for WhiteParams {
    fn default() -> Self {
        Self {
            amplitude: default_amplitude(),
        }
    }
}

/// Grey noise tuning.
///
/// The three band factors are applied positionally in an exclusive chain:
/// index divisible by 4 takes the low factor, else divisible by 3 takes the
/// mid factor, else divisible by 2 takes the high factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GreyParams {
    /// Amplitude of the underlying white pass (0.1 to 1.0).
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    /// Low-band multiplier (0.5 to 1.0).
    #[serde(default = "default_grey_low")]
    pub low_freq_factor: f32,
    /// Mid-band multiplier (0.8 to 1.5).
    #[serde(default = "default_grey_mid")]
    pub mid_freq_factor: f32,
    /// High-band multiplier (0.5 to 1.0).
    #[serde(default = "default_grey_high")]
    pub high_freq_factor: f32,
}

fn default_grey_low() -> f32 {
    0.8
}

fn default_grey_mid() -> f32 {
    1.2
}

fn default_grey_high() -> f32 {
    1.0
}

impl Default for GreyParams {
    fn default() -> Self {
        Self {
            amplitude: default_amplitude(),
            low_freq_factor: default_grey_low(),
            mid_freq_factor: default_grey_mid(),
            high_freq_factor: default_grey_high(),
        }
    }
}

/// Green noise tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GreenParams {
    /// Peak amplitude of the base noise floor (0.1 to 0.5).
    #[serde(default = "default_base_factor")]
    pub base_factor: f32,
    /// Multiplier for even indices (1.0 to 2.5). The rumble of the swell.
    #[serde(default = "default_green_low")]
    pub low_freq_factor: f32,
    /// Multiplier for odd indices divisible by 3 (0.8 to 1.5). The wash.
    #[serde(default = "default_green_mid")]
    pub mid_freq_factor: f32,
    /// Samples per modulation cycle unit (500 to 10000). Lower is slower,
    /// longer waves.
    #[serde(default = "default_modulation_speed")]
    pub modulation_speed: f32,
    /// Depth of the sinusoidal amplitude swell (0.1 to 0.5).
    #[serde(default = "default_modulation_depth")]
    pub modulation_depth: f32,
    /// Window size of the trailing moving-average pass.
    #[serde(default = "default_smoothing_window")]
    pub smoothing_window: usize,
}

fn default_base_factor() -> f32 {
    0.3
}

fn default_green_low() -> f32 {
    2.0
}

fn default_green_mid() -> f32 {
    1.5
}

fn default_modulation_speed() -> f32 {
    2000.0
}

fn default_modulation_depth() -> f32 {
    0.1
}

fn default_smoothing_window() -> usize {
    10
}

impl Default for GreenParams {
    fn default() -> Self {
        Self {
            base_factor: default_base_factor(),
            low_freq_factor: default_green_low(),
            mid_freq_factor: default_green_mid(),
            modulation_speed: default_modulation_speed(),
            modulation_depth: default_modulation_depth(),
            smoothing_window: default_smoothing_window(),
        }
    }
}
