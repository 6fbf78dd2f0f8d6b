//! Layered noise density field.

use glam::Vec3;
use ::noise::Perlin;

use super::{pairwise_perlin, perlin_3d, DensityField, NoiseBasis, SAMPLE_FREQUENCY};
use crate::config::NoiseConfig;
use crate::error::ConfigError;

/// Fractal sum of Perlin layers.
///
/// ```text
/// q = p * SAMPLE_FREQUENCY
/// value = strength * Σ amplitude_i * basis(q * frequency_i) / Σ |amplitude_i|
///
/// frequency_0 = scale * roughness      frequency_i+1 = frequency_i * roughness_gain
/// amplitude_0 = 1                      amplitude_i+1 = amplitude_i * amplitude_gain
/// ```
///
/// With the default config this is a single `basis(q)` evaluation.
#[derive(Clone)]
pub struct NoiseField {
  config: NoiseConfig,
  perlin: Perlin,
}

impl NoiseField {
  /// Build a field from a validated copy of `config`.
  pub fn new(config: NoiseConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    let perlin = Perlin::new(config.seed);
    Ok(Self { config, perlin })
  }

  pub fn config(&self) -> &NoiseConfig {
    &self.config
  }

  #[inline]
  fn basis(&self, p: Vec3) -> f32 {
    match self.config.basis {
      NoiseBasis::PairwisePerlin => pairwise_perlin(&self.perlin, p),
      NoiseBasis::Perlin3d => perlin_3d(&self.perlin, p),
    }
  }
}

impl DensityField for NoiseField {
  fn evaluate(&self, world_position: Vec3) -> f32 {
    let q = world_position * SAMPLE_FREQUENCY;

    let mut frequency = self.config.scale * self.config.roughness;
    let mut amplitude = 1.0f32;
    let mut sum = 0.0f32;
    let mut norm = 0.0f32;

    for _ in 0..self.config.layers {
      sum += amplitude * self.basis(q * frequency);
      norm += amplitude.abs();
      frequency *= self.config.roughness_gain;
      amplitude *= self.config.amplitude_gain;
    }

    // First layer contributes |1|, so norm >= 1
    self.config.strength * sum / norm
  }
}

impl std::fmt::Debug for NoiseField {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("NoiseField")
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}
