//! Cell and noise configuration.
//!
//! Both configs are plain values handed to the generator per call. Nothing in
//! the crate keeps a reference to them after the call returns, so a host is
//! free to mutate its copy between generations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ConfigError};

/// Resolution above which sampling and meshing get noticeably expensive on
/// the CPU. Larger values are accepted but logged.
pub const PRACTICAL_MAX_RESOLUTION: u32 = 64;

/// Order in which emitted vertices are referenced by the index buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindingOrder {
  /// `indices[i] = n - 1 - i`. Flips every triangle relative to table order.
  /// Face normals point toward the active (above iso level) side.
  #[default]
  Reversed,

  /// `indices[i] = i`. Face normals point toward the inactive side.
  TableOrder,
}

/// Placement of a vertex along a crossing edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EdgePlacement {
  /// Linear root of the two corner densities against the iso level.
  #[default]
  Interpolated,

  /// Geometric midpoint of the edge, ignoring densities.
  Midpoint,
}

/// Basis function sampled by each noise layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NoiseBasis {
  /// Average of six 2D Perlin evaluations over every ordered axis pair.
  #[default]
  PairwisePerlin,

  /// Conventional 3D Perlin noise.
  Perlin3d,
}

/// Spatial layout of one cell and its surface threshold.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CellConfig {
  /// Edge length of the cell in world units.
  pub extent: f32,

  /// Cubes per axis. The lattice holds `resolution + 1` samples per axis.
  pub resolution: u32,

  /// Density threshold. Samples strictly above it are active.
  pub iso_level: f32,

  pub winding: WindingOrder,

  pub edge_placement: EdgePlacement,
}

impl Default for CellConfig {
  fn default() -> Self {
    Self {
      extent: 64.0,
      resolution: 16,
      iso_level: 0.5,
      winding: WindingOrder::default(),
      edge_placement: EdgePlacement::default(),
    }
  }
}

impl CellConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_extent(mut self, extent: f32) -> Self {
    self.extent = extent;
    self
  }

  pub fn with_resolution(mut self, resolution: u32) -> Self {
    self.resolution = resolution;
    self
  }

  pub fn with_iso_level(mut self, iso_level: f32) -> Self {
    self.iso_level = iso_level;
    self
  }

  pub fn with_winding(mut self, winding: WindingOrder) -> Self {
    self.winding = winding;
    self
  }

  pub fn with_edge_placement(mut self, placement: EdgePlacement) -> Self {
    self.edge_placement = placement;
    self
  }

  /// Distance between adjacent lattice samples.
  #[inline]
  pub fn step_size(&self) -> f32 {
    self.extent / self.resolution as f32
  }

  /// Samples per lattice axis (`resolution + 1`).
  #[inline]
  pub fn samples_per_axis(&self) -> usize {
    self.resolution as usize + 1
  }

  /// Total number of lattice samples.
  #[inline]
  pub fn sample_count(&self) -> usize {
    self.samples_per_axis().pow(3)
  }

  /// Total number of cubes marched.
  #[inline]
  pub fn cube_count(&self) -> usize {
    (self.resolution as usize).pow(3)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.resolution < 1 {
      return Err(ConfigError::ResolutionTooSmall(self.resolution));
    }
    ensure_finite("extent", self.extent)?;
    if self.extent <= 0.0 {
      return Err(ConfigError::NonPositiveExtent(self.extent));
    }
    ensure_finite("iso_level", self.iso_level)?;

    if self.resolution > PRACTICAL_MAX_RESOLUTION {
      tracing::warn!(
        resolution = self.resolution,
        cap = PRACTICAL_MAX_RESOLUTION,
        "cell resolution above practical cap, generation will be slow"
      );
    }
    Ok(())
  }
}

/// Shape of the layered density field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NoiseConfig {
  /// Multiplier on the final density.
  pub strength: f32,

  /// Base frequency multiplier. Larger values give smaller features.
  pub scale: f32,

  /// Number of octaves summed.
  pub layers: u32,

  /// Frequency multiplier of the first layer.
  pub roughness: f32,

  /// Frequency multiplier between consecutive layers (lacunarity).
  pub roughness_gain: f32,

  /// Amplitude multiplier between consecutive layers (persistence).
  pub amplitude_gain: f32,

  pub seed: u32,

  pub basis: NoiseBasis,
}

impl Default for NoiseConfig {
  fn default() -> Self {
    Self {
      strength: 1.0,
      scale: 1.0,
      layers: 1,
      roughness: 1.0,
      roughness_gain: 2.0,
      amplitude_gain: 0.5,
      seed: 0,
      basis: NoiseBasis::default(),
    }
  }
}

impl NoiseConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_strength(mut self, strength: f32) -> Self {
    self.strength = strength;
    self
  }

  pub fn with_scale(mut self, scale: f32) -> Self {
    self.scale = scale;
    self
  }

  pub fn with_layers(mut self, layers: u32) -> Self {
    self.layers = layers;
    self
  }

  pub fn with_roughness(mut self, roughness: f32) -> Self {
    self.roughness = roughness;
    self
  }

  pub fn with_roughness_gain(mut self, gain: f32) -> Self {
    self.roughness_gain = gain;
    self
  }

  pub fn with_amplitude_gain(mut self, gain: f32) -> Self {
    self.amplitude_gain = gain;
    self
  }

  pub fn with_seed(mut self, seed: u32) -> Self {
    self.seed = seed;
    self
  }

  pub fn with_basis(mut self, basis: NoiseBasis) -> Self {
    self.basis = basis;
    self
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.layers < 1 {
      return Err(ConfigError::NoLayers(self.layers));
    }
    ensure_finite("strength", self.strength)?;
    ensure_finite("scale", self.scale)?;
    ensure_finite("roughness", self.roughness)?;
    ensure_finite("roughness_gain", self.roughness_gain)?;
    ensure_finite("amplitude_gain", self.amplitude_gain)?;
    Ok(())
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
