//! Density fields sampled by the lattice.
//!
//! Any `Send + Sync` function of world position can drive the mesher through
//! [`DensityField`]. The stock implementation is [`NoiseField`], layered
//! Perlin noise shaped by a [`NoiseConfig`](crate::NoiseConfig).
//!
//! # Pairwise Perlin
//!
//! The default basis approximates 3D noise by averaging 2D Perlin noise over
//! every ordered pair of axes:
//!
//! ```text
//! (P(x,y) + P(y,z) + P(x,z) + P(y,x) + P(z,y) + P(z,x)) / 6
//! ```
//!
//! Each `P` is remapped from [-1, 1] to [0, 1], so the field sits around 0.5
//! and an iso level of 0.5 cuts through it. [`NoiseBasis::Perlin3d`] swaps in
//! conventional 3D Perlin noise on the same [0, 1] range.

use glam::Vec3;
use ::noise::{NoiseFn, Perlin};

mod field;
pub use field::NoiseField;

pub use crate::config::NoiseBasis;

/// Fixed frequency applied to world positions before any layer scaling.
pub const SAMPLE_FREQUENCY: f32 = 1.0 / 100.0;

/// Scalar field evaluated at world positions.
pub trait DensityField: Send + Sync {
  /// Density at `world_position`. Must be deterministic.
  fn evaluate(&self, world_position: Vec3) -> f32;
}

impl<F> DensityField for F
where
  F: Fn(Vec3) -> f32 + Send + Sync,
{
  #[inline]
  fn evaluate(&self, world_position: Vec3) -> f32 {
    self(world_position)
  }
}

/// 2D Perlin remapped to [0, 1].
#[inline]
fn perlin_2d(perlin: &Perlin, a: f32, b: f32) -> f32 {
  ((perlin.get([a as f64, b as f64]) + 1.0) * 0.5) as f32
}

/// Symmetrized pairwise approximation of 3D Perlin noise, in [0, 1].
pub fn pairwise_perlin(perlin: &Perlin, p: Vec3) -> f32 {
  let Vec3 { x, y, z } = p;
  let sum = perlin_2d(perlin, x, y)
    + perlin_2d(perlin, y, z)
    + perlin_2d(perlin, x, z)
    + perlin_2d(perlin, y, x)
    + perlin_2d(perlin, z, y)
    + perlin_2d(perlin, z, x);
  sum / 6.0
}

/// Conventional 3D Perlin noise remapped to [0, 1].
pub fn perlin_3d(perlin: &Perlin, p: Vec3) -> f32 {
  ((perlin.get([p.x as f64, p.y as f64, p.z as f64]) + 1.0) * 0.5) as f32
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
