//! Shared fixtures for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use glam::Vec3;

use crate::config::CellConfig;
use crate::lattice::Lattice;
use crate::noise::DensityField;
use crate::tables::CORNER_OFFSETS;

/// Density field wrapper that counts evaluations.
pub struct CountingField<F> {
  inner: F,
  calls: AtomicUsize,
}

impl<F> CountingField<F>
where
  F: Fn(Vec3) -> f32 + Send + Sync,
{
  pub fn new(inner: F) -> Self {
    Self {
      inner,
      calls: AtomicUsize::new(0),
    }
  }

  pub fn count(&self) -> usize {
    self.calls.load(Ordering::Relaxed)
  }
}

impl<F> DensityField for CountingField<F>
where
  F: Fn(Vec3) -> f32 + Send + Sync,
{
  fn evaluate(&self, world_position: Vec3) -> f32 {
    self.calls.fetch_add(1, Ordering::Relaxed);
    (self.inner)(world_position)
  }
}

/// Component-wise float comparison.
pub fn approx_eq(a: [f32; 3], b: [f32; 3], eps: f32) -> bool {
  a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= eps)
}

/// Unit cell with a single cube whose corner `i` has `densities[i]`.
pub fn single_cube_lattice(densities: [f32; 8]) -> Lattice {
  let config = CellConfig::new().with_resolution(1).with_extent(1.0);

  let mut ordered = [0.0f32; 8];
  for (corner, &[x, y, z]) in CORNER_OFFSETS.iter().enumerate() {
    ordered[(x * 2 + y) * 2 + z] = densities[corner];
  }

  Lattice::from_densities(Vec3::ZERO, &config, &ordered)
}

/// Density rising along +Z that crosses the default iso level (0.5) at
/// `z = height`. Everything above the plane is active.
pub fn plane_field(height: f32) -> impl Fn(Vec3) -> f32 + Send + Sync {
  move |p: Vec3| p.z - height + 0.5
}
