//! Density lattice for one cell.
//!
//! # Layout
//!
//! ```text
//! resolution = 4  →  5 samples per axis, 4 cubes per axis
//!
//!   sample:  0     1     2     3     4
//!            ●─────●─────●─────●─────●
//!   cube:       0     1     2     3
//!
//! local  = (i, j, k) * step_size          step_size = extent / resolution
//! world  = origin + local
//! ```
//!
//! Samples are stored row-major with X as the major axis and Z as the minor
//! axis:
//!
//! ```text
//! index = (x * n + y) * n + z      n = resolution + 1
//! ```
//!
//! Every sample is evaluated exactly once. Cubes read their corners by index
//! and never touch the density field.

use glam::Vec3;
use rayon::prelude::*;

use crate::config::CellConfig;
use crate::noise::DensityField;

/// One lattice point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeSample {
  /// Position relative to the cell origin.
  pub local_position: Vec3,
  pub world_position: Vec3,
  pub density: f32,
}

/// `(resolution + 1)³` samples of a density field over one cell.
#[derive(Clone, Debug)]
pub struct Lattice {
  samples: Vec<LatticeSample>,
  samples_per_axis: usize,
}

impl Lattice {
  /// Sample `field` over the cell at `origin`.
  ///
  /// `config` must already be validated; a zero resolution yields a single
  /// sample and no cubes.
  #[tracing::instrument(skip_all, name = "lattice::sample", fields(resolution = config.resolution))]
  pub fn sample<F: DensityField + ?Sized>(origin: Vec3, config: &CellConfig, field: &F) -> Self {
    let n = config.samples_per_axis();
    let step = config.step_size();

    let samples = (0..n * n * n)
      .into_par_iter()
      .map(|index| {
        let (x, y, z) = index_to_coord(index, n);
        let local_position = Vec3::new(x as f32, y as f32, z as f32) * step;
        let world_position = origin + local_position;
        LatticeSample {
          local_position,
          world_position,
          density: field.evaluate(world_position),
        }
      })
      .collect();

    Self {
      samples,
      samples_per_axis: n,
    }
  }

  /// Build a lattice from precomputed densities laid out in lattice order.
  ///
  /// Panics if `densities.len()` is not `(resolution + 1)³`.
  pub fn from_densities(origin: Vec3, config: &CellConfig, densities: &[f32]) -> Self {
    let n = config.samples_per_axis();
    assert_eq!(
      densities.len(),
      n * n * n,
      "expected {} densities for resolution {}",
      n * n * n,
      config.resolution
    );
    let step = config.step_size();

    let samples = densities
      .iter()
      .enumerate()
      .map(|(index, &density)| {
        let (x, y, z) = index_to_coord(index, n);
        let local_position = Vec3::new(x as f32, y as f32, z as f32) * step;
        LatticeSample {
          local_position,
          world_position: origin + local_position,
          density,
        }
      })
      .collect();

    Self {
      samples,
      samples_per_axis: n,
    }
  }

  #[inline]
  pub fn samples_per_axis(&self) -> usize {
    self.samples_per_axis
  }

  /// Cubes per axis.
  #[inline]
  pub fn resolution(&self) -> usize {
    self.samples_per_axis - 1
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.samples.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.samples.is_empty()
  }

  #[inline]
  pub fn samples(&self) -> &[LatticeSample] {
    &self.samples
  }

  /// Linear index of lattice coordinate `(x, y, z)`.
  #[inline(always)]
  pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
    coord_to_index(x, y, z, self.samples_per_axis)
  }

  /// Sample at lattice coordinate `(x, y, z)`.
  #[inline]
  pub fn get(&self, x: usize, y: usize, z: usize) -> &LatticeSample {
    &self.samples[self.index(x, y, z)]
  }
}

/// Convert 3D lattice coordinates to a linear index.
#[inline(always)]
pub const fn coord_to_index(x: usize, y: usize, z: usize, n: usize) -> usize {
  (x * n + y) * n + z
}

/// Convert a linear index back to lattice coordinates.
#[inline(always)]
pub const fn index_to_coord(index: usize, n: usize) -> (usize, usize, usize) {
  let x = index / (n * n);
  let y = (index / n) % n;
  let z = index % n;
  (x, y, z)
}

#[cfg(test)]
#[path = "lattice_test.rs"]
mod lattice_test;
