//! Cell generation: validate, sample, extract.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ generate_cell(origin, cell_config, noise_config)                        │
//! │                                                                         │
//! │  CellConfig::validate + NoiseField::new     ── ConfigError, no work     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Lattice::sample(origin, cell_config, field)  (resolution+1)³ samples   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  marching::extract(lattice, cell_config)      resolution³ cubes         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  CellMesh { origin, vertices, normals, indices, bounds, stats }         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call is independent. The lattice lives only for the duration of the
//! call and nothing is cached between calls.

use glam::Vec3;
use rayon::prelude::*;
use web_time::Instant;

use crate::cancel::CancelToken;
use crate::config::{CellConfig, NoiseConfig};
use crate::error::{ConfigError, GenerateError};
use crate::lattice::Lattice;
use crate::marching;
use crate::noise::{DensityField, NoiseField};
use crate::types::CellMesh;

/// Validated cell layout paired with its noise field.
///
/// Validation happens once in [`CellGenerator::new`], so generation through
/// the handle cannot fail except by cancellation.
#[derive(Clone, Debug)]
pub struct CellGenerator {
  config: CellConfig,
  field: NoiseField,
}

impl CellGenerator {
  pub fn new(config: CellConfig, noise: NoiseConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    let field = NoiseField::new(noise)?;
    Ok(Self { config, field })
  }

  pub fn config(&self) -> &CellConfig {
    &self.config
  }

  pub fn field(&self) -> &NoiseField {
    &self.field
  }

  /// Mesh the cell whose minimum corner sits at `origin`.
  pub fn generate(&self, origin: Vec3) -> CellMesh {
    mesh_field(origin, &self.config, &self.field)
  }

  pub fn generate_cancellable(
    &self,
    origin: Vec3,
    cancel: &CancelToken,
  ) -> Result<CellMesh, GenerateError> {
    run(origin, &self.config, &self.field, cancel)
  }

  /// Mesh many cells in parallel. Results keep the order of `origins`.
  pub fn generate_batch(&self, origins: &[Vec3]) -> Vec<CellMesh> {
    if origins.is_empty() {
      return Vec::new();
    }

    origins.par_iter().map(|&origin| self.generate(origin)).collect()
  }
}

/// Generate one cell of layered Perlin terrain.
///
/// Both configs are validated before any sampling, so an error never comes
/// with a partial mesh.
#[tracing::instrument(skip_all, name = "cell::generate", fields(origin = ?origin, resolution = cell_config.resolution))]
pub fn generate_cell(
  origin: Vec3,
  cell_config: &CellConfig,
  noise_config: &NoiseConfig,
) -> Result<CellMesh, GenerateError> {
  let generator = CellGenerator::new(cell_config.clone(), noise_config.clone())?;
  Ok(generator.generate(origin))
}

/// [`generate_cell`] over an arbitrary density field.
pub fn generate_cell_with<F: DensityField + ?Sized>(
  origin: Vec3,
  cell_config: &CellConfig,
  field: &F,
) -> Result<CellMesh, GenerateError> {
  cell_config.validate()?;
  Ok(mesh_field(origin, cell_config, field))
}

/// [`generate_cell_with`] that stops early once `cancel` is set.
pub fn generate_cell_cancellable<F: DensityField + ?Sized>(
  origin: Vec3,
  cell_config: &CellConfig,
  field: &F,
  cancel: &CancelToken,
) -> Result<CellMesh, GenerateError> {
  cell_config.validate()?;
  run(origin, cell_config, field, cancel)
}

/// Generate many cells sharing one configuration, in parallel.
///
/// Results maintain the same order as `origins`.
#[tracing::instrument(skip_all, name = "cell::generate_batch", fields(cells = origins.len()))]
pub fn generate_cells(
  origins: &[Vec3],
  cell_config: &CellConfig,
  noise_config: &NoiseConfig,
) -> Result<Vec<CellMesh>, GenerateError> {
  let generator = CellGenerator::new(cell_config.clone(), noise_config.clone())?;
  Ok(generator.generate_batch(origins))
}

/// Pipeline over an already validated config.
fn mesh_field<F: DensityField + ?Sized>(origin: Vec3, config: &CellConfig, field: &F) -> CellMesh {
  let start = Instant::now();
  let lattice = Lattice::sample(origin, config, field);
  let mut mesh = marching::extract(&lattice, config);
  finish(&mut mesh, origin, start);
  mesh
}

/// Cancellable [`mesh_field`].
fn run<F: DensityField + ?Sized>(
  origin: Vec3,
  config: &CellConfig,
  field: &F,
  cancel: &CancelToken,
) -> Result<CellMesh, GenerateError> {
  if cancel.is_cancelled() {
    return Err(GenerateError::Cancelled);
  }

  let start = Instant::now();
  let lattice = Lattice::sample(origin, config, field);
  let mut mesh = marching::extract_cancellable(&lattice, config, cancel)?;
  finish(&mut mesh, origin, start);
  Ok(mesh)
}

fn finish(mesh: &mut CellMesh, origin: Vec3, start: Instant) {
  mesh.origin = origin;
  mesh.stats.timing_us = start.elapsed().as_micros() as u64;

  tracing::debug!(
    samples = mesh.stats.sample_count,
    cubes = mesh.stats.cube_count,
    triangles = mesh.stats.triangle_count,
    timing_us = mesh.stats.timing_us,
    "cell generated"
  );
}

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;
