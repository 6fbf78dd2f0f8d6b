//! Host-side change detection for a single cell.
//!
//! The generator itself is stateless. Hosts that expose cell and noise
//! settings for live editing poll a [`CellRegenerator`] once per tick; it
//! compares the settings against the snapshot that produced the current mesh
//! and only regenerates when something changed.

use glam::Vec3;

use crate::cell::generate_cell;
use crate::config::{CellConfig, NoiseConfig};
use crate::error::GenerateError;
use crate::types::CellMesh;

/// Result of [`CellRegenerator::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegenOutcome {
  /// Settings changed (or there was no mesh) and a new mesh was built.
  Regenerated,
  /// Settings match the current mesh; nothing was done.
  Unchanged,
}

#[derive(Clone, Debug, PartialEq)]
struct Snapshot {
  origin: Vec3,
  cell: CellConfig,
  noise: NoiseConfig,
}

/// Last generated mesh plus the settings that produced it.
#[derive(Debug, Default)]
pub struct CellRegenerator {
  current: Option<(Snapshot, CellMesh)>,
}

impl CellRegenerator {
  pub fn new() -> Self {
    Self::default()
  }

  /// Regenerate if `origin` or either config differs from the last
  /// successful generation.
  ///
  /// On error the previous mesh is kept, and the next poll retries.
  pub fn poll(
    &mut self,
    origin: Vec3,
    cell: &CellConfig,
    noise: &NoiseConfig,
  ) -> Result<RegenOutcome, GenerateError> {
    let snapshot = Snapshot {
      origin,
      cell: cell.clone(),
      noise: noise.clone(),
    };

    if matches!(&self.current, Some((last, _)) if *last == snapshot) {
      return Ok(RegenOutcome::Unchanged);
    }

    let mesh = generate_cell(origin, cell, noise)?;
    tracing::debug!(
      triangles = mesh.triangle_count(),
      timing_us = mesh.stats.timing_us,
      "cell settings changed, regenerated"
    );
    self.current = Some((snapshot, mesh));
    Ok(RegenOutcome::Regenerated)
  }

  /// Drop the cached mesh. The next poll always regenerates.
  pub fn invalidate(&mut self) {
    self.current = None;
  }

  pub fn mesh(&self) -> Option<&CellMesh> {
    self.current.as_ref().map(|(_, mesh)| mesh)
  }
}

#[cfg(test)]
#[path = "regen_test.rs"]
mod regen_test;
