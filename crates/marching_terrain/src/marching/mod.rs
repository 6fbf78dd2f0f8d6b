//! Marching cubes surface extraction.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  lattice: (resolution+1)³ samples   - positions + densities     │
//! │  config:  iso level, edge placement, winding                    │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 1: Cube Classification                  │
//! │  For each of resolution³ cubes (one rayon task per x-slab):     │
//! │    Read 8 corner densities by lattice index                     │
//! │    Pack active corners into an 8-bit case index                 │
//! │    Early-out if homogeneous (case == 0 or case == 255)          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 2: Triangle Emission                    │
//! │    Look up TRIANGLE_TABLE[case]                                 │
//! │    Place one new vertex per listed edge                         │
//! │    Every 3 vertices form a triangle, in table order             │
//! │  Slabs are concatenated in x order (deterministic output)       │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 3: Indices + Normals                    │
//! │  Reversed:   indices[i] = n - 1 - i                             │
//! │  TableOrder: indices[i] = i                                     │
//! │  Normals recomputed from the indexed triangles                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod cube;
pub mod normals;

use rayon::prelude::*;

pub use cube::{case_index, interpolate_edge, MarchingCube};

use crate::cancel::CancelToken;
use crate::config::{CellConfig, WindingOrder};
use crate::error::GenerateError;
use crate::lattice::Lattice;
use crate::types::{CellMesh, GenerationStats, MinMaxAABB};

/// Geometry emitted by one x-slab of cubes.
#[derive(Default)]
struct SlabOutput {
  vertices: Vec<[f32; 3]>,
  active_cubes: usize,
}

/// Extract the iso-surface of `lattice` as an unindexed triangle mesh.
///
/// The returned mesh has a zero origin and no timing; [`crate::cell`] fills
/// those in.
pub fn extract(lattice: &Lattice, config: &CellConfig) -> CellMesh {
  // Only cancellation can fail, and there is no token here
  extract_slabs(lattice, config, None).unwrap_or_default()
}

/// [`extract`] that gives up with [`GenerateError::Cancelled`] once `cancel`
/// is set. The token is checked before every row of cubes.
pub fn extract_cancellable(
  lattice: &Lattice,
  config: &CellConfig,
  cancel: &CancelToken,
) -> Result<CellMesh, GenerateError> {
  extract_slabs(lattice, config, Some(cancel))
}

#[tracing::instrument(skip_all, name = "marching::extract", fields(resolution = lattice.resolution()))]
fn extract_slabs(
  lattice: &Lattice,
  config: &CellConfig,
  cancel: Option<&CancelToken>,
) -> Result<CellMesh, GenerateError> {
  let resolution = lattice.resolution();

  let slabs: Vec<SlabOutput> = (0..resolution)
    .into_par_iter()
    .map(|x| march_slab(lattice, x, config, cancel))
    .collect::<Result<_, _>>()?;

  let active_cube_count = slabs.iter().map(|s| s.active_cubes).sum();
  let mut vertices = Vec::with_capacity(slabs.iter().map(|s| s.vertices.len()).sum());
  for slab in slabs {
    vertices.extend(slab.vertices);
  }

  let indices = build_indices(vertices.len(), config.winding);
  let normals = normals::recalculate(&vertices, &indices);

  let mut bounds = MinMaxAABB::empty();
  for &v in &vertices {
    bounds.encapsulate(v);
  }

  let stats = GenerationStats {
    sample_count: lattice.len(),
    cube_count: resolution.pow(3),
    active_cube_count,
    triangle_count: indices.len() / 3,
    timing_us: 0,
  };

  tracing::debug!(
    cubes = stats.cube_count,
    active = stats.active_cube_count,
    triangles = stats.triangle_count,
    "extracted surface"
  );

  Ok(CellMesh {
    vertices,
    normals,
    indices,
    bounds,
    stats,
    ..Default::default()
  })
}

/// March every cube with the given x index.
fn march_slab(
  lattice: &Lattice,
  x: usize,
  config: &CellConfig,
  cancel: Option<&CancelToken>,
) -> Result<SlabOutput, GenerateError> {
  let resolution = lattice.resolution();
  let mut out = SlabOutput::default();

  for y in 0..resolution {
    if cancel.is_some_and(CancelToken::is_cancelled) {
      return Err(GenerateError::Cancelled);
    }

    for z in 0..resolution {
      let cube = MarchingCube::new(lattice, x, y, z);
      let case = cube.case_index(config.iso_level);

      if case == 0 || case == 255 {
        continue;
      }

      out.active_cubes += 1;
      out
        .vertices
        .extend(cube.triangle_vertices(config.iso_level, config.edge_placement));
    }
  }

  Ok(out)
}

/// Index buffer for `vertex_count` unshared vertices.
pub fn build_indices(vertex_count: usize, winding: WindingOrder) -> Vec<u32> {
  debug_assert!(vertex_count % 3 == 0);
  debug_assert!(vertex_count <= u32::MAX as usize);

  let n = vertex_count as u32;
  match winding {
    WindingOrder::Reversed => (0..n).rev().collect(),
    WindingOrder::TableOrder => (0..n).collect(),
  }
}
