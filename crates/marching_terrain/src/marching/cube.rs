//! One marching cube: a borrowed view of 8 lattice samples.
//!
//! The cube stores lattice indices only. Corner positions and densities are
//! read from the lattice on demand, so neighbouring cubes share sample data
//! without copying or re-evaluating the field.

use glam::Vec3;
use smallvec::SmallVec;

use crate::config::EdgePlacement;
use crate::lattice::{Lattice, LatticeSample};
use crate::tables::{triangle_edges, CORNER_OFFSETS, EDGE_CORNERS, EDGE_TABLE};

/// Vertices emitted by a single cube (at most 5 triangles).
pub type CubeVertices = SmallVec<[[f32; 3]; 15]>;

/// Cube at lattice index `(x, y, z)`, spanning `(x..=x+1, y..=y+1, z..=z+1)`.
#[derive(Clone, Copy, Debug)]
pub struct MarchingCube<'a> {
  lattice: &'a Lattice,
  corners: [usize; 8],
}

impl<'a> MarchingCube<'a> {
  /// Borrow the cube at `(x, y, z)`. Each coordinate must be below the
  /// lattice resolution.
  #[inline]
  pub fn new(lattice: &'a Lattice, x: usize, y: usize, z: usize) -> Self {
    let resolution = lattice.resolution();
    debug_assert!(
      x < resolution && y < resolution && z < resolution,
      "cube ({}, {}, {}) outside resolution {}",
      x,
      y,
      z,
      resolution
    );

    let corners = CORNER_OFFSETS.map(|[dx, dy, dz]| lattice.index(x + dx, y + dy, z + dz));
    Self { lattice, corners }
  }

  /// Lattice sample at corner `i` (0-7).
  #[inline]
  pub fn corner(&self, i: usize) -> &'a LatticeSample {
    &self.lattice.samples()[self.corners[i]]
  }

  #[inline]
  pub fn densities(&self) -> [f32; 8] {
    std::array::from_fn(|i| self.corner(i).density)
  }

  /// Cell-local corner positions.
  #[inline]
  pub fn positions(&self) -> [Vec3; 8] {
    std::array::from_fn(|i| self.corner(i).local_position)
  }

  #[inline]
  pub fn case_index(&self, iso_level: f32) -> u8 {
    case_index(&self.densities(), iso_level)
  }

  /// 12-bit mask of edges crossing the iso level.
  #[inline]
  pub fn crossing_edges(&self, iso_level: f32) -> u16 {
    EDGE_TABLE[self.case_index(iso_level) as usize]
  }

  /// Cell-local point where the surface crosses `edge`.
  ///
  /// Panics if `edge` is not in 0..12.
  pub fn edge_point(&self, edge: usize, iso_level: f32, placement: EdgePlacement) -> Vec3 {
    assert!(edge < 12, "edge index {} out of range 0..12", edge);

    let [a, b] = EDGE_CORNERS[edge];
    let c0 = self.corner(a as usize);
    let c1 = self.corner(b as usize);

    match placement {
      EdgePlacement::Interpolated => interpolate_edge(
        c0.local_position,
        c0.density,
        c1.local_position,
        c1.density,
        iso_level,
      ),
      EdgePlacement::Midpoint => midpoint(c0.local_position, c1.local_position),
    }
  }

  /// Triangle vertices for this cube in table order, three per triangle.
  pub fn triangle_vertices(&self, iso_level: f32, placement: EdgePlacement) -> CubeVertices {
    triangle_edges(self.case_index(iso_level))
      .iter()
      .map(|&edge| self.edge_point(edge as usize, iso_level, placement).to_array())
      .collect()
  }
}

/// Pack corner activity into a case index.
///
/// Corner `i` is active when its density is strictly above `iso_level` and
/// maps to bit `i`. Corners are folded from 7 down to 0, shifting left each
/// time, so corner 0 ends up in the least significant bit.
#[inline]
pub fn case_index(densities: &[f32; 8], iso_level: f32) -> u8 {
  densities
    .iter()
    .rev()
    .fold(0u8, |case, &density| (case << 1) | (density > iso_level) as u8)
}

/// Linear root of the density along an edge.
///
/// ```text
/// t = (iso - d0) / (d1 - d0),   clamped to [0, 1]
/// p = p0 + t * (p1 - p0)
/// ```
///
/// Equal densities have no root; the edge midpoint is returned instead.
#[inline]
pub fn interpolate_edge(p0: Vec3, d0: f32, p1: Vec3, d1: f32, iso_level: f32) -> Vec3 {
  if d0 == d1 {
    tracing::trace!(density = d0, "flat edge, using midpoint");
    return midpoint(p0, p1);
  }

  let t = ((iso_level - d0) / (d1 - d0)).clamp(0.0, 1.0);
  p0.lerp(p1, t)
}

/// Midpoint of a cell edge, taken along the edge so large extents do not
/// overflow.
#[inline]
fn midpoint(p0: Vec3, p1: Vec3) -> Vec3 {
  p0 + (p1 - p0) * 0.5
}

#[cfg(test)]
#[path = "cube_test.rs"]
mod cube_test;
