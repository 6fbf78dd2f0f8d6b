//! Mesh output types.

use glam::Vec3;

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }

  pub fn contains(&self, point: [f32; 3]) -> bool {
    (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Counters and timing for one generation call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
  /// Lattice samples evaluated: `(resolution + 1)³`.
  pub sample_count: usize,
  /// Cubes visited: `resolution³`.
  pub cube_count: usize,
  /// Cubes whose case emitted at least one triangle.
  pub active_cube_count: usize,
  pub triangle_count: usize,
  /// Wall time of the whole call in microseconds.
  pub timing_us: u64,
}

/// Triangle mesh for one cell.
///
/// Vertices are never shared: every triangle owns three consecutive vertex
/// slots, and `normals` runs parallel to `vertices`.
#[derive(Clone, Debug, Default)]
pub struct CellMesh {
  /// World position of the cell's minimum corner. Vertices are relative to it.
  pub origin: Vec3,

  /// Cell-local vertex positions.
  pub vertices: Vec<[f32; 3]>,

  /// Unit normals, one per vertex.
  pub normals: Vec<[f32; 3]>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,

  /// Bounding box of `vertices` (cell-local).
  pub bounds: MinMaxAABB,

  pub stats: GenerationStats,
}

impl CellMesh {
  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Vertex positions for each triangle, in index order.
  pub fn triangles(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
    self.indices.chunks_exact(3).map(|tri| {
      [
        self.vertices[tri[0] as usize],
        self.vertices[tri[1] as usize],
        self.vertices[tri[2] as usize],
      ]
    })
  }

  /// Vertex positions offset by `origin`.
  pub fn world_vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
    self
      .vertices
      .iter()
      .map(move |&v| self.origin + Vec3::from_array(v))
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
