//! Vertex normals recomputed from triangle geometry.

use glam::Vec3A;

/// Fallback for vertices of degenerate triangles.
pub const FALLBACK_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];

/// Face normals written to each triangle's vertices.
///
/// Extracted vertices are never shared, so every vertex takes the normal of
/// the one triangle that owns it. Face normals are right-handed,
/// `(p1 - p0) x (p2 - p0)`, so they follow the index winding.
///
/// A triangle counts as degenerate when the sine of its angle at `p0` is
/// below float precision. The test is relative to the edge lengths, so it
/// behaves the same at any cell extent.
pub fn recalculate(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
  let mut normals = vec![FALLBACK_NORMAL; positions.len()];

  for tri in indices.chunks_exact(3) {
    let p0 = Vec3A::from_array(positions[tri[0] as usize]);
    let p1 = Vec3A::from_array(positions[tri[1] as usize]);
    let p2 = Vec3A::from_array(positions[tri[2] as usize]);

    if let Some(normal) = face_normal(p1 - p0, p2 - p0) {
      for &i in tri {
        normals[i as usize] = normal.to_array();
      }
    }
  }

  normals
}

/// Unit normal of the face spanned by `e01` and `e02`, if it has one.
#[inline]
fn face_normal(e01: Vec3A, e02: Vec3A) -> Option<Vec3A> {
  // Unit edges make |cross|² = sin²θ
  let cross = e01.try_normalize()?.cross(e02.try_normalize()?);
  if cross.length_squared() <= f32::EPSILON {
    return None;
  }

  cross.try_normalize()
}

#[cfg(test)]
#[path = "normals_test.rs"]
mod normals_test;
