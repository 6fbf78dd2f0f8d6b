use glam::Vec3;

use super::*;

#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  assert!(!aabb.is_valid());

  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, -2.0, -3.0]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert!(aabb.is_valid());
  assert!(aabb.contains([0.0, 0.0, 0.0]));
  assert!(!aabb.contains([0.0, 2.5, 0.0]));
}

#[test]
fn test_default_mesh_is_empty() {
  let mesh = CellMesh::default();

  assert!(mesh.is_empty());
  assert_eq!(mesh.vertex_count(), 0);
  assert_eq!(mesh.triangle_count(), 0);
  assert_eq!(mesh.triangles().count(), 0);
}

#[test]
fn test_triangles_follow_indices() {
  let mesh = CellMesh {
    vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    indices: vec![2, 1, 0],
    ..Default::default()
  };

  let tris: Vec<_> = mesh.triangles().collect();
  assert_eq!(tris, vec![[[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]]]);
  assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn test_world_vertices_add_origin() {
  let mesh = CellMesh {
    origin: Vec3::new(10.0, 20.0, 30.0),
    vertices: vec![[1.0, 2.0, 3.0]],
    ..Default::default()
  };

  let world: Vec<_> = mesh.world_vertices().collect();
  assert_eq!(world, vec![Vec3::new(11.0, 22.0, 33.0)]);
}
