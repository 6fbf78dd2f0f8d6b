use super::*;
use crate::test_utils::approx_eq;

#[test]
fn test_single_triangle_face_normal() {
  let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
  let normals = recalculate(&positions, &[0, 1, 2]);

  for n in &normals {
    assert!(approx_eq(*n, [0.0, 0.0, 1.0], 1e-6), "{:?}", n);
  }
}

#[test]
fn test_reversed_winding_flips_normal() {
  let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
  let normals = recalculate(&positions, &[2, 1, 0]);

  for n in &normals {
    assert!(approx_eq(*n, [0.0, 0.0, -1.0], 1e-6), "{:?}", n);
  }
}

#[test]
fn test_degenerate_triangle_falls_back_to_up() {
  let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
  let normals = recalculate(&positions, &[0, 1, 2]);

  assert_eq!(normals, vec![FALLBACK_NORMAL; 3]);
}

#[test]
fn test_coincident_vertices_fall_back_to_up() {
  let positions = [[0.5, 0.5, 0.5]; 3];
  assert_eq!(recalculate(&positions, &[0, 1, 2]), vec![FALLBACK_NORMAL; 3]);
}

#[test]
fn test_tiny_triangle_keeps_its_normal() {
  let s = 1e-6;
  let positions = [[0.0, 0.0, 0.0], [s, 0.0, 0.0], [0.0, s, 0.0]];
  let normals = recalculate(&positions, &[0, 1, 2]);

  for n in &normals {
    assert!(approx_eq(*n, [0.0, 0.0, 1.0], 1e-5), "{:?}", n);
  }
}

#[test]
fn test_each_triangle_owns_its_vertices() {
  // Two faces of a right-angle fold, no shared vertices
  let positions = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
  ];
  let normals = recalculate(&positions, &[0, 1, 2, 3, 4, 5]);

  for n in &normals[..3] {
    assert!(approx_eq(*n, [0.0, 0.0, 1.0], 1e-6), "{:?}", n);
  }
  for n in &normals[3..] {
    assert!(approx_eq(*n, [0.0, 1.0, 0.0], 1e-6), "{:?}", n);
  }
}

#[test]
fn test_normals_are_unit_length() {
  let positions = [[0.0, 0.0, 0.0], [3.0, 0.5, 0.0], [0.2, 2.0, 1.0]];
  for n in recalculate(&positions, &[0, 1, 2]) {
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    assert!((len - 1.0).abs() < 1e-5);
  }
}
