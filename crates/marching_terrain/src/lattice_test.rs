use std::sync::atomic::{AtomicUsize, Ordering};

use glam::Vec3;

use super::*;
use crate::config::CellConfig;
use crate::test_utils::CountingField;

#[test]
fn test_sample_count_is_resolution_plus_one_cubed() {
  for resolution in [1u32, 2, 3, 7, 16] {
    let config = CellConfig::new().with_resolution(resolution).with_extent(8.0);
    let lattice = Lattice::sample(Vec3::ZERO, &config, &|_: Vec3| 0.0);

    let n = resolution as usize + 1;
    assert_eq!(lattice.samples_per_axis(), n);
    assert_eq!(lattice.resolution(), resolution as usize);
    assert_eq!(lattice.len(), n * n * n);
  }
}

#[test]
fn test_each_point_evaluated_once() {
  let config = CellConfig::new().with_resolution(6);
  let field = CountingField::new(|p: Vec3| p.x);

  let lattice = Lattice::sample(Vec3::ZERO, &config, &field);

  assert_eq!(field.count(), lattice.len());
}

#[test]
fn test_positions_follow_step_size() {
  let origin = Vec3::new(100.0, -20.0, 5.0);
  let config = CellConfig::new().with_extent(10.0).with_resolution(4);
  let lattice = Lattice::sample(origin, &config, &|_: Vec3| 0.0);

  let sample = lattice.get(1, 2, 3);
  assert_eq!(sample.local_position, Vec3::new(2.5, 5.0, 7.5));
  assert_eq!(sample.world_position, origin + Vec3::new(2.5, 5.0, 7.5));

  // Far corner lands exactly on the cell extent
  let far = lattice.get(4, 4, 4);
  assert_eq!(far.local_position, Vec3::splat(10.0));
}

#[test]
fn test_density_evaluated_at_world_position() {
  let origin = Vec3::new(3.0, 0.0, 0.0);
  let config = CellConfig::new().with_extent(2.0).with_resolution(2);
  let lattice = Lattice::sample(origin, &config, &|p: Vec3| p.x * 100.0 + p.y * 10.0 + p.z);

  for sample in lattice.samples() {
    let p = sample.world_position;
    assert_eq!(sample.density, p.x * 100.0 + p.y * 10.0 + p.z);
  }
  assert_eq!(lattice.get(0, 0, 0).density, 300.0);
  assert_eq!(lattice.get(2, 1, 0).density, 510.0);
}

#[test]
fn test_index_layout_is_x_major() {
  let config = CellConfig::new().with_resolution(3);
  let lattice = Lattice::sample(Vec3::ZERO, &config, &|_: Vec3| 0.0);

  assert_eq!(lattice.index(0, 0, 1), 1);
  assert_eq!(lattice.index(0, 1, 0), 4);
  assert_eq!(lattice.index(1, 0, 0), 16);
}

#[test]
fn test_index_roundtrip() {
  let n = 5;
  for index in 0..n * n * n {
    let (x, y, z) = index_to_coord(index, n);
    assert_eq!(coord_to_index(x, y, z, n), index);
  }
}

#[test]
fn test_from_densities_matches_sampling() {
  let origin = Vec3::new(1.0, 2.0, 3.0);
  let config = CellConfig::new().with_extent(4.0).with_resolution(2);
  let field = |p: Vec3| p.x - p.y * p.z;

  let sampled = Lattice::sample(origin, &config, &field);
  let densities: Vec<f32> = sampled.samples().iter().map(|s| s.density).collect();
  let rebuilt = Lattice::from_densities(origin, &config, &densities);

  assert_eq!(sampled.samples(), rebuilt.samples());
}

#[test]
#[should_panic(expected = "expected 27 densities")]
fn test_from_densities_rejects_wrong_length() {
  let config = CellConfig::new().with_resolution(2);
  Lattice::from_densities(Vec3::ZERO, &config, &[0.0; 8]);
}

#[test]
fn test_parallel_sampling_is_deterministic() {
  let config = CellConfig::new().with_resolution(12);
  let calls = AtomicUsize::new(0);
  let field = |p: Vec3| {
    calls.fetch_add(1, Ordering::Relaxed);
    (p.x * 0.37).sin() + (p.y * 0.11).cos() * p.z
  };

  let a = Lattice::sample(Vec3::ZERO, &config, &field);
  let b = Lattice::sample(Vec3::ZERO, &config, &field);

  assert_eq!(a.samples(), b.samples());
  assert_eq!(calls.load(Ordering::Relaxed), 2 * a.len());
}
