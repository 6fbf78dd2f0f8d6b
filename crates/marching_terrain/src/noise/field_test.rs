use glam::Vec3;

use super::*;
use crate::config::NoiseConfig;

fn sample_points() -> Vec<Vec3> {
  vec![
    Vec3::new(12.5, 3.25, -40.0),
    Vec3::new(-77.3, 150.1, 9.9),
    Vec3::new(301.0, -2.7, 64.4),
    Vec3::new(0.5, 0.25, 0.125),
  ]
}

#[test]
fn test_origin_is_mid_range() {
  // Perlin is zero on integer lattice points, which remaps to 0.5
  let field = NoiseField::new(NoiseConfig::default()).unwrap();
  assert!((field.evaluate(Vec3::ZERO) - 0.5).abs() < 1e-6);
}

#[test]
fn test_deterministic() {
  let a = NoiseField::new(NoiseConfig::default()).unwrap();
  let b = NoiseField::new(NoiseConfig::default()).unwrap();
  for p in sample_points() {
    assert_eq!(a.evaluate(p).to_bits(), b.evaluate(p).to_bits());
    assert_eq!(a.evaluate(p).to_bits(), a.evaluate(p).to_bits());
  }
}

#[test]
fn test_single_layer_is_scaled_pairwise_perlin() {
  let config = NoiseConfig::default();
  let field = NoiseField::new(config.clone()).unwrap();
  let perlin = ::noise::Perlin::new(config.seed);

  for p in sample_points() {
    let expected = pairwise_perlin(&perlin, p * SAMPLE_FREQUENCY);
    assert!((field.evaluate(p) - expected).abs() < 1e-6);
  }
}

#[test]
fn test_pairwise_is_symmetric_in_axes() {
  // Every ordered pair is included, so permuting the axes changes nothing
  let perlin = ::noise::Perlin::new(3);
  let p = Vec3::new(0.37, 1.91, -2.2);
  let a = pairwise_perlin(&perlin, p);
  let b = pairwise_perlin(&perlin, Vec3::new(p.z, p.x, p.y));
  let c = pairwise_perlin(&perlin, Vec3::new(p.y, p.x, p.z));
  assert!((a - b).abs() < 1e-6);
  assert!((a - c).abs() < 1e-6);
}

#[test]
fn test_values_stay_near_unit_range() {
  for basis in [NoiseBasis::PairwisePerlin, NoiseBasis::Perlin3d] {
    let field = NoiseField::new(NoiseConfig::default().with_basis(basis).with_layers(4)).unwrap();
    for i in 0..200 {
      let t = i as f32 * 7.31;
      let value = field.evaluate(Vec3::new(t, t * 0.5 - 40.0, 90.0 - t));
      assert!(value.is_finite());
      assert!((-0.5..=1.5).contains(&value), "{:?} produced {}", basis, value);
    }
  }
}

#[test]
fn test_strength_scales_output() {
  let base = NoiseField::new(NoiseConfig::default()).unwrap();
  let doubled = NoiseField::new(NoiseConfig::default().with_strength(2.0)).unwrap();
  for p in sample_points() {
    assert!((doubled.evaluate(p) - 2.0 * base.evaluate(p)).abs() < 1e-5);
  }
}

#[test]
fn test_identical_layers_normalize_to_base() {
  // Same frequency in every layer: the weighted average equals one layer
  let base = NoiseField::new(NoiseConfig::default()).unwrap();
  let layered = NoiseField::new(
    NoiseConfig::default()
      .with_layers(5)
      .with_roughness_gain(1.0)
      .with_amplitude_gain(0.5),
  )
  .unwrap();

  for p in sample_points() {
    assert!((layered.evaluate(p) - base.evaluate(p)).abs() < 1e-5);
  }
}

#[test]
fn test_basis_choice_changes_field() {
  let pairwise = NoiseField::new(NoiseConfig::default()).unwrap();
  let conventional = NoiseField::new(NoiseConfig::default().with_basis(NoiseBasis::Perlin3d)).unwrap();
  let differs = sample_points()
    .into_iter()
    .any(|p| (pairwise.evaluate(p) - conventional.evaluate(p)).abs() > 1e-6);
  assert!(differs);
}

#[test]
fn test_invalid_config_rejected() {
  assert!(NoiseField::new(NoiseConfig::default().with_layers(0)).is_err());
}

#[test]
fn test_closure_is_a_density_field() {
  let plane = |p: Vec3| p.z - 5.0;
  assert_eq!(plane.evaluate(Vec3::new(1.0, 2.0, 7.0)), 2.0);
}
