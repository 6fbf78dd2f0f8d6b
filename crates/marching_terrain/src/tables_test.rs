use super::*;

#[test]
fn test_homogeneous_cases_are_empty() {
  assert!(triangle_edges(0).is_empty(), "All inactive should emit nothing");
  assert!(triangle_edges(255).is_empty(), "All active should emit nothing");
  assert_eq!(EDGE_TABLE[0], 0);
  assert_eq!(EDGE_TABLE[255], 0);
}

#[test]
fn test_rows_are_whole_triangles() {
  for case in 0..=255u8 {
    let edges = triangle_edges(case);
    assert_eq!(edges.len() % 3, 0, "Case {} has a partial triangle", case);
    assert!(case_triangle_count(case) <= MAX_TRIANGLES_PER_CUBE);

    // Everything after the terminator is padding
    let row = &TRIANGLE_TABLE[case as usize];
    assert!(row[edges.len()..].iter().all(|&e| e == TABLE_END));
  }
}

#[test]
fn test_row_entries_are_valid_edges() {
  for case in 0..=255u8 {
    for &edge in triangle_edges(case) {
      assert!((0..12).contains(&edge), "Case {} uses edge {}", case, edge);
    }
  }
}

#[test]
fn test_triangles_use_exactly_the_crossing_edges() {
  for case in 0..=255u8 {
    let used = triangle_edges(case)
      .iter()
      .fold(0u16, |mask, &edge| mask | (1 << edge));
    assert_eq!(
      used, EDGE_TABLE[case as usize],
      "Case {:#010b}: triangles use {:#014b}, crossings are {:#014b}",
      case, used, EDGE_TABLE[case as usize]
    );
  }
}

#[test]
fn test_single_corner_cases_emit_one_triangle() {
  for corner in 0..8 {
    let case = 1u8 << corner;
    assert_eq!(case_triangle_count(case), 1, "Corner {}", corner);
    assert_eq!(case_triangle_count(!case), 1, "Inverse of corner {}", corner);
  }
}

#[test]
fn test_canonical_rows() {
  assert_eq!(triangle_edges(1), &[0, 8, 3]);
  assert_eq!(triangle_edges(3), &[1, 8, 3, 9, 8, 1]);
  assert_eq!(triangle_edges(254), &[0, 3, 8]);
}

#[test]
fn test_edge_table_symmetry() {
  for i in 0..128 {
    assert_eq!(EDGE_TABLE[i], EDGE_TABLE[255 - i]);
  }
}

#[test]
fn test_edge_corners_form_cube_edges() {
  for (edge, &[a, b]) in EDGE_CORNERS.iter().enumerate() {
    assert!(a < 8 && b < 8);
    let pa = CORNER_OFFSETS[a as usize];
    let pb = CORNER_OFFSETS[b as usize];
    let manhattan: usize = (0..3).map(|i| pa[i].abs_diff(pb[i])).sum();
    assert_eq!(manhattan, 1, "Edge {} does not join adjacent corners", edge);
  }
}

#[test]
fn test_edge_groups() {
  // Edges 0-3 lie at z=0, 4-7 at z=1, 8-11 run along z.
  for edge in 0..4 {
    let [a, b] = EDGE_CORNERS[edge];
    assert_eq!(CORNER_OFFSETS[a as usize][2], 0);
    assert_eq!(CORNER_OFFSETS[b as usize][2], 0);
  }
  for edge in 4..8 {
    let [a, b] = EDGE_CORNERS[edge];
    assert_eq!(CORNER_OFFSETS[a as usize][2], 1);
    assert_eq!(CORNER_OFFSETS[b as usize][2], 1);
  }
  for edge in 8..12 {
    let [a, b] = EDGE_CORNERS[edge];
    assert_eq!(CORNER_OFFSETS[a as usize][2], 0);
    assert_eq!(CORNER_OFFSETS[b as usize][2], 1);
  }
}
