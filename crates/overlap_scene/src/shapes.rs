//! Shape generators for tests, benches, and host demos.

use glam::DVec3;
use overlap_core::{MeshData, Polygon};
use smallvec::smallvec;

/// Axis-aligned cube quad mesh centered at the origin.
pub fn cube(size: f64) -> MeshData {
  let h = size * 0.5;
  let vertices = vec![
    DVec3::new(-h, -h, -h),
    DVec3::new(h, -h, -h),
    DVec3::new(h, h, -h),
    DVec3::new(-h, h, -h),
    DVec3::new(-h, -h, h),
    DVec3::new(h, -h, h),
    DVec3::new(h, h, h),
    DVec3::new(-h, h, h),
  ];
  let polygons: Vec<Polygon> = vec![
    smallvec![0, 1, 2, 3],
    smallvec![4, 7, 6, 5],
    smallvec![0, 4, 5, 1],
    smallvec![3, 2, 6, 7],
    smallvec![0, 3, 7, 4],
    smallvec![1, 5, 6, 2],
  ];
  MeshData::new(vertices, polygons)
}

/// Single quad in the XY plane, centered at the origin.
pub fn plane(size: f64) -> MeshData {
  let h = size * 0.5;
  MeshData::new(
    vec![
      DVec3::new(-h, -h, 0.0),
      DVec3::new(h, -h, 0.0),
      DVec3::new(h, h, 0.0),
      DVec3::new(-h, h, 0.0),
    ],
    vec![smallvec![0, 1, 2, 3]],
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cube_has_six_quads() {
    let mesh = cube(2.0);
    assert_eq!(mesh.vertices.len(), 8);
    assert_eq!(mesh.polygons.len(), 6);
    assert!(mesh.vertices.iter().all(|v| v.abs().max_element() == 1.0));
  }

  #[test]
  fn plane_is_one_quad() {
    let mesh = plane(1.0);
    assert_eq!(mesh.polygons.len(), 1);
    assert_eq!(mesh.polygons[0].len(), 4);
  }
}
