use glam::{DAffine3, DVec3};
use smallvec::smallvec;

use super::extract;
use crate::error::OverlapError;
use crate::test_utils::{cube_mesh, MockScene};
use crate::types::{MeshData, ObjectId, ObjectKind};

#[test]
fn extracts_world_space_vertices() {
  let mut scene = MockScene::new();
  let id = scene.add_cube("cube", [10.0, 0.0, 0.0], 2.0);

  let snapshot = extract(&scene, id).unwrap();
  assert_eq!(snapshot.vertex_count(), 8);
  assert_eq!(snapshot.polygon_count(), 6);

  // Local [-1, 1] moved to world [9, 11] along x.
  let min_x = snapshot.vertices.iter().map(|v| v.x).fold(f64::INFINITY, f64::min);
  let max_x = snapshot
    .vertices
    .iter()
    .map(|v| v.x)
    .fold(f64::NEG_INFINITY, f64::max);
  assert_eq!(min_x, 9.0);
  assert_eq!(max_x, 11.0);
}

#[test]
fn applies_rotation_and_scale() {
  let mut scene = MockScene::new();
  let transform = DAffine3::from_scale(DVec3::splat(3.0));
  let id = scene.add("scaled", ObjectKind::Mesh, transform, Some(cube_mesh(2.0)));

  let snapshot = extract(&scene, id).unwrap();
  let max = snapshot
    .vertices
    .iter()
    .map(|v| v.x.abs())
    .fold(f64::NEG_INFINITY, f64::max);
  assert_eq!(max, 3.0);
}

#[test]
fn stale_handle_errors() {
  let mut scene = MockScene::new();
  let id = scene.add_cube("gone", [0.0, 0.0, 0.0], 1.0);
  scene.remove(id);

  assert_eq!(extract(&scene, id), Err(OverlapError::ObjectNotFound(id)));
}

#[test]
fn unknown_handle_errors() {
  let scene = MockScene::new();
  let bogus = ObjectId::from_raw(999);
  assert_eq!(extract(&scene, bogus), Err(OverlapError::ObjectNotFound(bogus)));
}

#[test]
fn ineligible_kind_errors() {
  let mut scene = MockScene::new();
  let id = scene.add("lamp", ObjectKind::Light, DAffine3::IDENTITY, None);

  assert_eq!(
    extract(&scene, id),
    Err(OverlapError::NotEligible {
      id,
      kind: ObjectKind::Light
    })
  );
}

#[test]
fn curve_kind_is_extractable() {
  // The host hands back tessellated geometry for curves; the extractor
  // treats it like any other mesh.
  let mut scene = MockScene::new();
  let id = scene.add(
    "curve",
    ObjectKind::Curve,
    DAffine3::IDENTITY,
    Some(cube_mesh(1.0)),
  );

  assert!(extract(&scene, id).is_ok());
}

#[test]
fn evaluation_failure_propagates() {
  let mut scene = MockScene::new();
  let id = scene.add_failing("broken");

  assert!(matches!(
    extract(&scene, id),
    Err(OverlapError::Evaluation { .. })
  ));
}

#[test]
fn out_of_range_index_is_invalid_geometry() {
  let mut scene = MockScene::new();
  let mesh = MeshData {
    vertices: vec![DVec3::ZERO, DVec3::X, DVec3::Y],
    polygons: vec![smallvec![0, 1, 5]],
  };
  let id = scene.add("bad", ObjectKind::Mesh, DAffine3::IDENTITY, Some(mesh));

  assert!(matches!(
    extract(&scene, id),
    Err(OverlapError::InvalidGeometry { .. })
  ));
}

#[test]
fn empty_mesh_extracts_to_empty_snapshot() {
  let mut scene = MockScene::new();
  let id = scene.add(
    "empty",
    ObjectKind::Mesh,
    DAffine3::IDENTITY,
    Some(MeshData::default()),
  );

  let snapshot = extract(&scene, id).unwrap();
  assert!(snapshot.is_empty());
}
