//! Test utilities: mock scene hosts and geometry fixtures.
//!
//! Provides a minimal in-memory `SceneSource`/`SelectionSink` and shape
//! generators for testing the extractor, scanner, and presenter in
//! isolation. Real hosts live in `overlap_scene`.

use std::collections::HashSet;

use glam::{DAffine3, DVec3};
use smallvec::smallvec;

use crate::error::OverlapError;
use crate::scene::{SceneSource, SelectionSink};
use crate::types::{MeshData, ObjectId, ObjectKind};

// =============================================================================
// Geometry fixtures
// =============================================================================

/// Axis-aligned cube quad mesh centered at the origin.
pub fn cube_mesh(size: f64) -> MeshData {
  let h = size * 0.5;
  MeshData {
    vertices: vec![
      DVec3::new(-h, -h, -h),
      DVec3::new(h, -h, -h),
      DVec3::new(h, h, -h),
      DVec3::new(-h, h, -h),
      DVec3::new(-h, -h, h),
      DVec3::new(h, -h, h),
      DVec3::new(h, h, h),
      DVec3::new(-h, h, h),
    ],
    polygons: vec![
      smallvec![0, 1, 2, 3],
      smallvec![4, 7, 6, 5],
      smallvec![0, 4, 5, 1],
      smallvec![3, 2, 6, 7],
      smallvec![0, 3, 7, 4],
      smallvec![1, 5, 6, 2],
    ],
  }
}

// =============================================================================
// MockScene
// =============================================================================

/// One object in a [`MockScene`].
pub struct MockObject {
  pub id: ObjectId,
  pub name: String,
  pub kind: ObjectKind,
  pub transform: DAffine3,
  /// `None` simulates a host-side evaluation failure.
  pub mesh: Option<MeshData>,
}

/// Minimal in-memory scene for unit tests.
#[derive(Default)]
pub struct MockScene {
  objects: Vec<MockObject>,
  /// Host-side selection state, inspectable by tests.
  pub selected: HashSet<ObjectId>,
  next_id: u64,
}

impl MockScene {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add an object with explicit kind/transform/geometry.
  pub fn add(
    &mut self,
    name: &str,
    kind: ObjectKind,
    transform: DAffine3,
    mesh: Option<MeshData>,
  ) -> ObjectId {
    self.next_id += 1;
    let id = ObjectId::from_raw(self.next_id);
    self.objects.push(MockObject {
      id,
      name: name.to_owned(),
      kind,
      transform,
      mesh,
    });
    id
  }

  /// Add a mesh object holding a cube of `size` translated to `center`.
  pub fn add_cube(&mut self, name: &str, center: [f64; 3], size: f64) -> ObjectId {
    self.add(
      name,
      ObjectKind::Mesh,
      DAffine3::from_translation(DVec3::from(center)),
      Some(cube_mesh(size)),
    )
  }

  /// Add a mesh object whose geometry evaluation fails.
  pub fn add_failing(&mut self, name: &str) -> ObjectId {
    self.add(name, ObjectKind::Mesh, DAffine3::IDENTITY, None)
  }

  /// Delete an object, leaving any stored handles stale.
  pub fn remove(&mut self, id: ObjectId) {
    self.objects.retain(|o| o.id != id);
  }

  fn find(&self, id: ObjectId) -> Option<&MockObject> {
    self.objects.iter().find(|o| o.id == id)
  }
}

impl SceneSource for MockScene {
  fn object_ids(&self) -> Vec<ObjectId> {
    self.objects.iter().map(|o| o.id).collect()
  }

  fn object_kind(&self, id: ObjectId) -> Option<ObjectKind> {
    self.find(id).map(|o| o.kind)
  }

  fn object_name(&self, id: ObjectId) -> Option<&str> {
    self.find(id).map(|o| o.name.as_str())
  }

  fn world_transform(&self, id: ObjectId) -> Option<DAffine3> {
    self.find(id).map(|o| o.transform)
  }

  fn evaluated_geometry(&self, id: ObjectId) -> Result<MeshData, OverlapError> {
    let obj = self.find(id).ok_or(OverlapError::ObjectNotFound(id))?;
    obj.mesh.clone().ok_or_else(|| OverlapError::Evaluation {
      id,
      reason: "mock evaluation failure".to_owned(),
    })
  }
}

impl SelectionSink for MockScene {
  fn deselect_all(&mut self) {
    self.selected.clear();
  }

  fn select(&mut self, id: ObjectId) -> Result<(), OverlapError> {
    if self.find(id).is_none() {
      return Err(OverlapError::ObjectNotFound(id));
    }
    self.selected.insert(id);
    Ok(())
  }
}
