//! In-memory reference host.
//!
//! Models the parts of an editor document the engine consumes: a global
//! object table, a shared mesh pool, named scenes with membership lists,
//! and a selection set. Objects may share meshes, live outside any scene,
//! or leave orphaned meshes behind when deleted, so every scan, selection,
//! and maintenance behavior can be exercised without a real editor.

use std::collections::HashSet;

use glam::{DAffine3, DVec3};
use overlap_core::{
  MeshData, MeshId, MeshPool, ObjectId, ObjectKind, OverlapError, Polygon, SceneSource,
  SelectionSink,
};
use smallvec::smallvec;

// =============================================================================
// Records
// =============================================================================

/// Curve geometry: a polyline tessellated to a ribbon on evaluation.
#[derive(Clone, Debug)]
pub struct CurveData {
  /// Control points in object-local space.
  pub points: Vec<DVec3>,
  /// Extrusion width of the tessellated ribbon.
  pub width: f64,
}

#[derive(Clone, Debug)]
enum ObjectData {
  /// Reference into the shared mesh pool.
  Mesh(MeshId),
  /// Curve tessellated on demand.
  Curve(CurveData),
  /// No geometry (empties, lights, cameras).
  None,
}

#[derive(Clone, Debug)]
struct ObjectRecord {
  id: ObjectId,
  name: String,
  kind: ObjectKind,
  transform: DAffine3,
  data: ObjectData,
}

struct SceneRecord {
  #[allow(dead_code)]
  name: String,
  members: Vec<ObjectId>,
}

// =============================================================================
// MemoryHost
// =============================================================================

/// In-memory host document implementing the engine's scene traits.
pub struct MemoryHost {
  meshes: Vec<(MeshId, MeshData)>,
  objects: Vec<ObjectRecord>,
  scenes: Vec<SceneRecord>,
  selected: HashSet<ObjectId>,
  next_object_id: u64,
  next_mesh_id: u64,
}

impl Default for MemoryHost {
  fn default() -> Self {
    Self::new()
  }
}

impl MemoryHost {
  /// Create a host with one empty scene.
  pub fn new() -> Self {
    Self {
      meshes: Vec::new(),
      objects: Vec::new(),
      scenes: vec![SceneRecord {
        name: "Scene".to_owned(),
        members: Vec::new(),
      }],
      selected: HashSet::new(),
      next_object_id: 0,
      next_mesh_id: 0,
    }
  }

  /// Add another scene, returning its index.
  pub fn add_scene(&mut self, name: &str) -> usize {
    self.scenes.push(SceneRecord {
      name: name.to_owned(),
      members: Vec::new(),
    });
    self.scenes.len() - 1
  }

  /// Add a mesh resource to the shared pool.
  pub fn add_mesh(&mut self, data: MeshData) -> MeshId {
    self.next_mesh_id += 1;
    let id = MeshId::from_raw(self.next_mesh_id);
    self.meshes.push((id, data));
    id
  }

  /// Add a mesh object linked into the given scene.
  ///
  /// # Panics
  /// Panics if `scene` is out of range.
  pub fn add_object(
    &mut self,
    scene: usize,
    name: &str,
    transform: DAffine3,
    mesh: MeshId,
  ) -> ObjectId {
    let id = self.push_object(name, ObjectKind::Mesh, transform, ObjectData::Mesh(mesh));
    self.scenes[scene].members.push(id);
    id
  }

  /// Add a mesh object present in the object table but linked to no
  /// scene. Such objects are scanned (the scanner walks the global
  /// table) yet do not protect their mesh from cleanup.
  pub fn add_unlinked_object(
    &mut self,
    name: &str,
    transform: DAffine3,
    mesh: MeshId,
  ) -> ObjectId {
    self.push_object(name, ObjectKind::Mesh, transform, ObjectData::Mesh(mesh))
  }

  /// Add a curve object linked into the given scene.
  ///
  /// # Panics
  /// Panics if `scene` is out of range.
  pub fn add_curve(
    &mut self,
    scene: usize,
    name: &str,
    transform: DAffine3,
    curve: CurveData,
  ) -> ObjectId {
    let id = self.push_object(name, ObjectKind::Curve, transform, ObjectData::Curve(curve));
    self.scenes[scene].members.push(id);
    id
  }

  /// Add a geometry-less object (empty, light, camera) to the scene.
  ///
  /// # Panics
  /// Panics if `scene` is out of range.
  pub fn add_helper(
    &mut self,
    scene: usize,
    name: &str,
    kind: ObjectKind,
    transform: DAffine3,
  ) -> ObjectId {
    let id = self.push_object(name, kind, transform, ObjectData::None);
    self.scenes[scene].members.push(id);
    id
  }

  /// Delete an object from the table and every scene. Its mesh resource
  /// stays in the pool until maintenance reclaims it.
  pub fn remove_object(&mut self, id: ObjectId) {
    self.objects.retain(|o| o.id != id);
    for scene in &mut self.scenes {
      scene.members.retain(|&m| m != id);
    }
    self.selected.remove(&id);
  }

  /// Selected objects, sorted for stable assertions.
  pub fn selected(&self) -> Vec<ObjectId> {
    let mut ids: Vec<ObjectId> = self.selected.iter().copied().collect();
    ids.sort();
    ids
  }

  /// Number of mesh resources currently pooled.
  pub fn mesh_count(&self) -> usize {
    self.meshes.len()
  }

  /// True if the pool still holds this mesh.
  pub fn contains_mesh(&self, id: MeshId) -> bool {
    self.meshes.iter().any(|(m, _)| *m == id)
  }

  fn push_object(
    &mut self,
    name: &str,
    kind: ObjectKind,
    transform: DAffine3,
    data: ObjectData,
  ) -> ObjectId {
    self.next_object_id += 1;
    let id = ObjectId::from_raw(self.next_object_id);
    self.objects.push(ObjectRecord {
      id,
      name: name.to_owned(),
      kind,
      transform,
      data,
    });
    id
  }

  fn find(&self, id: ObjectId) -> Option<&ObjectRecord> {
    self.objects.iter().find(|o| o.id == id)
  }
}

// =============================================================================
// Curve tessellation
// =============================================================================

/// Default curve tessellation: extrude the polyline along +Z by `width`
/// into a ribbon of quads. Fewer than two points yields empty geometry.
fn tessellate_curve(curve: &CurveData) -> MeshData {
  if curve.points.len() < 2 {
    return MeshData::default();
  }

  let lift = DVec3::new(0.0, 0.0, curve.width);
  let mut vertices = Vec::with_capacity(curve.points.len() * 2);
  for &p in &curve.points {
    vertices.push(p);
    vertices.push(p + lift);
  }

  let mut polygons: Vec<Polygon> = Vec::with_capacity(curve.points.len() - 1);
  for i in 0..curve.points.len() as u32 - 1 {
    let base = i * 2;
    polygons.push(smallvec![base, base + 1, base + 3, base + 2]);
  }

  MeshData::new(vertices, polygons)
}

// =============================================================================
// Trait implementations
// =============================================================================

impl SceneSource for MemoryHost {
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
    match &obj.data {
      ObjectData::Mesh(mesh_id) => self
        .meshes
        .iter()
        .find(|(m, _)| m == mesh_id)
        .map(|(_, data)| data.clone())
        .ok_or_else(|| OverlapError::Evaluation {
          id,
          reason: format!("mesh resource {mesh_id:?} is gone from the pool"),
        }),
      ObjectData::Curve(curve) => Ok(tessellate_curve(curve)),
      ObjectData::None => Err(OverlapError::Evaluation {
        id,
        reason: "object has no geometry".to_owned(),
      }),
    }
  }
}

impl SelectionSink for MemoryHost {
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

impl MeshPool for MemoryHost {
  fn mesh_ids(&self) -> Vec<MeshId> {
    self.meshes.iter().map(|(id, _)| *id).collect()
  }

  fn is_referenced(&self, id: MeshId) -> bool {
    self.scenes.iter().any(|scene| {
      scene.members.iter().any(|member| {
        self
          .find(*member)
          .is_some_and(|o| matches!(o.data, ObjectData::Mesh(m) if m == id))
      })
    })
  }

  fn remove(&mut self, id: MeshId) {
    self.meshes.retain(|(m, _)| *m != id);
  }
}

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;
