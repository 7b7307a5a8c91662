//! Geometry extraction: scene object to world-space snapshot.

use crate::error::OverlapError;
use crate::scene::SceneSource;
use crate::types::{GeometrySnapshot, ObjectId};

/// Extract one object's evaluated geometry in world space.
///
/// Resolves the handle (stale handles error out), checks eligibility,
/// validates every polygon index against the vertex buffer, and applies
/// the object's world transform so snapshots from different objects are
/// directly comparable. Curve tessellation happens inside the host's
/// `evaluated_geometry`.
pub fn extract<S: SceneSource>(
  scene: &S,
  id: ObjectId,
) -> Result<GeometrySnapshot, OverlapError> {
  let kind = scene
    .object_kind(id)
    .ok_or(OverlapError::ObjectNotFound(id))?;
  if !kind.is_eligible() {
    return Err(OverlapError::NotEligible { id, kind });
  }

  let mesh = scene.evaluated_geometry(id)?;
  let vertex_count = mesh.vertices.len();
  for (poly_index, poly) in mesh.polygons.iter().enumerate() {
    for &v in poly {
      if v as usize >= vertex_count {
        return Err(OverlapError::InvalidGeometry {
          id,
          reason: format!(
            "polygon {poly_index} references vertex {v} of {vertex_count}"
          ),
        });
      }
    }
  }

  let transform = scene
    .world_transform(id)
    .ok_or(OverlapError::ObjectNotFound(id))?;
  let vertices = mesh
    .vertices
    .iter()
    .map(|&v| transform.transform_point3(v))
    .collect();

  Ok(GeometrySnapshot {
    vertices,
    polygons: mesh.polygons,
  })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
