//! Core data types for overlap detection.

use glam::DVec3;
use smallvec::SmallVec;

// =============================================================================
// Handles - opaque object/mesh identity
// =============================================================================

/// Opaque scene-object handle.
///
/// Allocated by the host scene; stable for the lifetime of the object.
/// Results reference objects through this handle rather than by name, and
/// every resolve against the live scene performs an existence check.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ObjectId(u64);

impl ObjectId {
  /// Wrap a raw host-assigned ID value.
  pub fn from_raw(raw: u64) -> Self {
    Self(raw)
  }

  /// Get the raw ID value.
  pub fn raw(&self) -> u64 {
    self.0
  }
}

/// Opaque handle for a mesh resource in the host's shared pool.
///
/// Several objects (across several scenes) may reference one mesh.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct MeshId(u64);

impl MeshId {
  /// Wrap a raw host-assigned ID value.
  pub fn from_raw(raw: u64) -> Self {
    Self(raw)
  }

  /// Get the raw ID value.
  pub fn raw(&self) -> u64 {
    self.0
  }
}

// =============================================================================
// ObjectKind - eligibility filter
// =============================================================================

/// Geometric kind of a scene object.
///
/// Only mesh-like and curve-like objects carry overlap-testable geometry;
/// everything else is silently skipped by the scanner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ObjectKind {
  /// Mesh object; overlap testing uses the post-modifier evaluated mesh.
  Mesh,
  /// Curve object; tessellated to a mesh by the host before testing.
  Curve,
  /// Transform-only placeholder, no geometry.
  Empty,
  /// Light source, no overlap geometry.
  Light,
  /// Camera, no overlap geometry.
  Camera,
}

impl ObjectKind {
  /// True if objects of this kind participate in overlap scans.
  pub fn is_eligible(&self) -> bool {
    matches!(self, ObjectKind::Mesh | ObjectKind::Curve)
  }
}

// =============================================================================
// Geometry buffers
// =============================================================================

/// Polygon as an ordered list of vertex indices.
///
/// Inline storage covers the common triangle/quad case.
pub type Polygon = SmallVec<[u32; 4]>;

/// Local-space evaluated geometry as supplied by the host.
///
/// For mesh objects this is the post-modifier mesh; for curves it is the
/// host's default tessellation. Indices are validated by the extractor,
/// not here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
  /// Vertex positions in object-local space.
  pub vertices: Vec<DVec3>,
  /// Polygons as vertex index lists (arbitrary n-gons).
  pub polygons: Vec<Polygon>,
}

impl MeshData {
  pub fn new(vertices: Vec<DVec3>, polygons: Vec<Polygon>) -> Self {
    Self { vertices, polygons }
  }

  /// Returns true if there is nothing to test against.
  pub fn is_empty(&self) -> bool {
    self.polygons.is_empty()
  }
}

/// World-space geometry snapshot of one object, taken once per scan.
///
/// Produced by the extractor, consumed by the BVH builder, then discarded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometrySnapshot {
  /// Vertex positions in world space.
  pub vertices: Vec<DVec3>,
  /// Polygons as vertex index lists. All indices are in range.
  pub polygons: Vec<Polygon>,
}

impl GeometrySnapshot {
  /// Returns true if there is nothing to test against.
  pub fn is_empty(&self) -> bool {
    self.polygons.is_empty()
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn polygon_count(&self) -> usize {
    self.polygons.len()
  }

  /// Fan-triangulate all polygons.
  ///
  /// Polygons with fewer than three vertices contribute nothing. N-gons
  /// are fanned from their first vertex, which is exact for convex faces
  /// and matches how the host triangulates for its own spatial queries.
  pub fn triangles(&self) -> Vec<[DVec3; 3]> {
    let mut tris = Vec::new();
    for poly in &self.polygons {
      if poly.len() < 3 {
        continue;
      }
      let v0 = self.vertices[poly[0] as usize];
      for i in 1..poly.len() - 1 {
        tris.push([
          v0,
          self.vertices[poly[i] as usize],
          self.vertices[poly[i + 1] as usize],
        ]);
      }
    }
    tris
  }
}

// =============================================================================
// OverlapPair - unordered result entry
// =============================================================================

/// Unordered pair of overlapping objects.
///
/// The constructor normalizes member order, so `{a, b}` and `{b, a}`
/// compare and hash equal. `a != b` always holds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OverlapPair {
  a: ObjectId,
  b: ObjectId,
}

impl OverlapPair {
  /// Create a pair from two distinct object handles, in either order.
  pub fn new(x: ObjectId, y: ObjectId) -> Self {
    debug_assert!(x != y, "an object cannot overlap itself");
    if x <= y {
      Self { a: x, b: y }
    } else {
      Self { a: y, b: x }
    }
  }

  /// First member (lower raw ID).
  pub fn first(&self) -> ObjectId {
    self.a
  }

  /// Second member (higher raw ID).
  pub fn second(&self) -> ObjectId {
    self.b
  }

  /// True if `id` is one of the two members.
  pub fn contains(&self, id: ObjectId) -> bool {
    self.a == id || self.b == id
  }
}

// =============================================================================
// OverlapSettings - ambient configuration
// =============================================================================

/// Configuration shared by scanning and presentation.
///
/// Mirrors the host-side toggles: one filter object narrows either the
/// scan itself (`filter_search_one_obj`) or only what gets displayed and
/// selected (`filter_one_obj`).
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlapSettings {
  /// Present/select only pairs touching the filter object.
  pub filter_one_obj: bool,

  /// Scan only against the filter object (O(n) instead of all pairs).
  pub filter_search_one_obj: bool,

  /// The filter object, if any.
  pub filter: Option<ObjectId>,
}

impl OverlapSettings {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_filter_one_obj(mut self, on: bool) -> Self {
    self.filter_one_obj = on;
    self
  }

  pub fn with_filter_search_one_obj(mut self, on: bool) -> Self {
    self.filter_search_one_obj = on;
    self
  }

  pub fn with_filter(mut self, filter: Option<ObjectId>) -> Self {
    self.filter = filter;
    self
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
