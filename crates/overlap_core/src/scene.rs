//! Host scene abstraction.
//!
//! The engine never talks to an editor directly; hosts implement these
//! traits over their own scene graph. `crates/overlap_scene` ships an
//! in-memory reference implementation used by tests and benches.

use glam::DAffine3;

use crate::error::OverlapError;
use crate::types::{MeshData, MeshId, ObjectId, ObjectKind};

/// Read access to the host's object table.
///
/// `object_ids` enumerates the global object table, not scene membership:
/// objects that are not linked into any scene still participate in scans,
/// matching how editors keep a document-wide object pool.
pub trait SceneSource {
  /// All object handles, in stable (insertion) order.
  fn object_ids(&self) -> Vec<ObjectId>;

  /// Kind of an object, or `None` if the handle is stale.
  fn object_kind(&self, id: ObjectId) -> Option<ObjectKind>;

  /// Display name of an object, or `None` if the handle is stale.
  fn object_name(&self, id: ObjectId) -> Option<&str>;

  /// Object-to-world transform, or `None` if the handle is stale.
  fn world_transform(&self, id: ObjectId) -> Option<DAffine3>;

  /// Evaluated local-space geometry.
  ///
  /// For mesh objects this is the post-modifier mesh; for curve objects
  /// the host tessellates with its default settings. Any temporary
  /// derived mesh the host allocates is released before returning.
  fn evaluated_geometry(&self, id: ObjectId) -> Result<MeshData, OverlapError>;
}

/// The host's selection side-channel.
pub trait SelectionSink {
  /// Clear all selection state.
  fn deselect_all(&mut self);

  /// Mark one object as selected. A stale handle is a hard error, not a
  /// silent skip.
  fn select(&mut self, id: ObjectId) -> Result<(), OverlapError>;
}

/// The host's shared mesh-resource pool.
///
/// Stale, unreferenced meshes in this pool are a known source of phantom
/// overlaps after object deletion; `maintenance::cleanup_unused_meshes`
/// sweeps them through this trait.
pub trait MeshPool {
  /// All mesh handles currently in the pool.
  fn mesh_ids(&self) -> Vec<MeshId>;

  /// True if any object in any scene references this mesh.
  fn is_referenced(&self, id: MeshId) -> bool;

  /// Release a mesh resource. Removing an unknown handle is a no-op.
  fn remove(&mut self, id: MeshId);
}
