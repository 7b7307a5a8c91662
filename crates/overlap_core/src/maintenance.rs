//! Mesh-pool maintenance.
//!
//! Deleting an object can leave its mesh resource alive in the host's
//! pool, and a later scan over stale data then reports phantom overlaps.
//! This sweep releases every mesh no scene object references anymore.

use crate::scene::MeshPool;

/// Remove every mesh resource referenced by zero objects across all
/// scenes. Returns the number of meshes removed.
pub fn cleanup_unused_meshes<P: MeshPool>(pool: &mut P) -> usize {
  let mut removed = 0;
  for id in pool.mesh_ids() {
    if !pool.is_referenced(id) {
      pool.remove(id);
      removed += 1;
    }
  }
  removed
}

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod maintenance_test;
