//! overlap_core - host-independent mesh overlap detection
//!
//! This crate detects overlapping 3D geometry between scene objects: it
//! takes world-space geometry snapshots, builds one bounding-volume
//! hierarchy per object, and sweeps object pairs for triangle-level
//! intersection. The host editor (scene graph, modifier evaluation,
//! selection, mesh lifetime) stays behind the traits in [`scene`].
//!
//! # Example
//!
//! ```ignore
//! use overlap_core::{run_scan, overlap_lines, OverlapSettings, ResultStore};
//!
//! let settings = OverlapSettings::default();
//! let mut store = ResultStore::new();
//!
//! let summary = run_scan(&scene, &settings, &mut store)?;
//! println!("{} overlaps in {} pairs", summary.overlaps_found, summary.pairs_tested);
//!
//! for line in overlap_lines(&store, &scene, &settings)? {
//!     println!("{line}");
//! }
//! ```

pub mod aabb;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use aabb::Aabb;
pub use error::OverlapError;
pub use types::{
  GeometrySnapshot, MeshData, MeshId, ObjectId, ObjectKind, OverlapPair, OverlapSettings, Polygon,
};

// Triangle predicate and per-object spatial index
pub mod bvh;
pub mod tri_tri;
pub use bvh::Bvh;
pub use tri_tri::tri_tri_overlap;

// Host abstraction and extraction
pub mod extract;
pub mod scene;
pub use extract::extract;
pub use scene::{MeshPool, SceneSource, SelectionSink};

// Scan driver and accumulated results
pub mod scanner;
pub use scanner::{run_scan, ResultStore, ScanSummary};

// Presentation and selection
pub mod results;
pub use results::{overlap_lines, presented_pairs, select_overlapping};

// Mesh-pool maintenance
pub mod maintenance;
pub use maintenance::cleanup_unused_meshes;

// Mock hosts and fixtures for tests/benches
pub mod test_utils;
