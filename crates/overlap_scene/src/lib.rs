//! overlap_scene - in-memory host for the overlap-detection engine
//!
//! Reference implementation of the `overlap_core` host traits: a global
//! object table, a shared mesh pool, named scenes, selection state, and
//! default curve tessellation. Integration tests and benches run the
//! whole engine against this host; real editor bridges can use it as the
//! model for their own trait implementations.

pub mod host;
pub mod shapes;

pub use host::{CurveData, MemoryHost};
