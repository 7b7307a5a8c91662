//! Error type shared by scan, presentation, and selection operations.

use thiserror::Error;

use crate::types::{ObjectId, ObjectKind};

/// Error type for overlap-detection operations.
///
/// All operations are one-shot and synchronous; there are no retries.
/// A returned error means the triggered operation stopped, it does not
/// roll back work the host already observed (e.g. a cleared selection).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlapError {
  /// A stored handle no longer resolves to a live scene object.
  #[error("object {0:?} not found in scene")]
  ObjectNotFound(ObjectId),

  /// The object exists but its kind cannot carry overlap geometry.
  #[error("object {id:?} has kind {kind:?}, expected a mesh or curve")]
  NotEligible { id: ObjectId, kind: ObjectKind },

  /// The host returned geometry that references vertices it did not supply.
  #[error("invalid geometry for object {id:?}: {reason}")]
  InvalidGeometry { id: ObjectId, reason: String },

  /// The host failed to evaluate/tessellate the object's geometry.
  #[error("geometry evaluation failed for object {id:?}: {reason}")]
  Evaluation { id: ObjectId, reason: String },
}
