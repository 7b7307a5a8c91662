//! Result presentation and selection.
//!
//! Reads the accumulated store on behalf of the host UI: listing lines,
//! the presentation filter, and pushing selection back into the host.
//! Name resolution always goes through the live scene; a stale handle is
//! a hard error, never a silently stale label.

use crate::error::OverlapError;
use crate::scanner::ResultStore;
use crate::scene::{SceneSource, SelectionSink};
use crate::types::{OverlapPair, OverlapSettings};

/// Pairs that qualify for presentation under the current settings.
///
/// Filter toggle off: every stored pair. Toggle on with a filter object:
/// pairs containing it. Toggle on without a filter object: none (defined
/// empty behavior, not an error).
pub fn presented_pairs(store: &ResultStore, settings: &OverlapSettings) -> Vec<OverlapPair> {
  if !settings.filter_one_obj {
    return store.pairs().to_vec();
  }
  match settings.filter {
    Some(filter) => store
      .iter()
      .copied()
      .filter(|pair| pair.contains(filter))
      .collect(),
    None => Vec::new(),
  }
}

/// One human-readable line per qualifying pair.
pub fn overlap_lines<S: SceneSource>(
  store: &ResultStore,
  scene: &S,
  settings: &OverlapSettings,
) -> Result<Vec<String>, OverlapError> {
  presented_pairs(store, settings)
    .into_iter()
    .map(|pair| {
      let name1 = scene
        .object_name(pair.first())
        .ok_or(OverlapError::ObjectNotFound(pair.first()))?;
      let name2 = scene
        .object_name(pair.second())
        .ok_or(OverlapError::ObjectNotFound(pair.second()))?;
      Ok(format!("Overlap between {name1} and {name2}"))
    })
    .collect()
}

/// Select every member of the qualifying pairs in the host.
///
/// Clears the host selection first, then selects the union of pair
/// members. Returns the number of `select` calls issued (members shared
/// between pairs are selected once per pair, as hosts treat re-selection
/// as idempotent). A stale handle fails the operation after the clear,
/// matching the host's own lookup behavior.
pub fn select_overlapping<H: SelectionSink>(
  store: &ResultStore,
  host: &mut H,
  settings: &OverlapSettings,
) -> Result<usize, OverlapError> {
  host.deselect_all();

  let mut selected = 0;
  for pair in presented_pairs(store, settings) {
    host.select(pair.first())?;
    host.select(pair.second())?;
    selected += 2;
  }
  Ok(selected)
}

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;
