//! Overlap scanner: extraction, BVH builds, and the pairwise sweep.
//!
//! Two modes: an all-pairs sweep over every eligible object, or a
//! one-vs-all sweep against a single filter object. One BVH is built per
//! participating object per scan and reused across every pair involving
//! it, so a scan costs O(n) builds and O(n²) tree-vs-tree tests.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::bvh::Bvh;
use crate::error::OverlapError;
use crate::extract::extract;
use crate::scene::SceneSource;
use crate::types::{ObjectId, OverlapPair, OverlapSettings};

// =============================================================================
// ResultStore - accumulated overlap pairs
// =============================================================================

/// Accumulated overlap results, owned by the scan controller.
///
/// Pairs are kept in discovery order and deduplicated on insert. A new
/// scan clears the container in place, preserving its identity for any
/// live references the host UI holds across redraws.
#[derive(Default)]
pub struct ResultStore {
  pairs: Vec<OverlapPair>,
}

impl ResultStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all entries in place. Never replaces the container.
  pub fn reset(&mut self) {
    self.pairs.clear();
  }

  /// Append a pair unless it is already present (in either member
  /// order). Returns true if the pair was appended.
  pub fn insert(&mut self, pair: OverlapPair) -> bool {
    if self.contains(pair) {
      return false;
    }
    self.pairs.push(pair);
    true
  }

  /// True if the pair is present, regardless of member order.
  pub fn contains(&self, pair: OverlapPair) -> bool {
    self.pairs.contains(&pair)
  }

  /// Stored pairs in discovery order.
  pub fn pairs(&self) -> &[OverlapPair] {
    &self.pairs
  }

  pub fn iter(&self) -> impl Iterator<Item = &OverlapPair> {
    self.pairs.iter()
  }

  pub fn len(&self) -> usize {
    self.pairs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pairs.is_empty()
  }
}

// =============================================================================
// Scan driver
// =============================================================================

/// Completion report of one scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
  /// Objects whose geometry was extracted and indexed.
  pub objects_scanned: usize,
  /// Tree-vs-tree tests performed.
  pub pairs_tested: usize,
  /// Overlapping pairs appended to the store.
  pub overlaps_found: usize,
}

/// Run one synchronous overlap scan.
///
/// The store is reset in place before anything else, so a failed scan
/// leaves it empty rather than holding the previous scan's results. In
/// filtered mode an unset, stale, or ineligible filter object makes the
/// scan an empty success. Extraction or evaluation failure aborts the
/// whole scan with the error.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "scanner::run_scan")
)]
pub fn run_scan<S: SceneSource>(
  scene: &S,
  settings: &OverlapSettings,
  store: &mut ResultStore,
) -> Result<ScanSummary, OverlapError> {
  store.reset();

  let eligible: Vec<ObjectId> = scene
    .object_ids()
    .into_iter()
    .filter(|&id| scene.object_kind(id).is_some_and(|k| k.is_eligible()))
    .collect();

  let candidates = match candidate_pairs(scene, settings, &eligible) {
    Some(pairs) => pairs,
    None => return Ok(ScanSummary::default()),
  };

  // Build one tree per participating object, before any pair test.
  let mut trees: HashMap<ObjectId, Bvh> = HashMap::new();
  {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("build_trees").entered();
    for &(a, b) in &candidates {
      for id in [a, b] {
        if !trees.contains_key(&id) {
          let snapshot = extract(scene, id)?;
          trees.insert(id, Bvh::build(&snapshot));
        }
      }
    }
  }

  // Pure read-only phase; results committed in candidate order below.
  let hits: Vec<bool> = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("test_pairs").entered();
    candidates
      .par_iter()
      .map(|(a, b)| trees[a].overlaps(&trees[b]))
      .collect()
  };

  let mut overlaps_found = 0;
  for (&(a, b), &hit) in candidates.iter().zip(&hits) {
    if hit && store.insert(OverlapPair::new(a, b)) {
      overlaps_found += 1;
    }
  }

  Ok(ScanSummary {
    objects_scanned: trees.len(),
    pairs_tested: candidates.len(),
    overlaps_found,
  })
}

/// Candidate pairs for the configured mode, or `None` for the defined
/// filtered-mode no-op (unset/stale/ineligible filter).
fn candidate_pairs<S: SceneSource>(
  scene: &S,
  settings: &OverlapSettings,
  eligible: &[ObjectId],
) -> Option<Vec<(ObjectId, ObjectId)>> {
  if settings.filter_search_one_obj {
    let filter = settings.filter?;
    if !scene.object_kind(filter).is_some_and(|k| k.is_eligible()) {
      return None;
    }
    Some(
      eligible
        .iter()
        .copied()
        .filter(|&id| id != filter)
        .map(|id| (id, filter))
        .collect(),
    )
  } else {
    let mut pairs = Vec::new();
    for (i, &a) in eligible.iter().enumerate() {
      for &b in &eligible[i + 1..] {
        pairs.push((a, b));
      }
    }
    Some(pairs)
  }
}

#[cfg(test)]
#[path = "scanner_test.rs"]
mod scanner_test;
