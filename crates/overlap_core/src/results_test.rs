use std::collections::HashSet;

use super::{overlap_lines, presented_pairs, select_overlapping};
use crate::error::OverlapError;
use crate::scanner::{run_scan, ResultStore};
use crate::test_utils::MockScene;
use crate::types::{ObjectId, OverlapPair, OverlapSettings};

/// Two overlap pairs: {A, B} and {B, D}; C overlaps nothing.
fn scanned_scene() -> (MockScene, ResultStore, [ObjectId; 4]) {
  let mut scene = MockScene::new();
  let a = scene.add_cube("A", [0.0, 0.0, 0.0], 2.0);
  let b = scene.add_cube("B", [1.0, 0.0, 0.0], 2.0);
  let c = scene.add_cube("C", [100.0, 0.0, 0.0], 2.0);
  let d = scene.add_cube("D", [2.5, 0.0, 0.0], 2.0);

  let mut store = ResultStore::new();
  run_scan(&scene, &OverlapSettings::default(), &mut store).unwrap();
  (scene, store, [a, b, c, d])
}

#[test]
fn presents_all_pairs_when_toggle_off() {
  let (_scene, store, [a, b, _c, d]) = scanned_scene();

  let presented = presented_pairs(&store, &OverlapSettings::default());
  assert_eq!(
    presented,
    vec![OverlapPair::new(a, b), OverlapPair::new(b, d)]
  );
}

#[test]
fn presentation_filter_narrows_to_one_object() {
  let (_scene, store, [a, b, c, d]) = scanned_scene();

  let settings = OverlapSettings::new()
    .with_filter_one_obj(true)
    .with_filter(Some(a));
  assert_eq!(presented_pairs(&store, &settings), vec![OverlapPair::new(a, b)]);

  let settings = settings.with_filter(Some(b));
  assert_eq!(
    presented_pairs(&store, &settings),
    vec![OverlapPair::new(a, b), OverlapPair::new(b, d)]
  );

  let settings = settings.with_filter(Some(c));
  assert!(presented_pairs(&store, &settings).is_empty());
}

#[test]
fn presentation_filter_without_object_presents_nothing() {
  let (_scene, store, _ids) = scanned_scene();

  let settings = OverlapSettings::new().with_filter_one_obj(true);
  assert!(presented_pairs(&store, &settings).is_empty());
}

#[test]
fn lines_are_human_readable() {
  let (scene, store, _ids) = scanned_scene();

  let lines = overlap_lines(&store, &scene, &OverlapSettings::default()).unwrap();
  assert_eq!(
    lines,
    vec![
      "Overlap between A and B".to_owned(),
      "Overlap between B and D".to_owned(),
    ]
  );
}

#[test]
fn lines_with_stale_handle_fail() {
  let (mut scene, store, [a, ..]) = scanned_scene();
  scene.remove(a);

  let result = overlap_lines(&store, &scene, &OverlapSettings::default());
  assert_eq!(result, Err(OverlapError::ObjectNotFound(a)));
}

#[test]
fn select_marks_union_of_members() {
  let (mut scene, store, [a, b, c, d]) = scanned_scene();

  let count = select_overlapping(&store, &mut scene, &OverlapSettings::default()).unwrap();
  assert_eq!(count, 4);
  assert_eq!(
    scene.selected,
    HashSet::from([a, b, d])
  );
  assert!(!scene.selected.contains(&c));
}

#[test]
fn select_clears_previous_selection_first() {
  let (mut scene, store, [_a, _b, c, _d]) = scanned_scene();
  scene.selected.insert(c);

  let settings = OverlapSettings::new()
    .with_filter_one_obj(true)
    .with_filter(Some(c));
  let count = select_overlapping(&store, &mut scene, &settings).unwrap();

  // No qualifying pairs: selection ends up empty, not untouched.
  assert_eq!(count, 0);
  assert!(scene.selected.is_empty());
}

#[test]
fn select_with_stale_handle_fails_after_clear() {
  let (mut scene, store, [a, b, ..]) = scanned_scene();
  scene.remove(b);
  scene.selected.insert(a);

  let result = select_overlapping(&store, &mut scene, &OverlapSettings::default());
  assert_eq!(result, Err(OverlapError::ObjectNotFound(b)));
  // The clear already happened; partial selection may remain.
  assert!(!scene.selected.contains(&b));
}

#[test]
fn select_respects_presentation_filter() {
  let (mut scene, store, [a, b, _c, d]) = scanned_scene();

  let settings = OverlapSettings::new()
    .with_filter_one_obj(true)
    .with_filter(Some(d));
  select_overlapping(&store, &mut scene, &settings).unwrap();

  assert_eq!(scene.selected, HashSet::from([b, d]));
  assert!(!scene.selected.contains(&a));
}
