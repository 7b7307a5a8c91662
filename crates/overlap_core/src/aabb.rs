//! Axis-aligned bounding box with double precision.

use glam::DVec3;

/// Double-precision axis-aligned bounding box.
///
/// The overlap predicate is closed: boxes that merely touch at a face,
/// edge, or corner count as overlapping, matching the triangle predicate
/// used at the BVH leaves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
  /// Minimum corner (inclusive).
  pub min: DVec3,
  /// Maximum corner (inclusive).
  pub max: DVec3,
}

impl Aabb {
  /// Create an AABB from min and max corners.
  ///
  /// # Panics
  /// Debug-asserts that min <= max on all axes.
  pub fn new(min: DVec3, max: DVec3) -> Self {
    debug_assert!(
      min.x <= max.x && min.y <= max.y && min.z <= max.z,
      "AABB min must be <= max on all axes"
    );
    Self { min, max }
  }

  /// Create an AABB with inverted extents, ready for encapsulation.
  pub fn empty() -> Self {
    Self {
      min: DVec3::splat(f64::INFINITY),
      max: DVec3::splat(f64::NEG_INFINITY),
    }
  }

  /// Tight bounds of a triangle.
  pub fn from_triangle(tri: &[DVec3; 3]) -> Self {
    let mut aabb = Self::empty();
    for v in tri {
      aabb.encapsulate(*v);
    }
    aabb
  }

  /// Tight bounds of a point set. Empty input yields `empty()`.
  pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Self {
    let mut aabb = Self::empty();
    for p in points {
      aabb.encapsulate(p);
    }
    aabb
  }

  /// Expand to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: DVec3) {
    self.min = self.min.min(point);
    self.max = self.max.max(point);
  }

  /// Smallest AABB containing both boxes.
  #[inline]
  pub fn union(&self, other: &Aabb) -> Aabb {
    Aabb {
      min: self.min.min(other.min),
      max: self.max.max(other.max),
    }
  }

  /// Check if this AABB overlaps with another.
  ///
  /// Boxes that share any interior or boundary points overlap. An
  /// `empty()` box overlaps nothing.
  #[inline]
  pub fn overlaps(&self, other: &Aabb) -> bool {
    self.min.x <= other.max.x
      && self.max.x >= other.min.x
      && self.min.y <= other.max.y
      && self.max.y >= other.min.y
      && self.min.z <= other.max.z
      && self.max.z >= other.min.z
  }

  /// Get the size of the AABB (max - min).
  #[inline]
  pub fn size(&self) -> DVec3 {
    self.max - self.min
  }

  /// Get the center of the AABB.
  #[inline]
  pub fn center(&self) -> DVec3 {
    (self.min + self.max) * 0.5
  }

  /// Index of the longest axis (0 = x, 1 = y, 2 = z).
  #[inline]
  pub fn longest_axis(&self) -> usize {
    let size = self.size();
    if size.x >= size.y && size.x >= size.z {
      0
    } else if size.y >= size.z {
      1
    } else {
      2
    }
  }

  /// Check if the AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
  }
}

impl Default for Aabb {
  fn default() -> Self {
    Self::empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_triangle() {
    let tri = [
      DVec3::new(0.0, 0.0, 0.0),
      DVec3::new(2.0, 0.0, -1.0),
      DVec3::new(1.0, 3.0, 0.5),
    ];
    let aabb = Aabb::from_triangle(&tri);
    assert_eq!(aabb.min, DVec3::new(0.0, 0.0, -1.0));
    assert_eq!(aabb.max, DVec3::new(2.0, 3.0, 0.5));
  }

  #[test]
  fn test_overlaps_true() {
    let a = Aabb::new(DVec3::ZERO, DVec3::splat(10.0));
    let b = Aabb::new(DVec3::splat(5.0), DVec3::splat(15.0));
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
  }

  #[test]
  fn test_overlaps_touching() {
    // Touching at boundary should count as overlapping
    let a = Aabb::new(DVec3::ZERO, DVec3::splat(10.0));
    let b = Aabb::new(DVec3::splat(10.0), DVec3::splat(20.0));
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
  }

  #[test]
  fn test_overlaps_false() {
    let a = Aabb::new(DVec3::ZERO, DVec3::splat(10.0));
    let b = Aabb::new(DVec3::splat(11.0), DVec3::splat(20.0));
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
  }

  #[test]
  fn test_empty_overlaps_nothing() {
    let empty = Aabb::empty();
    let a = Aabb::new(DVec3::ZERO, DVec3::splat(10.0));
    assert!(!empty.overlaps(&a));
    assert!(!empty.overlaps(&empty));
    assert!(!empty.is_valid());
  }

  #[test]
  fn test_union() {
    let a = Aabb::new(DVec3::ZERO, DVec3::splat(1.0));
    let b = Aabb::new(DVec3::splat(2.0), DVec3::splat(3.0));
    let u = a.union(&b);
    assert_eq!(u.min, DVec3::ZERO);
    assert_eq!(u.max, DVec3::splat(3.0));
  }

  #[test]
  fn test_longest_axis() {
    let aabb = Aabb::new(DVec3::ZERO, DVec3::new(1.0, 5.0, 2.0));
    assert_eq!(aabb.longest_axis(), 1);

    let aabb = Aabb::new(DVec3::ZERO, DVec3::new(4.0, 1.0, 2.0));
    assert_eq!(aabb.longest_axis(), 0);

    let aabb = Aabb::new(DVec3::ZERO, DVec3::new(1.0, 1.0, 2.0));
    assert_eq!(aabb.longest_axis(), 2);
  }

  #[test]
  fn test_center_and_size() {
    let aabb = Aabb::new(DVec3::new(-1.0, -2.0, -3.0), DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(aabb.center(), DVec3::ZERO);
    assert_eq!(aabb.size(), DVec3::new(2.0, 4.0, 6.0));
  }
}
