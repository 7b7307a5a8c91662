//! Triangle-triangle overlap predicate.
//!
//! Separating-axis test in the style of Möller's 1997 interval test:
//! plane-side rejection for each triangle, nine cross-edge axes, and a
//! dedicated coplanar branch that projects to the dominant plane and runs
//! a 2D SAT over the six edge normals.
//!
//! Tolerance policy: exact f64 comparisons, no epsilon. Touching or
//! coincident geometry counts as overlapping (closed predicate), matching
//! `Aabb::overlaps`. Exactly-degenerate (zero-area) triangles never
//! report overlap.

use glam::{DVec2, DVec3};

/// Returns true if triangles T1 = (p0, p1, p2) and T2 = (q0, q1, q2)
/// share at least one point.
pub fn tri_tri_overlap(t1: &[DVec3; 3], t2: &[DVec3; 3]) -> bool {
  let [p0, p1, p2] = *t1;
  let [q0, q1, q2] = *t2;

  let e1 = p1 - p0;
  let e2 = p2 - p0;
  let n1 = e1.cross(e2);

  let f1 = q1 - q0;
  let f2 = q2 - q0;
  let n2 = f1.cross(f2);

  // Zero-area triangles carry no surface to intersect.
  if n1 == DVec3::ZERO || n2 == DVec3::ZERO {
    return false;
  }

  // Plane of T1 against the vertices of T2.
  let d0 = n1.dot(q0 - p0);
  let d1 = n1.dot(q1 - p0);
  let d2 = n1.dot(q2 - p0);
  if (d0 > 0.0 && d1 > 0.0 && d2 > 0.0) || (d0 < 0.0 && d1 < 0.0 && d2 < 0.0) {
    return false;
  }
  if d0 == 0.0 && d1 == 0.0 && d2 == 0.0 {
    return coplanar_tri_tri(t1, t2, n1);
  }

  // Plane of T2 against the vertices of T1.
  let g0 = n2.dot(p0 - q0);
  let g1 = n2.dot(p1 - q0);
  let g2 = n2.dot(p2 - q0);
  if (g0 > 0.0 && g1 > 0.0 && g2 > 0.0) || (g0 < 0.0 && g1 < 0.0 && g2 < 0.0) {
    return false;
  }

  // Nine cross-edge axes. Zero axes come from parallel edge pairs and
  // separate nothing, so they are skipped.
  let edges1 = [e1, p2 - p1, p0 - p2];
  let edges2 = [f1, q2 - q1, q0 - q2];
  for ea in &edges1 {
    for eb in &edges2 {
      let axis = ea.cross(*eb);
      if axis == DVec3::ZERO {
        continue;
      }
      let (min1, max1) = project(axis, t1);
      let (min2, max2) = project(axis, t2);
      if max1 < min2 || max2 < min1 {
        return false;
      }
    }
  }

  true
}

/// Project a triangle onto `axis`, returning (min, max).
#[inline]
fn project(axis: DVec3, tri: &[DVec3; 3]) -> (f64, f64) {
  let a = axis.dot(tri[0]);
  let b = axis.dot(tri[1]);
  let c = axis.dot(tri[2]);
  (a.min(b).min(c), a.max(b).max(c))
}

/// Coplanar case: drop the dominant normal component and run a 2D SAT
/// over the six edge normals of the projected triangles.
fn coplanar_tri_tri(t1: &[DVec3; 3], t2: &[DVec3; 3], n: DVec3) -> bool {
  let na = n.abs();
  let flat = |v: DVec3| -> DVec2 {
    if na.x >= na.y && na.x >= na.z {
      DVec2::new(v.y, v.z)
    } else if na.y >= na.z {
      DVec2::new(v.x, v.z)
    } else {
      DVec2::new(v.x, v.y)
    }
  };

  let a = [flat(t1[0]), flat(t1[1]), flat(t1[2])];
  let b = [flat(t2[0]), flat(t2[1]), flat(t2[2])];

  for tri in [&a, &b] {
    for i in 0..3 {
      let edge = tri[(i + 1) % 3] - tri[i];
      let axis = DVec2::new(-edge.y, edge.x);
      if axis == DVec2::ZERO {
        continue;
      }
      let (min1, max1) = project_2d(axis, &a);
      let (min2, max2) = project_2d(axis, &b);
      if max1 < min2 || max2 < min1 {
        return false;
      }
    }
  }

  true
}

#[inline]
fn project_2d(axis: DVec2, tri: &[DVec2; 3]) -> (f64, f64) {
  let a = axis.dot(tri[0]);
  let b = axis.dot(tri[1]);
  let c = axis.dot(tri[2]);
  (a.min(b).min(c), a.max(b).max(c))
}

#[cfg(test)]
#[path = "tri_tri_test.rs"]
mod tri_tri_test;
