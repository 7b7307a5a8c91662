//! Static bounding-volume hierarchy over a triangle soup.
//!
//! Built once per object per scan and discarded afterwards, so there is
//! no refit/rebuild policy. Top-down median split on the longest axis of
//! the centroid bounds, flat node array, iterative dual-tree overlap
//! query resolved by the exact triangle predicate at the leaves.

use glam::DVec3;

use crate::aabb::Aabb;
use crate::tri_tri::tri_tri_overlap;
use crate::types::GeometrySnapshot;

/// Max triangles per leaf.
const LEAF_SIZE: usize = 4;

#[derive(Clone, Debug)]
enum BvhNode {
  /// Triangles `start..start + count` of the reordered soup.
  Leaf { aabb: Aabb, start: u32, count: u32 },
  /// Two child node indices.
  Internal { aabb: Aabb, left: u32, right: u32 },
}

impl BvhNode {
  #[inline]
  fn aabb(&self) -> &Aabb {
    match self {
      BvhNode::Leaf { aabb, .. } | BvhNode::Internal { aabb, .. } => aabb,
    }
  }
}

/// Bounding-volume hierarchy over one object's world-space triangles.
///
/// A degenerate snapshot (no usable triangles) yields an empty tree that
/// overlaps nothing, including itself.
pub struct Bvh {
  /// Flat node array; the root is the last entry.
  nodes: Vec<BvhNode>,
  /// Triangle soup, reordered during construction.
  tris: Vec<[DVec3; 3]>,
}

impl Bvh {
  /// Build a BVH over the snapshot's fan triangulation.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "bvh::build")
  )]
  pub fn build(snapshot: &GeometrySnapshot) -> Self {
    let mut tris = snapshot.triangles();
    let mut nodes = Vec::new();
    if !tris.is_empty() {
      let end = tris.len();
      build_range(&mut nodes, &mut tris, 0, end);
    }
    Self { nodes, tris }
  }

  /// True if the tree holds no triangles.
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Number of triangles indexed by the tree.
  pub fn triangle_count(&self) -> usize {
    self.tris.len()
  }

  /// World-space bounds of the whole tree, if non-empty.
  pub fn bounds(&self) -> Option<Aabb> {
    self.root().map(|r| *self.nodes[r].aabb())
  }

  /// True iff at least one triangle of `self` intersects at least one
  /// triangle of `other`. Touching counts as overlap.
  pub fn overlaps(&self, other: &Bvh) -> bool {
    let (Some(root_a), Some(root_b)) = (self.root(), other.root()) else {
      return false;
    };

    let mut stack = vec![(root_a, root_b)];
    while let Some((ia, ib)) = stack.pop() {
      let na = &self.nodes[ia];
      let nb = &other.nodes[ib];
      if !na.aabb().overlaps(nb.aabb()) {
        continue;
      }

      match (na, nb) {
        (
          BvhNode::Leaf { start: sa, count: ca, .. },
          BvhNode::Leaf { start: sb, count: cb, .. },
        ) => {
          for ta in &self.tris[*sa as usize..(*sa + *ca) as usize] {
            for tb in &other.tris[*sb as usize..(*sb + *cb) as usize] {
              if tri_tri_overlap(ta, tb) {
                return true;
              }
            }
          }
        }
        (BvhNode::Internal { left, right, .. }, _) => {
          stack.push((*left as usize, ib));
          stack.push((*right as usize, ib));
        }
        (BvhNode::Leaf { .. }, BvhNode::Internal { left, right, .. }) => {
          stack.push((ia, *left as usize));
          stack.push((ia, *right as usize));
        }
      }
    }

    false
  }

  fn root(&self) -> Option<usize> {
    self.nodes.len().checked_sub(1)
  }
}

/// Build the subtree over `tris[start..end]`, returning its node index.
/// Children are pushed before their parent, so the root ends up last.
fn build_range(
  nodes: &mut Vec<BvhNode>,
  tris: &mut [[DVec3; 3]],
  start: usize,
  end: usize,
) -> u32 {
  let aabb = tri_bounds(&tris[start..end]);
  let count = end - start;

  if count <= LEAF_SIZE {
    nodes.push(BvhNode::Leaf {
      aabb,
      start: start as u32,
      count: count as u32,
    });
    return (nodes.len() - 1) as u32;
  }

  // Split at the centroid median of the longest centroid-bounds axis.
  let centroid_bounds = Aabb::from_points(tris[start..end].iter().map(centroid));
  let axis = centroid_bounds.longest_axis();
  let mid = start + count / 2;
  tris[start..end].select_nth_unstable_by(count / 2, |a, b| {
    centroid(a)[axis].total_cmp(&centroid(b)[axis])
  });

  let left = build_range(nodes, tris, start, mid);
  let right = build_range(nodes, tris, mid, end);
  nodes.push(BvhNode::Internal { aabb, left, right });
  (nodes.len() - 1) as u32
}

#[inline]
fn centroid(tri: &[DVec3; 3]) -> DVec3 {
  (tri[0] + tri[1] + tri[2]) / 3.0
}

fn tri_bounds(tris: &[[DVec3; 3]]) -> Aabb {
  let mut aabb = Aabb::empty();
  for tri in tris {
    for v in tri {
      aabb.encapsulate(*v);
    }
  }
  aabb
}

#[cfg(test)]
#[path = "bvh_test.rs"]
mod bvh_test;
