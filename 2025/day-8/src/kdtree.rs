use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::point::{axis_value, squared_distance, Point, DIMENSIONS};

/// A point found by a nearest-neighbor query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub index: usize,
    pub dist_sq: i64,
}

impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist_sq
            .cmp(&other.dist_sq)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Bounded best-k container kept sorted ascending by distance.
///
/// The worst kept candidate is always the last entry, so it can be read in
/// O(1) and replaced with a single O(k) shift. Reusable across queries.
#[derive(Debug, Clone)]
pub struct KnnBuffer {
    neighbors: Vec<Neighbor>,
    k: usize,
}

impl KnnBuffer {
    pub fn new(k: usize) -> Self {
        Self {
            neighbors: Vec::with_capacity(k),
            k,
        }
    }

    pub fn capacity(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.neighbors.len() >= self.k
    }

    pub fn clear(&mut self) {
        self.neighbors.clear();
    }

    /// Distance of the k-th best candidate, or `i64::MAX` while not full.
    #[inline]
    pub fn worst(&self) -> i64 {
        if !self.is_full() {
            i64::MAX
        } else {
            // A zero-capacity buffer never accepts anything.
            self.neighbors.last().map_or(i64::MIN, |n| n.dist_sq)
        }
    }

    /// Offers a candidate. Returns `true` if it was kept.
    ///
    /// Once full, only a strictly closer candidate evicts the current worst.
    pub fn offer(&mut self, index: usize, dist_sq: i64) -> bool {
        if self.is_full() {
            if dist_sq >= self.worst() {
                return false;
            }
            self.neighbors.pop();
        }

        let pos = self.neighbors.partition_point(|n| n.dist_sq <= dist_sq);
        self.neighbors.insert(pos, Neighbor { index, dist_sq });
        true
    }

    /// Current candidates, closest first.
    pub fn as_slice(&self) -> &[Neighbor] {
        &self.neighbors
    }

    pub fn into_vec(self) -> Vec<Neighbor> {
        self.neighbors
    }
}

#[derive(Debug)]
struct Node {
    point: Point,
    /// Original index in the input slice.
    index: usize,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

/// A 3-dimensional k-d tree over an immutable point set.
///
/// The splitting axis at depth `d` is `d % 3` (x, y, z, x, ...). Each node stores
/// the median of its subset along that axis, so the tree is balanced.
#[derive(Debug, Default)]
pub struct KdTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl KdTree {
    #[tracing::instrument(skip_all, fields(n = points.len()))]
    pub fn build(points: &[Point]) -> Self {
        let mut indices = (0..points.len()).collect::<Vec<_>>();
        let root = Self::build_recursive(points, &mut indices, 0);
        Self {
            root,
            len: points.len(),
        }
    }

    fn build_recursive(points: &[Point], indices: &mut [usize], depth: usize) -> Option<Box<Node>> {
        if indices.is_empty() {
            return None;
        }

        let axis = depth % DIMENSIONS;
        indices.sort_by_key(|&i| axis_value(points[i], axis));

        let median = indices.len() / 2;
        let index = indices[median];
        let (left, rest) = indices.split_at_mut(median);
        let right = &mut rest[1..];

        Some(Box::new(Node {
            point: points[index],
            index,
            left: Self::build_recursive(points, left, depth + 1),
            right: Self::build_recursive(points, right, depth + 1),
        }))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        fn walk(node: &Option<Box<Node>>) -> usize {
            node.as_ref()
                .map_or(0, |n| 1 + walk(&n.left).max(walk(&n.right)))
        }
        walk(&self.root)
    }

    /// The `k` points closest to `query`, closest first, skipping `exclude`.
    pub fn k_nearest(&self, query: Point, k: usize, exclude: Option<usize>) -> Vec<Neighbor> {
        let mut buf = KnnBuffer::new(k);
        self.k_nearest_into(query, exclude, &mut buf);
        buf.into_vec()
    }

    /// Like [`KdTree::k_nearest`], reusing `buf` (and its capacity as `k`).
    pub fn k_nearest_into<'b>(
        &self,
        query: Point,
        exclude: Option<usize>,
        buf: &'b mut KnnBuffer,
    ) -> &'b [Neighbor] {
        self.fill(query, exclude, buf);
        buf.as_slice()
    }

    /// Runs a query into `buf`, returning how many nodes were visited.
    fn fill(&self, query: Point, exclude: Option<usize>, buf: &mut KnnBuffer) -> usize {
        buf.clear();
        match &self.root {
            Some(root) if buf.capacity() > 0 => Self::search(root, query, 0, exclude, buf),
            _ => 0,
        }
    }

    fn search(
        node: &Node,
        query: Point,
        depth: usize,
        exclude: Option<usize>,
        buf: &mut KnnBuffer,
    ) -> usize {
        let mut visited = 1;
        if exclude != Some(node.index) {
            buf.offer(node.index, squared_distance(query, node.point));
        }

        let axis = depth % DIMENSIONS;
        let delta = axis_value(query, axis) - axis_value(node.point, axis);

        // Search the side containing the query point first
        let (near, far) = if delta < 0 {
            (&node.left, &node.right)
        } else {
            (&node.right, &node.left)
        };

        if let Some(near) = near {
            visited += Self::search(near, query, depth + 1, exclude, buf);
        }

        // The other side can only hold something closer if the splitting plane is.
        if let Some(far) = far {
            if delta * delta < buf.worst() {
                visited += Self::search(far, query, depth + 1, exclude, buf);
            }
        }

        visited
    }

    /// Max-heap variant of [`KdTree::k_nearest`]. Same pruning rule, same
    /// distances; ties between equidistant points may resolve differently.
    pub fn k_nearest_heap(&self, query: Point, k: usize, exclude: Option<usize>) -> Vec<Neighbor> {
        if k == 0 {
            return Vec::new();
        }

        let mut heap = BinaryHeap::with_capacity(k + 1);
        if let Some(root) = &self.root {
            Self::search_heap(root, query, 0, k, exclude, &mut heap);
        }
        heap.into_sorted_vec()
    }

    fn search_heap(
        node: &Node,
        query: Point,
        depth: usize,
        k: usize,
        exclude: Option<usize>,
        heap: &mut BinaryHeap<Neighbor>,
    ) {
        if exclude != Some(node.index) {
            let dist_sq = squared_distance(query, node.point);
            if heap.len() < k {
                heap.push(Neighbor {
                    index: node.index,
                    dist_sq,
                });
            } else if heap.peek().is_some_and(|worst| dist_sq < worst.dist_sq) {
                heap.pop();
                heap.push(Neighbor {
                    index: node.index,
                    dist_sq,
                });
            }
        }

        let axis = depth % DIMENSIONS;
        let delta = axis_value(query, axis) - axis_value(node.point, axis);
        let (near, far) = if delta < 0 {
            (&node.left, &node.right)
        } else {
            (&node.right, &node.left)
        };

        if let Some(near) = near {
            Self::search_heap(near, query, depth + 1, k, exclude, heap);
        }

        if let Some(far) = far {
            let worst = if heap.len() < k {
                i64::MAX
            } else {
                heap.peek().map_or(i64::MAX, |n| n.dist_sq)
            };
            if delta * delta < worst {
                Self::search_heap(far, query, depth + 1, k, exclude, heap);
            }
        }
    }
}
