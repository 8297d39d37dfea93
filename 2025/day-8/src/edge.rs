use std::cmp::Ordering;

use crate::point::{squared_distance, Point};

/// A candidate connection between two junction boxes.
///
/// Edges order by distance, then by `(a, b)`. For normalized edges (`a < b`)
/// that is exactly the pair enumeration order, so any sort over edges is
/// deterministic and matches a stable sort of the enumerated pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub dist_sq: i64,
}

impl Edge {
    /// Builds a normalized edge (smaller index first).
    pub fn new(i: usize, j: usize, dist_sq: i64) -> Self {
        let (a, b) = normalize(i, j);
        Self { a, b, dist_sq }
    }

    /// Edge between points `i` and `j`, measuring their squared distance.
    pub fn between(points: &[Point], i: usize, j: usize) -> Self {
        Self::new(i, j, squared_distance(points[i], points[j]))
    }

    pub fn key(&self) -> (usize, usize) {
        (self.a, self.b)
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist_sq
            .cmp(&other.dist_sq)
            .then(self.a.cmp(&other.a))
            .then(self.b.cmp(&other.b))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns the undirected key with the smaller index first.
#[inline]
pub fn normalize(i: usize, j: usize) -> (usize, usize) {
    if i < j {
        (i, j)
    } else {
        (j, i)
    }
}
