use std::collections::HashMap;

use rayon::prelude::*;

use crate::edge::{normalize, Edge};
use crate::kdtree::{KdTree, KnnBuffer};
use crate::point::Point;

/// Candidate edges from each point's `k` nearest neighbors, sorted ascending.
///
/// Each undirected pair appears once, keeping the smallest distance observed
/// from either direction. Only pairs that show up in at least one top-k list
/// are present, so this is a subset of [`crate::brute_force::all_edges`] in the
/// same order.
#[tracing::instrument(skip_all, fields(n = points.len(), k = k))]
pub fn candidate_edges(points: &[Point], tree: &KdTree, k: usize) -> Vec<Edge> {
    let mut buf = KnnBuffer::new(k);
    let mut best: HashMap<(usize, usize), i64> = HashMap::with_capacity(points.len() * k);

    for (i, &point) in points.iter().enumerate() {
        for neighbor in tree.k_nearest_into(point, Some(i), &mut buf) {
            best.entry(normalize(i, neighbor.index))
                .and_modify(|dist_sq| *dist_sq = (*dist_sq).min(neighbor.dist_sq))
                .or_insert(neighbor.dist_sq);
        }
    }

    let mut edges = best
        .into_iter()
        .map(|((a, b), dist_sq)| Edge { a, b, dist_sq })
        .collect::<Vec<_>>();

    // HashMap iteration order is arbitrary; the total edge order makes this deterministic.
    edges.par_sort_unstable();

    tracing::debug!(edges = edges.len(), "collected candidate edges");
    edges
}
