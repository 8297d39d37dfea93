use itertools::Itertools;
use rayon::prelude::*;

use crate::edge::Edge;
use crate::point::Point;

/// Every unordered pair of points as an edge, sorted ascending by distance.
///
/// Among equal distances the pair with the smaller first index, then the
/// smaller second index, comes first. O(n^2) time and space.
#[tracing::instrument(skip_all, fields(n = points.len()))]
pub fn all_edges(points: &[Point]) -> Vec<Edge> {
    let mut edges = (0..points.len())
        .tuple_combinations()
        .map(|(i, j)| Edge::between(points, i, j))
        .collect::<Vec<_>>();

    // The edge order is total, so an unstable sort is still deterministic.
    edges.par_sort_unstable();

    tracing::debug!(edges = edges.len(), "generated all pairwise edges");
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(20, 190)]
    fn yields_every_pair_once(#[case] n: usize, #[case] expected: usize) {
        let points = crate::fixtures::scatter(n, 7, 100);
        let edges = all_edges(&points);
        assert_eq!(edges.len(), expected);
        assert!(edges.iter().all(|e| e.a < e.b));
        assert_eq!(edges.iter().map(Edge::key).unique().count(), expected);
    }

    #[test]
    fn sorted_ascending() {
        let points = crate::fixtures::scatter(60, 11, 50);
        let edges = all_edges(&points);
        assert!(edges.windows(2).all(|w| w[0].dist_sq <= w[1].dist_sq));
    }

    #[test]
    fn ties_follow_enumeration_order() {
        let points = vec![Point::ZERO; 4];
        let keys = all_edges(&points).iter().map(Edge::key).collect::<Vec<_>>();
        assert_eq!(keys, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn closest_example_pair_comes_first() {
        let points = [
            Point::new(162, 817, 812),
            Point::new(57, 618, 57),
            Point::new(425, 690, 689),
        ];
        let edges = all_edges(&points);
        assert_eq!(edges[0].key(), (0, 2));
    }
}
