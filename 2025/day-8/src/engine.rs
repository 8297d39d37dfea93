use crate::brute_force::all_edges;
use crate::candidates::candidate_edges;
use crate::edge::Edge;
use crate::kdtree::KdTree;
use crate::point::Point;
use crate::union_find::UnionFind;

// -----------------------------------------------------------------------------
// Constants & Configuration
// -----------------------------------------------------------------------------

/// Connections made before the circuit sizes are sampled.
pub const DEFAULT_CONNECTIONS: usize = 1000;

/// Neighbors gathered per point on the indexed path.
pub const DEFAULT_NEIGHBORS: usize = 50;

/// How many of the largest circuits contribute to the sampled product.
const TOP_CIRCUITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterConfig {
    /// Edges processed (merged or not) before sampling circuit sizes.
    pub connections: usize,
    /// `k` for the nearest-neighbor candidate search. Clamped to `n - 1`.
    pub neighbors: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            connections: DEFAULT_CONNECTIONS,
            neighbors: DEFAULT_NEIGHBORS,
        }
    }
}

impl ClusterConfig {
    pub fn with_connections(mut self, connections: usize) -> Self {
        self.connections = connections;
        self
    }

    pub fn with_neighbors(mut self, neighbors: usize) -> Self {
        self.neighbors = neighbors;
        self
    }
}

// -----------------------------------------------------------------------------
// Clustering
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClusterOutcome {
    /// Product of the three largest circuit sizes once the connection budget
    /// was spent (or the edges ran out). 0 for fewer than two points.
    pub top_three_product: u64,
    /// The merge that left a single circuit, if that ever happened.
    pub final_merge: Option<Edge>,
    /// Product of the x-coordinates of the two points in `final_merge`.
    pub final_merge_x_product: Option<i64>,
    /// Edges consumed before the run stopped.
    pub edges_processed: usize,
    /// Successful unions performed.
    pub merges: usize,
}

/// Drives union-find merges over `edges` in the order given.
///
/// Every edge counts towards `connections` whether or not it merges anything.
/// Circuit sizes are sampled exactly when that count is reached; if the run
/// stops first (single circuit, or no edges left) the final state is sampled.
/// Iteration stops as soon as everything is one circuit.
pub fn cluster<I>(points: &[Point], edges: I, connections: usize) -> ClusterOutcome
where
    I: IntoIterator<Item = Edge>,
{
    let n = points.len();
    if n < 2 {
        tracing::debug!(points = n, "nothing to connect");
        return ClusterOutcome::default();
    }

    let mut dsu = UnionFind::new(n);
    let mut sampled = (connections == 0).then(|| dsu.top_sizes_product(TOP_CIRCUITS));
    let mut processed = 0;
    let mut merges = 0;
    let mut last_merge = None;

    for edge in edges {
        if dsu.union(edge.a, edge.b) {
            merges += 1;
            last_merge = Some(edge);
        }
        processed += 1;

        if processed == connections {
            let product = dsu.top_sizes_product(TOP_CIRCUITS);
            tracing::debug!(processed, circuits = dsu.components(), product, "sampled circuits");
            sampled = Some(product);
        }

        if dsu.components() == 1 {
            tracing::debug!(processed, "all junction boxes share one circuit");
            break;
        }
    }

    let top_three_product = sampled.unwrap_or_else(|| {
        tracing::debug!(processed, connections, "stopped before the connection budget");
        dsu.top_sizes_product(TOP_CIRCUITS)
    });

    let final_merge = last_merge.filter(|_| dsu.components() == 1);
    let final_merge_x_product = final_merge.map(|e| points[e.a].x * points[e.b].x);

    ClusterOutcome {
        top_three_product,
        final_merge,
        final_merge_x_product,
        edges_processed: processed,
        merges,
    }
}

/// Clusters over every pairwise edge. Both answers are exact.
#[tracing::instrument(skip(points), fields(n = points.len()))]
pub fn cluster_brute_force(points: &[Point], connections: usize) -> ClusterOutcome {
    let edges = all_edges(points);
    cluster(points, edges, connections)
}

/// Clusters over the k-d tree candidate edges with the default neighbor count.
///
/// Only the top-three product is reported: the candidate set is not trusted to
/// contain the edge that finally joins everything.
pub fn cluster_with_index(points: &[Point], connections: usize) -> u64 {
    cluster_with_index_config(points, &ClusterConfig::default().with_connections(connections))
}

#[tracing::instrument(skip(points), fields(n = points.len()))]
pub fn cluster_with_index_config(points: &[Point], config: &ClusterConfig) -> u64 {
    if points.len() < 2 {
        return 0;
    }

    let tree = KdTree::build(points);
    let k = config.neighbors.min(points.len() - 1);
    let edges = candidate_edges(points, &tree, k);

    cluster(points, edges, config.connections).top_three_product
}
