/// Disjoint Set Union (DSU) over point indices with path compression and union by rank.
///
/// Tracks the number of live components so the clustering loop can tell when
/// everything has collapsed into a single circuit.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    /// Tracks how many disjoint sets currently exist.
    components: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the root of the set containing `i`, repointing every node on the
    /// walk directly at that root.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn find(&mut self, i: usize) -> usize {
        assert!(i < self.len(), "index {i} out of range for {} elements", self.len());

        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Unifies sets. Returns `true` if a merge actually occurred (sets were disjoint).
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let mut root_i = self.find(i);
        let mut root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        // Equal ranks attach j's root under i's root.
        if self.rank[root_i] < self.rank[root_j] {
            std::mem::swap(&mut root_i, &mut root_j);
        }

        self.parent[root_j] = root_i;
        if self.rank[root_i] == self.rank[root_j] {
            self.rank[root_i] += 1;
        }
        self.components -= 1;
        true
    }

    /// Sizes of every current component, in no particular order.
    pub fn component_sizes(&mut self) -> Vec<usize> {
        let mut counts = vec![0usize; self.len()];
        for i in 0..self.len() {
            let root = self.find(i);
            counts[root] += 1;
        }
        counts.into_iter().filter(|&count| count > 0).collect()
    }

    /// Product of the `k` largest component sizes.
    ///
    /// With fewer than `k` components only the available sizes contribute.
    /// An empty structure yields 0.
    pub fn top_sizes_product(&mut self, k: usize) -> u64 {
        if self.is_empty() {
            return 0;
        }

        let mut sizes = self.component_sizes();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.iter().take(k).map(|&size| size as u64).product()
    }
}
