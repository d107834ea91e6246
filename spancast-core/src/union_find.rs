//! Disjoint-set forest and the shared MST selection kernel.
//!
//! [`kruskal_select`] is the single place where a sorted edge list becomes a
//! spanning forest. Sequential Kruskal calls it once on the full edge list;
//! distributed Kruskal calls it for every local forest, every bipartite
//! cross forest, and every merge round of the tournament. Determinism of
//! the whole system rests on this kernel scanning a canonically sorted list.

use crate::edge::Edge;

/// Disjoint-set forest with path compression and union by rank.
#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Two-pass find: locate the root, then point the whole chain at it.
    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both already share a root. The lower-rank root
    /// is linked under the higher-rank one; rank grows only on a tie.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        if self.rank[left] < self.rank[right] {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if self.rank[left] == self.rank[right] {
            self.rank[left] = self.rank[left].saturating_add(1);
        }
        true
    }
}

/// Scans a canonically sorted edge list and keeps the spanning subset.
///
/// Admits an edge iff its endpoints are in distinct components, stopping
/// once `vertex_count - 1` edges are accepted or the list is exhausted.
/// The returned edges are in admission order, which for a sorted input is
/// itself sorted.
pub(crate) fn kruskal_select(vertex_count: usize, sorted_edges: &[Edge]) -> Vec<Edge> {
    let mut components = DisjointSet::new(vertex_count);
    let mut tree = Vec::new();
    for &edge in sorted_edges {
        if tree.len() + 1 == vertex_count {
            break;
        }
        if components.union(edge.i(), edge.j()) {
            tree.push(edge);
        }
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::{DisjointSet, kruskal_select};
    use crate::edge::Edge;

    #[test]
    fn find_compresses_paths() {
        let mut set = DisjointSet::new(4);
        assert!(set.union(0, 1));
        assert!(set.union(1, 2));
        assert!(set.union(2, 3));
        let root = set.find(3);
        assert_eq!(set.find(0), root);
        // After compression every node points directly at the root.
        assert!(set.parent.iter().all(|&p| p == root));
    }

    #[test]
    fn union_rejects_cycles() {
        let mut set = DisjointSet::new(3);
        assert!(set.union(0, 1));
        assert!(set.union(1, 2));
        assert!(!set.union(0, 2));
    }

    #[test]
    fn select_keeps_admission_order() {
        let edges = vec![
            Edge::new(0, 1, 1),
            Edge::new(0, 2, 1),
            Edge::new(1, 2, 2),
            Edge::new(1, 3, 2),
            Edge::new(2, 3, 2),
        ];
        let tree = kruskal_select(4, &edges);
        assert_eq!(
            tree,
            vec![Edge::new(0, 1, 1), Edge::new(0, 2, 1), Edge::new(1, 3, 2)]
        );
    }

    #[test]
    fn select_stops_after_spanning() {
        let edges = vec![
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 2),
            Edge::new(0, 2, 3),
        ];
        let tree = kruskal_select(3, &edges);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn select_returns_forest_for_disconnected_input() {
        let edges = vec![Edge::new(0, 1, 1), Edge::new(2, 3, 1)];
        let tree = kruskal_select(4, &edges);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn select_handles_single_vertex() {
        assert!(kruskal_select(1, &[]).is_empty());
    }
}
