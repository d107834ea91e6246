//! Sequential Kruskal: sort all edges, filter through union-find.

use crate::edge::Edge;
use crate::graph::DenseGraph;
use crate::union_find::kruskal_select;

/// Computes the MST with Kruskal's algorithm.
///
/// The returned edges are in admission order, which for a canonically
/// sorted scan is weight-increasing with lexicographic tiebreaks. For a
/// disconnected graph this degrades to a minimum spanning forest of fewer
/// than `N - 1` edges.
#[must_use]
pub fn kruskal_mst(graph: &DenseGraph) -> Vec<Edge> {
    let mut edges = graph.upper_triangle_edges();
    edges.sort_unstable();
    kruskal_select(graph.vertex_count(), &edges)
}
