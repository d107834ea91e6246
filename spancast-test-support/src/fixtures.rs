//! Adjacency-matrix fixtures: the concrete scenario graphs every algorithm
//! must reproduce, plus random connected graphs for property tests.
//!
//! Every builder returns `(vertex_count, row_major_weights)` with a
//! symmetric matrix and a zero diagonal.

use rand::Rng;
use rand::rngs::SmallRng;

/// Builds a symmetric matrix from canonical `(i, j, w)` triples.
///
/// # Panics
///
/// Panics when a triple references a vertex outside the graph or a zero
/// weight, or when the same pair appears twice with different weights —
/// all fixture bugs worth failing loudly on.
#[must_use]
pub fn matrix_from_edges(vertex_count: usize, edges: &[(usize, usize, u32)]) -> (usize, Vec<u32>) {
    let mut adj = vec![0; vertex_count * vertex_count];
    for &(i, j, w) in edges {
        assert!(i < vertex_count && j < vertex_count, "vertex out of range");
        assert!(i != j, "self-loops are not representable");
        assert!(w > 0, "zero weight means no edge");
        let existing = adj[i * vertex_count + j];
        assert!(
            existing == 0 || existing == w,
            "conflicting weights for ({i}, {j})"
        );
        adj[i * vertex_count + j] = w;
        adj[j * vertex_count + i] = w;
    }
    (vertex_count, adj)
}

/// Triangle with a unique MST: edges (0,1,1), (1,2,2), (0,2,3).
#[must_use]
pub fn triangle() -> (usize, Vec<u32>) {
    matrix_from_edges(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 3)])
}

/// Four vertices with tied weights, so the tree is fixed only by the
/// endpoint tiebreak: (0,1,1), (0,2,1), (1,3,2), (2,3,2).
#[must_use]
pub fn tie_square() -> (usize, Vec<u32>) {
    matrix_from_edges(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 2), (2, 3, 2)])
}

/// Five-vertex star: vertex 0 joined to `k` with weight `5 - k`.
#[must_use]
pub fn star() -> (usize, Vec<u32>) {
    matrix_from_edges(5, &[(0, 1, 4), (0, 2, 3), (0, 3, 2), (0, 4, 1)])
}

/// Path `0 - 1 - ... - (n-1)` where edge `(i, i+1)` weighs `i + 1`.
#[must_use]
pub fn path(vertex_count: usize) -> (usize, Vec<u32>) {
    let edges: Vec<_> = (0..vertex_count.saturating_sub(1))
        .map(|i| {
            let w = u32::try_from(i).expect("fixture sizes are small") + 1;
            (i, i + 1, w)
        })
        .collect();
    matrix_from_edges(vertex_count, &edges)
}

/// Random connected graph: a spanning tree over a shuffled vertex order,
/// plus `extra_edges` additional random edges. Weights are drawn from
/// `1..=max_weight`, so small `max_weight` values force plenty of ties.
///
/// # Panics
///
/// Panics when `vertex_count` is zero or `max_weight` is zero.
#[must_use]
pub fn random_connected(
    rng: &mut SmallRng,
    vertex_count: usize,
    extra_edges: usize,
    max_weight: u32,
) -> (usize, Vec<u32>) {
    assert!(vertex_count > 0, "a graph needs at least one vertex");
    assert!(max_weight > 0, "weights must be positive");

    let mut order: Vec<usize> = (0..vertex_count).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    let mut adj = vec![0; vertex_count * vertex_count];
    let mut connect = |adj: &mut Vec<u32>, a: usize, b: usize, w: u32| {
        adj[a * vertex_count + b] = w;
        adj[b * vertex_count + a] = w;
    };

    for pair in order.windows(2) {
        let w = rng.gen_range(1..=max_weight);
        connect(&mut adj, pair[0], pair[1], w);
    }

    for _ in 0..extra_edges {
        let a = rng.gen_range(0..vertex_count);
        let b = rng.gen_range(0..vertex_count);
        if a != b && adj[a * vertex_count + b] == 0 {
            let w = rng.gen_range(1..=max_weight);
            connect(&mut adj, a, b, w);
        }
    }

    (vertex_count, adj)
}
