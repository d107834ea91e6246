//! Canonical undirected edge representation and its total order.
//!
//! Every sort, heap comparison, and global-minimum selection in the crate
//! uses the single lexicographic order `(weight, i, j)` defined here. The
//! non-weight tiebreak keeps the selected tree deterministic whenever
//! several spanning trees share a total weight: all four algorithms resolve
//! ties through this order and therefore agree on the result.

use std::cmp::Ordering;

/// An undirected weighted edge in canonical form (`i <= j`).
///
/// [`Edge::new`] is the only way to build one, so no other code can
/// introduce a reversed orientation. A weight of zero in the adjacency
/// matrix means "no edge"; edges that exist always carry `weight > 0`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    i: usize,
    j: usize,
    w: u32,
}

impl Edge {
    /// Creates a canonical edge; the endpoint argument order is irrelevant.
    #[must_use]
    pub fn new(a: usize, b: usize, w: u32) -> Self {
        let (i, j) = if a <= b { (a, b) } else { (b, a) };
        Self { i, j, w }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn i(&self) -> usize { self.i }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn j(&self) -> usize { self.j }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> u32 { self.w }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.w
            .cmp(&other.w)
            .then_with(|| self.i.cmp(&other.i))
            .then_with(|| self.j.cmp(&other.j))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
