//! Row-block partition of the vertex set across the peer cohort.
//!
//! Each peer owns `R = ceil(N / P)` consecutive matrix rows; the last peers
//! may own fewer or none when `N` is not a multiple of `R`. Vertex
//! ownership is the unit of work distribution for both distributed
//! algorithms. Matrix reads always use global row indices with stride `N`;
//! only per-peer tables (such as the Prim border) are indexed by the local
//! row offset.

use std::ops::Range;

/// The row-block decomposition for a cohort of a given size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Partition {
    peers: usize,
    vertex_count: usize,
    rows_per_peer: usize,
}

impl Partition {
    /// Builds the partition for `peers` peers over `vertex_count` vertices.
    #[must_use]
    pub fn new(peers: usize, vertex_count: usize) -> Self {
        Self {
            peers,
            vertex_count,
            rows_per_peer: vertex_count.div_ceil(peers),
        }
    }

    /// Returns the nominal block height `R`.
    #[must_use]
    #[rustfmt::skip]
    pub fn rows_per_peer(&self) -> usize { self.rows_per_peer }

    /// Returns the unclipped first row of a peer's block.
    ///
    /// May exceed the vertex count for over-provisioned ranks; callers that
    /// iterate rows should use [`Partition::rows_of`] instead.
    #[must_use]
    pub fn block_start(&self, rank: usize) -> usize {
        rank * self.rows_per_peer
    }

    /// Returns the global row range owned by `rank`, clipped to the graph.
    #[must_use]
    pub fn rows_of(&self, rank: usize) -> Range<usize> {
        let first = self.block_start(rank).min(self.vertex_count);
        let last = (first + self.rows_per_peer).min(self.vertex_count);
        first..last
    }

    /// Returns how many rows `rank` actually owns.
    #[must_use]
    pub fn row_count(&self, rank: usize) -> usize {
        self.rows_of(rank).len()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Partition;

    #[rstest]
    #[case(4, 8, 2)]
    #[case(3, 8, 3)]
    #[case(1, 5, 5)]
    #[case(8, 3, 1)]
    fn block_height_is_ceiling_division(
        #[case] peers: usize,
        #[case] vertices: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(Partition::new(peers, vertices).rows_per_peer(), expected);
    }

    #[test]
    fn ranges_cover_the_graph_without_overlap() {
        let partition = Partition::new(3, 8);
        assert_eq!(partition.rows_of(0), 0..3);
        assert_eq!(partition.rows_of(1), 3..6);
        assert_eq!(partition.rows_of(2), 6..8);
    }

    #[test]
    fn overprovisioned_ranks_own_nothing() {
        let partition = Partition::new(8, 3);
        assert_eq!(partition.rows_of(2), 2..3);
        assert!(partition.rows_of(3).is_empty());
        assert!(partition.rows_of(7).is_empty());
        assert_eq!(partition.row_count(5), 0);
    }

    #[test]
    fn block_start_is_unclipped() {
        let partition = Partition::new(8, 3);
        assert_eq!(partition.block_start(5), 5);
    }
}
