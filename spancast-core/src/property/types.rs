//! Type definitions for the MST property tests.

use crate::graph::DenseGraph;

/// Weight distribution used while generating a fixture graph.
///
/// Each variant stresses a different aspect: tied weights exercise the
/// canonical tiebreak everywhere, dense graphs exercise the merge bounds,
/// sparse graphs exercise rounds that ship next to nothing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range; ties are rare.
    Spread,
    /// Weights drawn from `1..=3`; ties dominate.
    Clustered,
    /// Spanning tree plus almost no extra edges.
    Sparse,
    /// Spanning tree plus many extra edges.
    Dense,
}

/// Cohort sizes every distributed property is checked against.
pub(super) const COHORT_SIZES: [usize; 5] = [1, 2, 3, 4, 8];

/// A generated test graph with the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub graph: DenseGraph,
    pub distribution: WeightDistribution,
    pub seed: u64,
}
