//! Strategy builders for the MST property tests.
//!
//! Graphs are always connected (disconnected inputs belong to the
//! dedicated error-path tests) and sized so that the cohort shapes in
//! [`COHORT_SIZES`](super::types::COHORT_SIZES) cover empty row blocks,
//! single-row blocks, and multi-row blocks.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use spancast_test_support::fixtures;

use crate::graph::DenseGraph;

use super::types::{GraphFixture, WeightDistribution};

/// Minimum generated vertex count.
const MIN_VERTICES: usize = 2;
/// Maximum generated vertex count, kept small because every case runs the
/// distributed algorithms across several cohort shapes.
const MAX_VERTICES: usize = 20;

pub(super) fn fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, seed, &mut rng)
    })
}

fn distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        2 => Just(WeightDistribution::Spread),
        3 => Just(WeightDistribution::Clustered),
        2 => Just(WeightDistribution::Sparse),
        2 => Just(WeightDistribution::Dense),
    ]
}

fn generate_fixture(
    distribution: WeightDistribution,
    seed: u64,
    rng: &mut SmallRng,
) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let (extra_edges, max_weight) = match distribution {
        WeightDistribution::Spread => (vertex_count, 1000),
        WeightDistribution::Clustered => (vertex_count, 3),
        WeightDistribution::Sparse => (vertex_count / 4, 100),
        WeightDistribution::Dense => (vertex_count * vertex_count, 100),
    };

    let (n, adj) = fixtures::random_connected(rng, vertex_count, extra_edges, max_weight);
    let graph = DenseGraph::new(n, adj).expect("generated matrices are valid");

    GraphFixture {
        graph,
        distribution,
        seed,
    }
}
