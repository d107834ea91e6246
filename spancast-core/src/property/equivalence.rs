//! Property 1: all four algorithms agree.
//!
//! Sequential Kruskal is the oracle. Sequential Prim must produce the same
//! edge multiset; distributed Kruskal must reproduce the oracle's exact
//! sequence (both admit in canonical sorted order); distributed Prim must
//! reproduce sequential Prim's exact sequence (identical vertex join
//! order). Checked across every cohort shape in `COHORT_SIZES`.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::edge::Edge;
use crate::run::{Algorithm, run_local};
use crate::sequential::{kruskal_mst, prim_mst};

use super::types::{COHORT_SIZES, GraphFixture};

fn sorted(edges: &[Edge]) -> Vec<Edge> {
    let mut edges = edges.to_vec();
    edges.sort_unstable();
    edges
}

pub(super) fn run_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let oracle = kruskal_mst(&fixture.graph);
    let context = |detail: &str| {
        format!(
            "{detail} (distribution={:?}, seed={}, vertices={})",
            fixture.distribution,
            fixture.seed,
            fixture.graph.vertex_count(),
        )
    };

    if oracle != sorted(&oracle) {
        return Err(TestCaseError::fail(context(
            "oracle admission order is not canonically sorted",
        )));
    }

    let prim = prim_mst(&fixture.graph);
    if sorted(&prim) != oracle {
        return Err(TestCaseError::fail(context(
            "sequential Prim multiset diverged from the oracle",
        )));
    }

    for peers in COHORT_SIZES {
        let kruskal_tree = run_local(&fixture.graph, Algorithm::KruskalDistributed, peers)
            .map_err(|e| TestCaseError::fail(context(&format!("kruskal-par failed: {e}"))))?;
        if kruskal_tree.edges() != oracle.as_slice() {
            return Err(TestCaseError::fail(context(&format!(
                "kruskal-par sequence diverged from the oracle at {peers} peers"
            ))));
        }

        let prim_tree = run_local(&fixture.graph, Algorithm::PrimDistributed, peers)
            .map_err(|e| TestCaseError::fail(context(&format!("prim-par failed: {e}"))))?;
        if prim_tree.edges() != prim.as_slice() {
            return Err(TestCaseError::fail(context(&format!(
                "prim-par sequence diverged from sequential Prim at {peers} peers"
            ))));
        }
    }

    Ok(())
}
