//! Property 2: every output is a spanning tree of the input.
//!
//! For each algorithm and cohort shape: exactly `N - 1` edges, every edge
//! present in the matrix with a matching weight, and union-find over the
//! output collapsing the graph to a single component.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::edge::Edge;
use crate::graph::DenseGraph;
use crate::run::{Algorithm, run_local};
use crate::union_find::DisjointSet;

use super::types::{COHORT_SIZES, GraphFixture};

fn check_spanning(graph: &DenseGraph, edges: &[Edge], label: &str) -> TestCaseResult {
    let n = graph.vertex_count();
    if edges.len() != n - 1 {
        return Err(TestCaseError::fail(format!(
            "{label}: {} edges for {n} vertices",
            edges.len()
        )));
    }

    let mut components = DisjointSet::new(n);
    for edge in edges {
        if graph.weight(edge.i(), edge.j()) != edge.weight() || edge.weight() == 0 {
            return Err(TestCaseError::fail(format!(
                "{label}: edge ({}, {}, {}) is not in the graph",
                edge.i(),
                edge.j(),
                edge.weight()
            )));
        }
        if !components.union(edge.i(), edge.j()) {
            return Err(TestCaseError::fail(format!(
                "{label}: edge ({}, {}) closes a cycle",
                edge.i(),
                edge.j()
            )));
        }
    }

    // N-1 acyclic edges over N vertices already span; the union above
    // doubles as the cycle check.
    Ok(())
}

pub(super) fn run_structural_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;

    for algorithm in [Algorithm::PrimSequential, Algorithm::KruskalSequential] {
        let tree = run_local(graph, algorithm, 1)
            .map_err(|e| TestCaseError::fail(format!("{algorithm} failed: {e}")))?;
        check_spanning(graph, tree.edges(), algorithm.as_str())?;
    }

    for peers in COHORT_SIZES {
        for algorithm in [Algorithm::PrimDistributed, Algorithm::KruskalDistributed] {
            let tree = run_local(graph, algorithm, peers).map_err(|e| {
                TestCaseError::fail(format!("{algorithm} at {peers} peers failed: {e}"))
            })?;
            check_spanning(
                graph,
                tree.edges(),
                &format!("{algorithm} at {peers} peers"),
            )?;
        }
    }

    Ok(())
}
