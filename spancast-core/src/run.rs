//! Algorithm selection and cohort orchestration.
//!
//! Every peer of the cohort calls [`compute_mst`] with identical arguments;
//! the algorithms themselves are parameterised by rank. Only rank 0 gets
//! the finished tree back. Configuration failures tear the cohort down
//! before the error is returned, so a run is either complete or fails as a
//! whole.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use tracing::{debug, error, instrument};

use crate::comm::Communicator;
use crate::comm::local::run_cohort;
use crate::distributed::{distributed_kruskal, distributed_prim};
use crate::edge::Edge;
use crate::error::{MstError, Result};
use crate::graph::DenseGraph;
use crate::sequential::{kruskal_mst, prim_mst};

/// Abort code for configuration failures, mirrored by hosts as the
/// process exit code.
const ABORT_CONFIG: i32 = 1;

/// The four interchangeable MST algorithms.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Sequential Prim seeded at vertex 0 (`prim-seq`).
    PrimSequential,
    /// Sequential Kruskal (`kruskal-seq`).
    KruskalSequential,
    /// Distributed Prim over the peer cohort (`prim-par`).
    PrimDistributed,
    /// Distributed Kruskal over the peer cohort (`kruskal-par`).
    KruskalDistributed,
}

impl Algorithm {
    /// Returns the canonical algorithm name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrimSequential => "prim-seq",
            Self::KruskalSequential => "kruskal-seq",
            Self::PrimDistributed => "prim-par",
            Self::KruskalDistributed => "kruskal-par",
        }
    }

    /// Returns `true` for the algorithms that require a single-peer cohort.
    #[must_use]
    pub const fn is_sequential(self) -> bool {
        matches!(self, Self::PrimSequential | Self::KruskalSequential)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = MstError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "prim-seq" => Ok(Self::PrimSequential),
            "kruskal-seq" => Ok(Self::KruskalSequential),
            "prim-par" => Ok(Self::PrimDistributed),
            "kruskal-par" => Ok(Self::KruskalDistributed),
            other => Err(MstError::UnknownAlgorithm {
                name: other.to_owned(),
            }),
        }
    }
}

/// The finished spanning tree, in admission order.
///
/// Kruskal admits weight-increasing with lexicographic tiebreaks; Prim
/// admits in the order vertices joined the tree. Both orders carry the
/// same edge multiset for the same input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
}

impl SpanningTree {
    pub(crate) fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// Returns the tree edges in admission order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the total tree weight.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|edge| u64::from(edge.weight())).sum()
    }

    /// Writes one `"{i} {j}"` line per edge, in admission order, followed
    /// by a `"Sum : {total}"` line when `with_sum` is set.
    ///
    /// # Errors
    ///
    /// Propagates writer failures.
    pub fn write_to<W: Write>(&self, out: &mut W, with_sum: bool) -> io::Result<()> {
        for edge in &self.edges {
            writeln!(out, "{} {}", edge.i(), edge.j())?;
        }
        if with_sum {
            writeln!(out, "Sum : {}", self.total_weight())?;
        }
        Ok(())
    }
}

/// SPMD entry point: computes the MST of `graph` with `algorithm` on this
/// peer of the cohort.
///
/// Returns `Some` on rank 0 and `None` on every other rank.
///
/// # Errors
///
/// Returns [`MstError::SequentialCohort`] (after aborting the cohort from
/// rank 0) when a sequential algorithm runs on a multi-peer cohort,
/// [`MstError::Disconnected`] when distributed Prim runs out of candidate
/// edges, and [`MstError::Comm`] on substrate failures.
#[instrument(
    skip_all,
    fields(rank = comm.rank(), peers = comm.size(), algorithm = %algorithm)
)]
pub fn compute_mst<C: Communicator>(
    graph: &DenseGraph,
    algorithm: Algorithm,
    comm: &C,
) -> Result<Option<SpanningTree>> {
    let rank = comm.rank();
    let peers = comm.size();

    if algorithm.is_sequential() && peers != 1 {
        if rank == 0 {
            error!(%algorithm, peers, "sequential algorithm on a multi-peer cohort");
            comm.abort(ABORT_CONFIG);
        }
        return Err(MstError::SequentialCohort { algorithm, peers });
    }

    let edges = match algorithm {
        Algorithm::PrimSequential => prim_mst(graph),
        Algorithm::KruskalSequential => kruskal_mst(graph),
        Algorithm::PrimDistributed => distributed_prim(graph, comm)?,
        Algorithm::KruskalDistributed => distributed_kruskal(graph, comm)?,
    };

    if rank == 0 {
        let tree = SpanningTree::new(edges);
        debug!(
            edges = tree.edges().len(),
            total_weight = tree.total_weight(),
            "spanning tree complete"
        );
        Ok(Some(tree))
    } else {
        Ok(None)
    }
}

/// Name-dispatching variant of [`compute_mst`], for hosts that carry the
/// algorithm as a string.
///
/// # Errors
///
/// Returns [`MstError::UnknownAlgorithm`] (after aborting the cohort from
/// rank 0) for an unrecognised name, and otherwise whatever
/// [`compute_mst`] returns.
pub fn compute_mst_named<C: Communicator>(
    graph: &DenseGraph,
    name: &str,
    comm: &C,
) -> Result<Option<SpanningTree>> {
    match name.parse::<Algorithm>() {
        Ok(algorithm) => compute_mst(graph, algorithm, comm),
        Err(err) => {
            if comm.rank() == 0 {
                error!(name, "unknown algorithm name");
                comm.abort(ABORT_CONFIG);
            }
            Err(err)
        }
    }
}

/// Runs a full in-process cohort of `peers` peers and returns rank 0's
/// tree.
///
/// This is the one-call entry point for hosts and tests; it spawns the
/// cohort, runs [`compute_mst`] on every rank, and surfaces rank 0's
/// outcome (or the first failure elsewhere in the cohort).
///
/// # Errors
///
/// Returns whatever [`compute_mst`] fails with on any peer.
///
/// # Panics
///
/// Panics when `peers` is zero.
pub fn run_local(graph: &DenseGraph, algorithm: Algorithm, peers: usize) -> Result<SpanningTree> {
    let mut results = run_cohort(peers, |comm| compute_mst(graph, algorithm, &comm));
    let root = results.swap_remove(0);
    let tree = root?;
    for outcome in results {
        outcome?;
    }
    tree.ok_or(MstError::InvariantViolation {
        invariant: "rank 0 yields the tree",
    })
}
