//! Distributed Kruskal: a binary tournament of local spanning forests.
//!
//! Every peer first reduces its owned row block to a local MST forest.
//! Then, in rounds of doubling `step_size`, peers pair up block-wise: the
//! sender half of each block ships its aggregate forest plus the MST of
//! the bipartite subgraph crossing into the receiver half; the receiver
//! merges the incoming sorted lists with its own forest and reselects.
//! The union of two MSTs plus the MST of the edges crossing between them
//! contains an MST of the combined subgraph (cut property), so after the
//! final round rank 0 holds the MST of the whole graph.

use tracing::{debug, trace};

use crate::comm::{Communicator, Tag};
use crate::edge::Edge;
use crate::error::Result;
use crate::graph::DenseGraph;
use crate::partition::Partition;
use crate::union_find::kruskal_select;
use crate::wire;

/// Runs the tournament on this peer.
///
/// Returns this peer's final forest; only rank 0's is the global MST.
/// Peers that own no rows participate with empty forests and act as
/// no-ops in every round.
///
/// # Errors
///
/// Fails when the messaging substrate fails.
pub fn distributed_kruskal<C: Communicator>(graph: &DenseGraph, comm: &C) -> Result<Vec<Edge>> {
    let partition = Partition::new(comm.size(), graph.vertex_count());
    let rows = partition.rows_per_peer();
    let rank = comm.rank();
    let n = graph.vertex_count();

    let mut forest = local_forest(graph, &partition, rank);
    trace!(rank, forest_edges = forest.len(), "local forest built");

    // A peer receives until the round that turns it into a sender; after
    // that its aggregate lives on in its partner and it only contributes
    // bipartite forests.
    let mut receiving = true;
    let mut step = 1;
    let mut shifted = rank;
    while step * rows < n {
        if shifted & 1 == 1 {
            receiving = false;
            if rank % step == 0 {
                wire::send_edge_list(comm, rank - step, Tag::EdgeList, &forest)?;
            }
            send_bipartite_forest(graph, &partition, comm, rank, step)?;
        } else if receiving {
            forest = merge_round(graph, &partition, comm, rank, step, &forest)?;
            debug!(
                rank,
                step_size = step,
                forest_edges = forest.len(),
                "merge round complete"
            );
        }
        step <<= 1;
        shifted >>= 1;
    }

    Ok(forest)
}

/// MST forest of the subgraph induced by this peer's owned rows.
///
/// Only the lower triangle of the block is scanned, so the edge set is
/// disjoint from every bipartite forest shipped later.
pub(super) fn local_forest(graph: &DenseGraph, partition: &Partition, rank: usize) -> Vec<Edge> {
    let block_start = partition.block_start(rank);
    let mut edges = Vec::new();
    for i in partition.rows_of(rank) {
        for j in block_start..=i {
            let w = graph.weight(i, j);
            if w != 0 {
                edges.push(Edge::new(i, j, w));
            }
        }
    }
    edges.sort_unstable();
    kruskal_select(graph.vertex_count(), &edges)
}

/// MST of the bipartite subgraph between this sender's rows and the
/// receiver half's column window of `step * R` columns.
pub(super) fn bipartite_forest(
    graph: &DenseGraph,
    partition: &Partition,
    rank: usize,
    step: usize,
) -> Vec<Edge> {
    let rows = partition.rows_per_peer();
    let window_start = (rank - rank % step - step) * rows;
    let window_end = (window_start + step * rows).min(graph.vertex_count());

    let mut edges = Vec::new();
    for i in partition.rows_of(rank) {
        for j in window_start..window_end {
            let w = graph.weight(i, j);
            if w != 0 {
                edges.push(Edge::new(i, j, w));
            }
        }
    }
    edges.sort_unstable();
    kruskal_select(graph.vertex_count(), &edges)
}

fn send_bipartite_forest<C: Communicator>(
    graph: &DenseGraph,
    partition: &Partition,
    comm: &C,
    rank: usize,
    step: usize,
) -> Result<()> {
    let target = rank - rank % step - step;
    let forest = bipartite_forest(graph, partition, rank, step);
    wire::send_edge_list(comm, target, Tag::EdgeList, &forest)?;
    Ok(())
}

/// One receiver round: collect the partner half's aggregate forest and its
/// bipartite forests, fold everything into one sorted list, reselect.
fn merge_round<C: Communicator>(
    graph: &DenseGraph,
    partition: &Partition,
    comm: &C,
    rank: usize,
    step: usize,
    forest: &[Edge],
) -> Result<Vec<Edge>> {
    let rows = partition.rows_per_peer();

    // Worst case: `step` bipartite forests of (step+1)*R - 1 edges each,
    // plus two aggregate forests, clamped by the total edge count.
    let bound = step * ((step + 1) * rows - 1) + 2 * (step * rows - 1);
    let capacity = bound.min(graph.edge_count());
    let mut merged: Vec<Edge> = Vec::with_capacity(capacity);
    let mut scratch: Vec<Edge> = Vec::with_capacity(capacity);

    if rank + step < comm.size() {
        merged = wire::recv_edge_list(comm, rank + step, Tag::EdgeList)?;
        for offset in 0..step {
            let src = rank + step + offset;
            if src >= comm.size() {
                break;
            }
            let incoming = wire::recv_edge_list(comm, src, Tag::EdgeList)?;
            merge_sorted_into(&merged, &incoming, &mut scratch);
            std::mem::swap(&mut merged, &mut scratch);
        }
    }

    merge_sorted_into(&merged, forest, &mut scratch);
    Ok(kruskal_select(graph.vertex_count(), &scratch))
}

/// Two-way merge of canonically sorted lists into `out`.
fn merge_sorted_into(left: &[Edge], right: &[Edge], out: &mut Vec<Edge>) {
    out.clear();
    let (mut l, mut r) = (0, 0);
    while l < left.len() && r < right.len() {
        if left[l] <= right[r] {
            out.push(left[l]);
            l += 1;
        } else {
            out.push(right[r]);
            r += 1;
        }
    }
    out.extend_from_slice(&left[l..]);
    out.extend_from_slice(&right[r..]);
}
