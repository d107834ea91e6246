//! Distributed Prim: per-iteration global minimum via gather and broadcast.
//!
//! Every peer keeps a border table over its owned rows: for each unvisited
//! local vertex, the cheapest edge into the tree built so far (weight zero
//! meaning "no candidate yet"). Each of the `N - 1` iterations gathers one
//! candidate per peer at rank 0, selects the global minimum under the
//! canonical order, broadcasts the winning vertex, and relaxes every
//! border against the winner's matrix column. The gather and the
//! broadcast are the two barriers that keep the cohort in lockstep.

use tracing::debug;

use crate::comm::{CommError, Communicator};
use crate::edge::Edge;
use crate::error::{MstError, Result};
use crate::graph::DenseGraph;
use crate::partition::Partition;
use crate::wire;

/// Wire marker for "this peer has no candidate" (the whole first word of
/// the gather triple).
const NO_CANDIDATE: u32 = u32::MAX;

/// Abort code for the disconnected-graph precondition failure.
const ABORT_DISCONNECTED: i32 = 1;

/// Cheapest known connection from an unvisited local vertex into the tree.
#[derive(Clone, Copy, Debug)]
struct BorderEntry {
    /// Weight of the edge towards `tree_vertex`; zero when no tree-side
    /// neighbour has been seen yet.
    weight: u32,
    /// The already-visited endpoint of that edge.
    tree_vertex: usize,
}

/// Runs distributed Prim on this peer.
///
/// Returns the admission-ordered tree on rank 0 and an empty list on every
/// other rank. Peers that own no rows gather the sentinel in every
/// iteration and are otherwise no-ops.
///
/// # Errors
///
/// Fails with [`MstError::Disconnected`] when an iteration finds no
/// crossing edge anywhere in the cohort (after aborting the cohort), or
/// when the messaging substrate fails.
pub fn distributed_prim<C: Communicator>(graph: &DenseGraph, comm: &C) -> Result<Vec<Edge>> {
    let n = graph.vertex_count();
    let partition = Partition::new(comm.size(), n);
    let rank = comm.rank();
    let rows = partition.rows_of(rank);

    let mut visited = vec![false; n];
    visited[0] = true;
    let mut border: Vec<BorderEntry> = rows
        .clone()
        .map(|y| BorderEntry {
            weight: graph.weight(y, 0),
            tree_vertex: 0,
        })
        .collect();

    let mut tree = Vec::with_capacity(if rank == 0 { n - 1 } else { 0 });

    for iteration in 0..n.saturating_sub(1) {
        let triple = match local_candidate(&border, &visited, rows.clone()) {
            Some((vertex, entry)) => [
                wire::vertex_word(vertex)?,
                wire::vertex_word(entry.tree_vertex)?,
                entry.weight,
            ],
            None => [NO_CANDIDATE, 0, 0],
        };

        let gathered = comm.gather(0, &triple)?;

        let root_payload = if let Some(candidates) = gathered {
            let (edge, vertex) = match select_winner(&candidates, comm.size(), iteration) {
                Ok(winner) => winner,
                Err(err) => {
                    comm.abort(ABORT_DISCONNECTED);
                    return Err(err);
                }
            };
            tree.push(edge);
            vec![vertex]
        } else {
            Vec::new()
        };

        let winner_words = comm.broadcast(0, &root_payload)?;
        let winner = match winner_words.as_slice() {
            [vertex] => *vertex as usize,
            other => {
                return Err(MstError::from(CommError::MalformedFrame {
                    expected: 1,
                    got: other.len(),
                }));
            }
        };

        visited[winner] = true;
        relax_border(graph, &mut border, &visited, rows.clone(), winner);
    }

    if rank == 0 {
        debug!(edges = tree.len(), "distributed Prim complete");
    }
    Ok(tree)
}

/// Scans the border for the unvisited local vertex with the minimum-order
/// crossing edge.
fn local_candidate(
    border: &[BorderEntry],
    visited: &[bool],
    rows: std::ops::Range<usize>,
) -> Option<(usize, BorderEntry)> {
    let mut best: Option<(Edge, usize, BorderEntry)> = None;
    for (offset, y) in rows.enumerate() {
        if visited[y] {
            continue;
        }
        let entry = border[offset];
        if entry.weight == 0 {
            continue;
        }
        let edge = Edge::new(y, entry.tree_vertex, entry.weight);
        if best.as_ref().is_none_or(|(smallest, _, _)| edge < *smallest) {
            best = Some((edge, y, entry));
        }
    }
    best.map(|(_, vertex, entry)| (vertex, entry))
}

/// Picks the global minimum among the gathered `(vertex, tree_vertex, w)`
/// triples, skipping sentinels. The returned vertex is the one joining
/// the tree.
fn select_winner(
    candidates: &[u32],
    peers: usize,
    iteration: usize,
) -> Result<(Edge, u32)> {
    let expected = peers * 3;
    if candidates.len() != expected {
        return Err(MstError::from(CommError::MalformedFrame {
            expected,
            got: candidates.len(),
        }));
    }

    let mut best: Option<(Edge, u32)> = None;
    for triple in candidates.chunks_exact(3) {
        if triple[0] == NO_CANDIDATE {
            continue;
        }
        let edge = Edge::new(triple[0] as usize, triple[1] as usize, triple[2]);
        if best.as_ref().is_none_or(|(smallest, _)| edge < *smallest) {
            best = Some((edge, triple[0]));
        }
    }
    best.ok_or(MstError::Disconnected { iteration })
}

/// Folds the winner's matrix column into the border: any unvisited local
/// vertex now adjacent to the tree through a smaller-order edge records
/// the winner as its tree-side neighbour.
fn relax_border(
    graph: &DenseGraph,
    border: &mut [BorderEntry],
    visited: &[bool],
    rows: std::ops::Range<usize>,
    winner: usize,
) {
    for (offset, y) in rows.enumerate() {
        if visited[y] {
            continue;
        }
        let w = graph.weight(y, winner);
        if w == 0 {
            continue;
        }
        let entry = &mut border[offset];
        let candidate = Edge::new(winner, y, w);
        if entry.weight == 0 || candidate < Edge::new(entry.tree_vertex, y, entry.weight) {
            entry.weight = w;
            entry.tree_vertex = winner;
        }
    }
}
