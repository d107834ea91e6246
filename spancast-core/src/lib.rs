//! Minimum spanning trees over a dense adjacency matrix, computed either
//! sequentially or by a cohort of message-passing peers.
//!
//! Four interchangeable algorithms sit behind one dispatch surface:
//! sequential Prim and Kruskal as single-peer baselines, and distributed
//! Prim and Kruskal that split the matrix into row blocks of
//! `ceil(N / P)` rows per peer. Distributed Kruskal merges local forests
//! through a binary tournament of sorted edge lists; distributed Prim
//! grows one tree through per-iteration gather/broadcast rounds. Every
//! comparison anywhere in the crate uses the canonical `(weight, i, j)`
//! edge order, which is what makes all four algorithms produce the same
//! tree even when several spanning trees tie on total weight.
//!
//! Peers interact with the outside world only through the
//! [`Communicator`] trait — point-to-point sends, gather, broadcast, and
//! collective abort. [`comm::local`] provides an in-process cohort (one
//! thread per peer) so the distributed algorithms run and test without an
//! external transport; [`run_local`] is the one-call entry built on it.
//!
//! ```
//! use spancast_core::{Algorithm, DenseGraph, run_local};
//!
//! // A triangle: cheap edges (0,1) and (1,2), an expensive (0,2).
//! let adj = vec![
//!     0, 1, 3, //
//!     1, 0, 2, //
//!     3, 2, 0,
//! ];
//! let graph = DenseGraph::new(3, adj)?;
//! let tree = run_local(&graph, Algorithm::KruskalDistributed, 2)?;
//! assert_eq!(tree.total_weight(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod comm;

mod distributed;
mod edge;
mod error;
mod graph;
mod heap;
mod partition;
mod run;
mod sequential;
mod union_find;
mod wire;

#[cfg(test)]
mod property;

pub use crate::{
    comm::{CommError, CommErrorCode, Communicator, Tag},
    distributed::{distributed_kruskal, distributed_prim},
    edge::Edge,
    error::{MstError, MstErrorCode, Result},
    graph::{DenseGraph, GraphError, GraphErrorCode},
    partition::Partition,
    run::{Algorithm, SpanningTree, compute_mst, compute_mst_named, run_local},
    sequential::{kruskal_mst, prim_mst},
};
