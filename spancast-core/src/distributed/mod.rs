//! Distributed algorithms over a message-passing peer cohort.
//!
//! Both variants partition the vertex set into row blocks of
//! `R = ceil(N / P)` rows per peer and run the same code on every rank,
//! parameterised by that rank. All cross-peer agreement — which edge wins
//! a tie, which forest survives a merge — follows from the canonical edge
//! order alone, never from message arrival order.

mod kruskal;
mod prim;


pub use kruskal::distributed_kruskal;
pub use prim::distributed_prim;
