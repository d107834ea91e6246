//! Edge-list wire format and transfer helpers.
//!
//! An edge list travels as two frames on the same tag: a count frame
//! holding one word, then a payload frame of `3 * count` words
//! `(i0, j0, w0, i1, j1, w1, ...)`. In-order delivery per `(peer, tag)`
//! stream makes the pairing unambiguous. All words are 32 bits; byte order
//! is the substrate's concern.

use crate::comm::{CommError, Communicator, Tag};
use crate::edge::Edge;

/// Converts a vertex id to a wire word.
pub(crate) fn vertex_word(vertex: usize) -> Result<u32, CommError> {
    u32::try_from(vertex).map_err(|_| CommError::VertexOverflow { vertex })
}

/// Encodes an edge list as `3 * len` words.
pub(crate) fn encode_edge_list(edges: &[Edge]) -> Result<Vec<u32>, CommError> {
    let mut words = Vec::with_capacity(edges.len() * 3);
    for edge in edges {
        words.push(vertex_word(edge.i())?);
        words.push(vertex_word(edge.j())?);
        words.push(edge.weight());
    }
    Ok(words)
}

/// Decodes `count` edges from a payload of `3 * count` words.
///
/// Endpoints pass through [`Edge::new`], so a decoded list is canonical
/// even if the sender was not.
pub(crate) fn decode_edge_list(count: usize, payload: &[u32]) -> Result<Vec<Edge>, CommError> {
    let expected = count * 3;
    if payload.len() != expected {
        return Err(CommError::MalformedFrame {
            expected,
            got: payload.len(),
        });
    }
    Ok(payload
        .chunks_exact(3)
        .map(|words| Edge::new(words[0] as usize, words[1] as usize, words[2]))
        .collect())
}

/// Ships an edge list to `dest`: count frame, then payload frame.
pub(crate) fn send_edge_list<C: Communicator>(
    comm: &C,
    dest: usize,
    tag: Tag,
    edges: &[Edge],
) -> Result<(), CommError> {
    let count = u32::try_from(edges.len()).map_err(|_| CommError::CountOverflow {
        edges: edges.len(),
    })?;
    comm.send(dest, tag, &[count])?;
    comm.send(dest, tag, &encode_edge_list(edges)?)
}

/// Receives an edge list from `src`: count frame, then payload frame.
pub(crate) fn recv_edge_list<C: Communicator>(
    comm: &C,
    src: usize,
    tag: Tag,
) -> Result<Vec<Edge>, CommError> {
    let header = comm.recv(src, tag)?;
    if header.len() != 1 {
        return Err(CommError::MalformedFrame {
            expected: 1,
            got: header.len(),
        });
    }
    let count = header[0] as usize;
    let payload = comm.recv(src, tag)?;
    decode_edge_list(count, &payload)
}
