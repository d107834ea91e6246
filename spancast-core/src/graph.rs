//! Dense adjacency-matrix graph model.
//!
//! The matrix is validated once at construction and is read-only afterwards;
//! every peer of a cohort holds a full replica. Memory, not computation, is
//! therefore what bounds the graph sizes this crate can handle.

use thiserror::Error;

use crate::edge::Edge;

/// Errors raised while validating an adjacency matrix.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The graph must contain at least one vertex.
    #[error("the graph must contain at least one vertex")]
    NoVertices,
    /// The matrix length did not match the declared vertex count.
    #[error("adjacency matrix has {got} entries, expected {expected}")]
    DimensionMismatch {
        /// Expected entry count (`vertex_count` squared).
        expected: usize,
        /// Number of entries actually supplied.
        got: usize,
    },
    /// A pair of mirrored entries disagreed.
    #[error("weights for ({i}, {j}) and ({j}, {i}) disagree")]
    AsymmetricWeight {
        /// Row of the offending entry.
        i: usize,
        /// Column of the offending entry.
        j: usize,
    },
    /// A diagonal entry was non-zero.
    #[error("vertex {vertex} carries a self-loop weight")]
    LoopWeight {
        /// Vertex with the non-zero diagonal entry.
        vertex: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::NoVertices => GraphErrorCode::NoVertices,
            Self::DimensionMismatch { .. } => GraphErrorCode::DimensionMismatch,
            Self::AsymmetricWeight { .. } => GraphErrorCode::AsymmetricWeight,
            Self::LoopWeight { .. } => GraphErrorCode::LoopWeight,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GraphErrorCode {
    /// The graph had no vertices.
    NoVertices,
    /// The matrix length did not match the vertex count.
    DimensionMismatch,
    /// Mirrored entries disagreed.
    AsymmetricWeight,
    /// A diagonal entry was non-zero.
    LoopWeight,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoVertices => "GRAPH_NO_VERTICES",
            Self::DimensionMismatch => "GRAPH_DIMENSION_MISMATCH",
            Self::AsymmetricWeight => "GRAPH_ASYMMETRIC_WEIGHT",
            Self::LoopWeight => "GRAPH_LOOP_WEIGHT",
        }
    }
}

/// An undirected weighted graph stored as a row-major `N x N` matrix.
///
/// Zero entries denote absent edges; the diagonal is zero and the matrix is
/// symmetric. Both properties are enforced by [`DenseGraph::new`], as is the
/// edge count `M` every downstream capacity bound relies on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DenseGraph {
    vertex_count: usize,
    edge_count: usize,
    adj: Vec<u32>,
}

impl DenseGraph {
    /// Validates the matrix and counts the upper-triangle edges.
    ///
    /// # Errors
    ///
    /// Returns an error when the vertex count is zero, the matrix length is
    /// not `vertex_count` squared, a diagonal entry is non-zero, or a pair
    /// of mirrored entries disagrees.
    pub fn new(vertex_count: usize, adj: Vec<u32>) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::NoVertices);
        }
        let expected = vertex_count * vertex_count;
        if adj.len() != expected {
            return Err(GraphError::DimensionMismatch {
                expected,
                got: adj.len(),
            });
        }

        let mut edge_count = 0;
        for i in 0..vertex_count {
            if adj[i * vertex_count + i] != 0 {
                return Err(GraphError::LoopWeight { vertex: i });
            }
            for j in (i + 1)..vertex_count {
                if adj[i * vertex_count + j] != adj[j * vertex_count + i] {
                    return Err(GraphError::AsymmetricWeight { i, j });
                }
                if adj[i * vertex_count + j] != 0 {
                    edge_count += 1;
                }
            }
        }

        Ok(Self {
            vertex_count,
            edge_count,
            adj,
        })
    }

    /// Returns the number of vertices `N`.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges `M` (non-zero upper-triangle entries).
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the weight of the `(i, j)` entry; zero means "no edge".
    #[must_use]
    pub fn weight(&self, i: usize, j: usize) -> u32 {
        self.adj[i * self.vertex_count + j]
    }

    /// Materialises the canonical edge list from the upper triangle.
    #[must_use]
    pub fn upper_triangle_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for i in 0..self.vertex_count {
            for j in (i + 1)..self.vertex_count {
                let w = self.weight(i, j);
                if w != 0 {
                    edges.push(Edge::new(i, j, w));
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use spancast_test_support::fixtures;

    use super::{DenseGraph, GraphError, GraphErrorCode};
    use crate::edge::Edge;

    #[test]
    fn rejects_empty_graph() {
        let err = DenseGraph::new(0, Vec::new()).expect_err("zero vertices must fail");
        assert_eq!(err, GraphError::NoVertices);
        assert_eq!(err.code().as_str(), "GRAPH_NO_VERTICES");
    }

    #[test]
    fn rejects_wrong_matrix_length() {
        let err = DenseGraph::new(2, vec![0; 3]).expect_err("short matrix must fail");
        assert_eq!(
            err,
            GraphError::DimensionMismatch {
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn rejects_asymmetric_weights() {
        let err =
            DenseGraph::new(2, vec![0, 1, 2, 0]).expect_err("asymmetric matrix must fail");
        assert_eq!(err, GraphError::AsymmetricWeight { i: 0, j: 1 });
    }

    #[test]
    fn rejects_self_loops() {
        let err = DenseGraph::new(2, vec![0, 1, 1, 3]).expect_err("loop weight must fail");
        assert_eq!(err, GraphError::LoopWeight { vertex: 1 });
        assert_eq!(err.code(), GraphErrorCode::LoopWeight);
    }

    #[test]
    fn counts_upper_triangle_edges() {
        let (n, adj) = fixtures::triangle();
        let graph = DenseGraph::new(n, adj).expect("triangle must validate");
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight(1, 2), 2);
        assert_eq!(graph.weight(2, 1), 2);
    }

    #[test]
    fn materialises_canonical_edges() {
        let (n, adj) = fixtures::triangle();
        let graph = DenseGraph::new(n, adj).expect("triangle must validate");
        assert_eq!(
            graph.upper_triangle_edges(),
            vec![Edge::new(0, 1, 1), Edge::new(0, 2, 3), Edge::new(1, 2, 2)]
        );
    }
}
