//! Error types surfaced by the orchestrated MST computation.
//!
//! Subsystem errors ([`GraphError`](crate::graph::GraphError),
//! [`CommError`](crate::comm::CommError)) stay close to their modules; this
//! module defines the top-level enum the orchestrator returns, together with
//! the stable machine-readable codes exposed for logging surfaces.

use thiserror::Error;

use crate::comm::CommError;
use crate::run::Algorithm;

/// Error type produced while computing a minimum spanning tree.
///
/// Configuration errors and the disconnected-graph precondition escalate to
/// a cohort abort before they are returned: a run is either complete and
/// correct, or has failed as a whole and must be rerun.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The algorithm name did not match any of the four known algorithms.
    #[error("unknown algorithm name: {name}")]
    UnknownAlgorithm {
        /// The name as supplied by the caller.
        name: String,
    },
    /// A sequential algorithm was dispatched on a multi-peer cohort.
    #[error("{algorithm} is sequential but the cohort has {peers} peers")]
    SequentialCohort {
        /// The sequential algorithm that was requested.
        algorithm: Algorithm,
        /// Observed cohort size.
        peers: usize,
    },
    /// An iteration of distributed Prim found no crossing edge, which means
    /// the input graph is disconnected.
    #[error("no crossing edge in iteration {iteration}; the graph is disconnected")]
    Disconnected {
        /// Zero-based iteration at which the candidate set was empty.
        iteration: usize,
    },
    /// The messaging substrate failed.
    #[error("messaging failed: {source}")]
    Comm {
        /// Underlying substrate failure.
        #[from]
        source: CommError,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("internal invariant violated: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
    },
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::UnknownAlgorithm { .. } => MstErrorCode::UnknownAlgorithm,
            Self::SequentialCohort { .. } => MstErrorCode::SequentialCohort,
            Self::Disconnected { .. } => MstErrorCode::Disconnected,
            Self::Comm { .. } => MstErrorCode::Comm,
            Self::InvariantViolation { .. } => MstErrorCode::InvariantViolation,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum MstErrorCode {
    /// The algorithm name was not recognised.
    UnknownAlgorithm,
    /// A sequential algorithm ran on a multi-peer cohort.
    SequentialCohort,
    /// The input graph is disconnected.
    Disconnected,
    /// The messaging substrate failed.
    Comm,
    /// An internal invariant was violated.
    InvariantViolation,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownAlgorithm => "UNKNOWN_ALGORITHM",
            Self::SequentialCohort => "SEQUENTIAL_COHORT",
            Self::Disconnected => "DISCONNECTED_GRAPH",
            Self::Comm => "COMM_FAILURE",
            Self::InvariantViolation => "INVARIANT_VIOLATION",
        }
    }
}

/// Convenient alias for results returned by the orchestrated API.
pub type Result<T> = core::result::Result<T, MstError>;

#[cfg(test)]
mod tests {
    use super::{MstError, MstErrorCode};
    use crate::comm::CommError;

    #[test]
    fn codes_are_stable() {
        let err = MstError::UnknownAlgorithm {
            name: "prim-fast".to_owned(),
        };
        assert_eq!(err.code(), MstErrorCode::UnknownAlgorithm);
        assert_eq!(err.code().as_str(), "UNKNOWN_ALGORITHM");
    }

    #[test]
    fn comm_errors_convert() {
        let err = MstError::from(CommError::Aborted { code: 1 });
        assert_eq!(err.code(), MstErrorCode::Comm);
        assert!(err.to_string().contains("aborted"));
    }
}
