//! Messaging substrate contract for the peer cohort.
//!
//! The distributed algorithms use exactly the primitives named here: cohort
//! identity, tagged point-to-point transfers, gather-to-root,
//! broadcast-from-root, and collective abort. Payloads are 32-bit words;
//! whatever endianness handling a transport needs happens below this trait.
//! An in-process implementation backed by scoped threads lives in [`local`].

pub mod local;


use thiserror::Error;

/// Message tags separating independent point-to-point streams between the
/// same pair of peers. Frames on one `(peer, tag)` stream arrive in send
/// order; the wire protocol relies on that to pair a count frame with its
/// payload frame.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Tag {
    /// Forest and bipartite-forest edge lists in the Kruskal tournament.
    EdgeList,
}

/// Errors surfaced by messaging primitives and the edge-list wire codec.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CommError {
    /// A peer id fell outside the cohort.
    #[error("peer {peer} is outside the cohort of {cohort} peers")]
    InvalidPeer {
        /// The out-of-range peer id.
        peer: usize,
        /// Size of the cohort.
        cohort: usize,
    },
    /// The counterpart left the cohort before the transfer completed.
    #[error("peer {peer} left the cohort before the transfer completed")]
    Disconnected {
        /// The peer that went away.
        peer: usize,
    },
    /// The cohort was torn down collectively.
    #[error("cohort aborted with code {code}")]
    Aborted {
        /// Exit code passed to [`Communicator::abort`].
        code: i32,
    },
    /// A frame did not have the expected number of words.
    #[error("frame has {got} words, expected {expected}")]
    MalformedFrame {
        /// Number of words the receiver required.
        expected: usize,
        /// Number of words actually present.
        got: usize,
    },
    /// A vertex id does not fit the 32-bit wire format.
    #[error("vertex id {vertex} does not fit the 32-bit wire format")]
    VertexOverflow {
        /// The oversized vertex id.
        vertex: usize,
    },
    /// An edge list is too long for the 32-bit count word.
    #[error("edge list of {edges} edges does not fit the 32-bit count word")]
    CountOverflow {
        /// Length of the offending edge list.
        edges: usize,
    },
}

impl CommError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> CommErrorCode {
        match self {
            Self::InvalidPeer { .. } => CommErrorCode::InvalidPeer,
            Self::Disconnected { .. } => CommErrorCode::Disconnected,
            Self::Aborted { .. } => CommErrorCode::Aborted,
            Self::MalformedFrame { .. } => CommErrorCode::MalformedFrame,
            Self::VertexOverflow { .. } => CommErrorCode::VertexOverflow,
            Self::CountOverflow { .. } => CommErrorCode::CountOverflow,
        }
    }
}

/// Machine-readable error codes for [`CommError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum CommErrorCode {
    /// A peer id fell outside the cohort.
    InvalidPeer,
    /// The counterpart went away mid-transfer.
    Disconnected,
    /// The cohort aborted.
    Aborted,
    /// A frame had the wrong number of words.
    MalformedFrame,
    /// A vertex id overflowed the wire format.
    VertexOverflow,
    /// An edge count overflowed the wire format.
    CountOverflow,
}

impl CommErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidPeer => "COMM_INVALID_PEER",
            Self::Disconnected => "COMM_DISCONNECTED",
            Self::Aborted => "COMM_ABORTED",
            Self::MalformedFrame => "COMM_MALFORMED_FRAME",
            Self::VertexOverflow => "COMM_VERTEX_OVERFLOW",
            Self::CountOverflow => "COMM_COUNT_OVERFLOW",
        }
    }
}

/// Point-to-point and collective messaging for one peer of a cohort.
///
/// Every method is a synchronisation point between the peers involved.
/// Implementations must deliver frames on the same `(peer, tag)` stream in
/// send order; nothing else about relative ordering is guaranteed.
pub trait Communicator {
    /// Returns this peer's rank in `[0, size)`.
    fn rank(&self) -> usize;

    /// Returns the number of peers in the cohort.
    fn size(&self) -> usize;

    /// Sends `payload` to `dest` on the given tag.
    ///
    /// # Errors
    ///
    /// Fails when `dest` is outside the cohort, the cohort has aborted, or
    /// the destination is gone.
    fn send(&self, dest: usize, tag: Tag, payload: &[u32]) -> Result<(), CommError>;

    /// Receives the next frame from `src` on the given tag, blocking until
    /// one arrives.
    ///
    /// # Errors
    ///
    /// Fails when `src` is outside the cohort, the cohort has aborted, or
    /// the source is gone.
    fn recv(&self, src: usize, tag: Tag) -> Result<Vec<u32>, CommError>;

    /// Collects every peer's payload at `root`, concatenated in rank order.
    ///
    /// Returns `Some` on the root peer and `None` everywhere else.
    ///
    /// # Errors
    ///
    /// Fails when `root` is outside the cohort, the cohort has aborted, or
    /// a contributing peer is gone.
    fn gather(&self, root: usize, payload: &[u32]) -> Result<Option<Vec<u32>>, CommError>;

    /// Distributes the root's payload to every peer. The `payload` argument
    /// is ignored on non-root peers.
    ///
    /// # Errors
    ///
    /// Fails when `root` is outside the cohort, the cohort has aborted, or
    /// the root is gone.
    fn broadcast(&self, root: usize, payload: &[u32]) -> Result<Vec<u32>, CommError>;

    /// Tears the cohort down: pending and future operations on every peer
    /// fail with [`CommError::Aborted`] carrying `code`.
    fn abort(&self, code: i32);
}
