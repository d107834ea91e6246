//! In-process cohort runtime backed by scoped threads and channels.
//!
//! [`run_cohort`] gives every rank its own OS thread and a [`LocalPeer`]
//! endpoint; peers stay single-threaded internally and interact only
//! through the [`Communicator`] primitives, so algorithm code runs
//! unchanged against an external transport. Each endpoint stashes frames
//! that arrive ahead of the stream the peer is currently waiting on, which
//! is what makes selective `(source, tag)` receives work over a single
//! inbox channel.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, OnceLock};
use std::thread;

use super::{CommError, Communicator, Tag};

/// Streams multiplexed over one peer-to-peer channel. User frames keep
/// their tag; gather and broadcast travel on reserved control streams so
/// collectives can never collide with point-to-point traffic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Stream {
    User(Tag),
    Gather,
    Broadcast,
}

enum Frame {
    Data {
        src: usize,
        stream: Stream,
        payload: Vec<u32>,
    },
    Abort {
        code: i32,
    },
}

/// One peer's endpoint of an in-process cohort.
///
/// The endpoint is moved into its peer's thread and used from there alone;
/// interior mutability covers the receive stash, not cross-thread sharing.
pub struct LocalPeer {
    rank: usize,
    /// Senders indexed by destination rank; the own slot is `None` so an
    /// idle peer does not hold its own inbox open. Self-delivery goes
    /// straight through the stash.
    senders: Vec<Option<Sender<Frame>>>,
    inbox: Receiver<Frame>,
    stash: RefCell<VecDeque<(usize, Stream, Vec<u32>)>>,
    abort_code: Arc<OnceLock<i32>>,
}

impl LocalPeer {
    fn check_abort(&self) -> Result<(), CommError> {
        match self.abort_code.get() {
            Some(&code) => Err(CommError::Aborted { code }),
            None => Ok(()),
        }
    }

    fn check_peer(&self, peer: usize) -> Result<(), CommError> {
        if peer >= self.senders.len() {
            return Err(CommError::InvalidPeer {
                peer,
                cohort: self.senders.len(),
            });
        }
        Ok(())
    }

    fn post(&self, dest: usize, stream: Stream, payload: &[u32]) -> Result<(), CommError> {
        self.check_abort()?;
        self.check_peer(dest)?;
        match &self.senders[dest] {
            Some(sender) => sender
                .send(Frame::Data {
                    src: self.rank,
                    stream,
                    payload: payload.to_vec(),
                })
                .map_err(|_| CommError::Disconnected { peer: dest }),
            None => {
                self.stash
                    .borrow_mut()
                    .push_back((self.rank, stream, payload.to_vec()));
                Ok(())
            }
        }
    }

    /// Takes the oldest frame matching `(src, stream)`, consulting the
    /// stash before blocking on the inbox.
    fn take(&self, src: usize, stream: Stream) -> Result<Vec<u32>, CommError> {
        self.check_abort()?;
        self.check_peer(src)?;

        let mut stash = self.stash.borrow_mut();
        if let Some(position) = stash
            .iter()
            .position(|(from, on, _)| *from == src && *on == stream)
            && let Some((_, _, payload)) = stash.remove(position)
        {
            return Ok(payload);
        }

        loop {
            let frame = self
                .inbox
                .recv()
                .map_err(|_| CommError::Disconnected { peer: src })?;
            match frame {
                Frame::Abort { code } => {
                    let _ = self.abort_code.set(code);
                    return Err(CommError::Aborted { code });
                }
                Frame::Data {
                    src: from,
                    stream: on,
                    payload,
                } => {
                    if from == src && on == stream {
                        return Ok(payload);
                    }
                    stash.push_back((from, on, payload));
                }
            }
        }
    }
}

impl Communicator for LocalPeer {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.senders.len()
    }

    fn send(&self, dest: usize, tag: Tag, payload: &[u32]) -> Result<(), CommError> {
        self.post(dest, Stream::User(tag), payload)
    }

    fn recv(&self, src: usize, tag: Tag) -> Result<Vec<u32>, CommError> {
        self.take(src, Stream::User(tag))
    }

    fn gather(&self, root: usize, payload: &[u32]) -> Result<Option<Vec<u32>>, CommError> {
        self.check_abort()?;
        self.check_peer(root)?;
        if self.rank != root {
            self.post(root, Stream::Gather, payload)?;
            return Ok(None);
        }

        let mut collected = Vec::new();
        for peer in 0..self.size() {
            if peer == self.rank {
                collected.extend_from_slice(payload);
            } else {
                collected.extend(self.take(peer, Stream::Gather)?);
            }
        }
        Ok(Some(collected))
    }

    fn broadcast(&self, root: usize, payload: &[u32]) -> Result<Vec<u32>, CommError> {
        self.check_abort()?;
        self.check_peer(root)?;
        if self.rank == root {
            for peer in 0..self.size() {
                if peer != self.rank {
                    self.post(peer, Stream::Broadcast, payload)?;
                }
            }
            return Ok(payload.to_vec());
        }
        self.take(root, Stream::Broadcast)
    }

    fn abort(&self, code: i32) {
        let _ = self.abort_code.set(code);
        for sender in self.senders.iter().flatten() {
            let _ = sender.send(Frame::Abort { code });
        }
    }
}

fn build_mesh(peers: usize) -> Vec<LocalPeer> {
    let abort_code = Arc::new(OnceLock::new());
    let mut senders = Vec::with_capacity(peers);
    let mut inboxes = Vec::with_capacity(peers);
    for _ in 0..peers {
        let (sender, inbox) = channel();
        senders.push(sender);
        inboxes.push(inbox);
    }

    inboxes
        .into_iter()
        .enumerate()
        .map(|(rank, inbox)| {
            let mut senders: Vec<Option<Sender<Frame>>> =
                senders.iter().cloned().map(Some).collect();
            senders[rank] = None;
            LocalPeer {
                rank,
                senders,
                inbox,
                stash: RefCell::new(VecDeque::new()),
                abort_code: Arc::clone(&abort_code),
            }
        })
        .collect()
}

/// Runs `run` once per rank, each on its own scoped thread, and returns
/// every rank's result in rank order.
///
/// A peer that returns early drops its endpoint; a counterpart blocked on
/// it observes [`CommError::Disconnected`] once no live peer can feed its
/// inbox any more, rather than blocking forever.
///
/// # Panics
///
/// Panics when `peers` is zero, and resumes the unwind of any peer closure
/// that panicked.
pub fn run_cohort<T, F>(peers: usize, run: F) -> Vec<T>
where
    F: Fn(LocalPeer) -> T + Sync,
    T: Send,
{
    assert!(peers > 0, "a cohort needs at least one peer");
    let endpoints = build_mesh(peers);
    let run = &run;
    thread::scope(|scope| {
        let handles: Vec<_> = endpoints
            .into_iter()
            .map(|endpoint| scope.spawn(move || run(endpoint)))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}
