//! # Storage Layer
//!
//! This module defines the storage abstraction for the board. The [`StateStore`]
//! trait is deliberately dumb: it holds exactly one [`Document`] and knows two
//! things, how to read it and how to replace it whole.
//!
//! ## Contract
//!
//! - **Default on miss**: [`StateStore::get`] never fails. A missing, unreadable
//!   or corrupt backing medium reads as the empty document. Callers that need to
//!   tell the cases apart use [`StateStore::load`].
//! - **Atomic replace**: [`StateStore::replace`] either commits the whole new
//!   document or leaves the previous one intact. A concurrent reader never sees a
//!   partial write.
//! - **Abandonable writes**: [`StateStore::replace_guarded`] checks a
//!   [`CommitToken`] at its commit point. A caller that stops waiting abandons
//!   the token, and the write is then dropped instead of committed late.
//! - **Last writer wins**: there is no locking across processes and no merge.
//!   Two concurrent replaces are unordered; the survivor is one of them, whole.
//! - **No policy**: bounds and validation of producer input live in the model
//!   and commands. The store persists whatever document it is given.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one pretty-printed JSON file
//!   written via temp file + rename.
//! - [`memory::MemStore`]: In-memory storage for tests, with write failure
//!   simulation.

use crate::error::{BoardError, Result};
use crate::model::Document;
use std::sync::atomic::{AtomicU8, Ordering};

pub mod fs;
pub mod memory;

/// Abstract interface for board storage.
///
/// Implementations must be shareable across threads: the HTTP endpoint calls
/// into the store from its blocking pool.
pub trait StateStore: Send + Sync {
    /// Read the last committed document.
    ///
    /// Returns `NotFound` when nothing has been committed yet, `Io` (or
    /// `Persistence`) when the medium cannot be read, and `MalformedRecord` when
    /// it holds garbage.
    fn load(&self) -> Result<Document>;

    /// Atomically overwrite the committed document.
    fn replace(&self, doc: &Document) -> Result<()>;

    /// Like [`replace`](Self::replace), but only commits if `token` has not been
    /// abandoned by the time the write would become visible.
    ///
    /// The default claims the token before doing anything. Stores with a slow
    /// staging phase override this to claim it after staging.
    fn replace_guarded(&self, doc: &Document, token: &CommitToken) -> Result<()> {
        if !token.begin_commit() {
            return Err(abandoned());
        }
        self.replace(doc)
    }

    /// Read the last committed document, falling back to the empty one.
    fn get(&self) -> Document {
        match self.load() {
            Ok(doc) => doc,
            Err(BoardError::NotFound(_)) => Document::default(),
            Err(e) => {
                tracing::warn!(error = %e, "state unreadable, serving empty board");
                Document::default()
            }
        }
    }
}

const PENDING: u8 = 0;
const COMMITTING: u8 = 1;
const ABANDONED: u8 = 2;

/// One-shot hand-off between a write and the caller waiting on it.
///
/// The store calls [`begin_commit`](Self::begin_commit) right before the write
/// becomes visible; the waiter calls [`abandon`](Self::abandon) when it gives
/// up. Exactly one of them succeeds: an abandoned write never commits, and a
/// waiter that loses the race must wait for the commit to finish.
#[derive(Debug, Default)]
pub struct CommitToken {
    state: AtomicU8,
}

impl CommitToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the right to commit. `false` means the waiter already gave up.
    pub fn begin_commit(&self) -> bool {
        self.transition(COMMITTING)
    }

    /// Give up on the write. `false` means the commit is already under way.
    pub fn abandon(&self) -> bool {
        self.transition(ABANDONED)
    }

    fn transition(&self, to: u8) -> bool {
        self.state
            .compare_exchange(PENDING, to, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

pub(crate) fn abandoned() -> BoardError {
    BoardError::Persistence("write abandoned before commit".to_string())
}
