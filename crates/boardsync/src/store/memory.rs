use super::StateStore;
use crate::error::{BoardError, Result};
use crate::model::Document;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// In-memory board storage for testing.
///
/// Uses a `Mutex` rather than `RefCell` since the HTTP endpoint shares the store
/// across its blocking pool. Replacing swaps the whole document under the lock,
/// which gives the same atomicity as the file store's rename.
#[derive(Default)]
pub struct MemStore {
    doc: Mutex<Option<Document>>,
    simulate_read_error: AtomicBool,
    simulate_write_error: AtomicBool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already committed document.
    pub fn with_document(doc: Document) -> Self {
        Self {
            doc: Mutex::new(Some(doc)),
            ..Self::default()
        }
    }

    /// Make `load` fail the way an unreadable medium would.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.store(simulate, Ordering::SeqCst);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }
}

impl StateStore for MemStore {
    fn load(&self) -> Result<Document> {
        if self.simulate_read_error.load(Ordering::SeqCst) {
            return Err(BoardError::Persistence("Simulated read error".to_string()));
        }
        let doc = self
            .doc
            .lock()
            .map_err(|_| BoardError::Persistence("memory store poisoned".to_string()))?;
        doc.clone()
            .ok_or_else(|| BoardError::NotFound("memory://state".to_string()))
    }

    fn replace(&self, doc: &Document) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(BoardError::Persistence("Simulated write error".to_string()));
        }
        let mut slot = self
            .doc
            .lock()
            .map_err(|_| BoardError::Persistence("memory store poisoned".to_string()))?;
        *slot = Some(doc.clone());
        Ok(())
    }
}
