use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Store {
    lines: Vec<String>,
    epoch: u64,
}

/// In-process stand-in for the output store a delivery pipeline writes to.
///
/// Holds one line per delivered record. Clones share the same underlying
/// store, so a generator, checker, and cleaner wired to clones of one
/// destination observe each other's effects.
///
/// Every purge advances an epoch counter. The workflow purges the
/// destination at the start of every run, so observers can scope per-run
/// state (such as the checker's poll window) to the current epoch.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDestination {
    store: Arc<Mutex<Store>>,
}

impl InMemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one delivered record line
    pub fn append_line(&self, line: String) {
        self.store.lock().lines.push(line);
    }

    /// Snapshot of all delivered lines
    pub fn lines(&self) -> Vec<String> {
        self.store.lock().lines.clone()
    }

    /// Number of delivered records
    pub fn record_count(&self) -> u64 {
        self.store.lock().lines.len() as u64
    }

    /// Remove every delivered record, returning how many were removed.
    /// Purging an already-clean destination is a no-op for the contents but
    /// still opens a new epoch.
    pub fn purge(&self) -> usize {
        let mut store = self.store.lock();
        let removed = store.lines.len();
        store.lines.clear();
        store.epoch += 1;
        removed
    }

    /// Epoch of the current contents; advances on every purge
    pub fn epoch(&self) -> u64 {
        self.store.lock().epoch
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().lines.is_empty()
    }
}
