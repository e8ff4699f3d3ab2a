//! In-memory record store

use acue_core::{RecordStore, Result, UserRecord};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Record store that keeps the record set in process memory
///
/// Counts saves so callers can assert how often the full set was rewritten.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<UserRecord>>,
    saves: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record set
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of successful `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn load(&self) -> Result<Vec<UserRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[UserRecord]) -> Result<()> {
        *self.records.write().await = records.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
