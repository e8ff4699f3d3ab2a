//! Record store contract

use crate::error::Result;
use crate::types::UserRecord;
use async_trait::async_trait;

/// Durable home of the full user record set
///
/// Callers always work with the whole set: `load` returns every record and
/// `save` replaces every record. Implementations own the on-disk (or
/// in-memory) representation and keep no partial views between calls.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Load the current record set
    ///
    /// Returns an empty set when nothing has been persisted yet.
    ///
    /// # Errors
    /// Returns an error if the backing store exists but cannot be read or parsed
    async fn load(&self) -> Result<Vec<UserRecord>>;

    /// Replace the persisted record set with `records`
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written
    async fn save(&self, records: &[UserRecord]) -> Result<()>;
}
