//! Acue Accounts Storage
//!
//! Record store backends for the user record set.
//!
//! # Backends
//!
//! - **`JsonFileStore`**: the whole record set as one pretty-printed JSON
//!   array on disk, replaced atomically on every save
//! - **`InMemoryStore`**: a process-local record set, used in tests and for
//!   throwaway runs
//!
//! # Example
//!
//! ```rust,no_run
//! use acue_core::RecordStore;
//! use acue_storage::JsonFileStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonFileStore::new("users.json");
//!
//! let mut records = store.load().await?;
//! records.retain(|r| !r.username.is_empty());
//! store.save(&records).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod json_file;
mod memory;

pub use error::StorageError;
pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
