//! Acue Accounts Core
//!
//! Domain types, the record store contract, and error handling shared by the
//! storage backends and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `PublicUser`, `UserSummary`, `UserId`
//! - **Core Traits**: `RecordStore`
//! - **Error Handling**: Unified `AcueError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use acue_core::types::UserRecord;
//!
//! let record = UserRecord::new("alice", "0".repeat(64), "acuestore.com");
//! assert_eq!(record.email, "alice@acuestore.com");
//!
//! let public = record.to_public();
//! assert_eq!(public.username, "alice");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{AcueError, Result};
pub use storage::RecordStore;
pub use types::{PublicUser, UserId, UserRecord, UserSummary};
