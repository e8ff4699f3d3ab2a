//! Acue Server Library
//!
//! Account registration and login over a JSON record file.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{AccountPolicy, AccountService, CredentialHasher, Credentials};
pub use state::AppState;
