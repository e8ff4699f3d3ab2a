/// Server services
pub mod accounts;
pub mod credentials;

pub use accounts::{AccountPolicy, AccountService, Credentials};
pub use credentials::CredentialHasher;
