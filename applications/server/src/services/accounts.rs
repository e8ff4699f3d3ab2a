/// Account service - registration, login and listing over a record store
use crate::error::{Result, ServerError};
use crate::services::CredentialHasher;
use acue_core::{PublicUser, RecordStore, UserRecord, UserSummary};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const CREDENTIALS_REQUIRED: &str = "Username and password required";
pub const USERNAME_TAKEN: &str = "Username already exists";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Username/password pair as submitted by a client
///
/// Both fields are optional on the wire; absence and emptiness are reported
/// the same way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    fn require(&self) -> Result<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Ok((username, password))
            }
            _ => Err(ServerError::Validation(CREDENTIALS_REQUIRED.to_string())),
        }
    }
}

/// Intake rules for new accounts
#[derive(Debug, Clone)]
pub struct AccountPolicy {
    pub email_domain: String,
    pub min_password_length: usize,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            email_domain: "acuestore.com".to_string(),
            min_password_length: 6,
        }
    }
}

pub struct AccountService {
    store: Arc<dyn RecordStore>,
    hasher: CredentialHasher,
    policy: AccountPolicy,
    // Held across load -> check -> save so concurrent registrations serialize
    write_lock: Mutex<()>,
}

impl AccountService {
    pub fn new(store: Arc<dyn RecordStore>, policy: AccountPolicy) -> Self {
        Self {
            store,
            hasher: CredentialHasher::new(),
            policy,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a new account and persist the full record set
    pub async fn register(&self, credentials: &Credentials) -> Result<PublicUser> {
        let (username, password) = credentials.require()?;

        if password.chars().count() < self.policy.min_password_length {
            return Err(ServerError::Validation(format!(
                "Password must be at least {} characters long",
                self.policy.min_password_length
            )));
        }

        let digest = self.hasher.digest(password);

        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;

        if records.iter().any(|r| r.username == username) {
            tracing::info!(username, "Registration rejected, username taken");
            return Err(ServerError::Validation(USERNAME_TAKEN.to_string()));
        }

        let record = UserRecord::new(username, digest, &self.policy.email_domain);
        let user = record.to_public();
        records.push(record);
        self.store.save(&records).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Verify credentials against the stored digest
    pub async fn login(&self, credentials: &Credentials) -> Result<PublicUser> {
        let (username, password) = credentials.require()?;
        let digest = self.hasher.digest(password);

        let records = self.store.load().await?;
        let user = records
            .iter()
            .find(|r| r.username == username && r.password_digest == digest)
            .map(UserRecord::to_public);

        match user {
            Some(user) => {
                tracing::debug!(user_id = %user.id, "Login succeeded");
                Ok(user)
            }
            None => {
                tracing::warn!(username, "Login failed");
                Err(ServerError::Auth(INVALID_CREDENTIALS.to_string()))
            }
        }
    }

    /// All accounts in store order, without digests
    pub async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let records = self.store.load().await?;
        Ok(records.iter().map(UserRecord::to_summary).collect())
    }
}
