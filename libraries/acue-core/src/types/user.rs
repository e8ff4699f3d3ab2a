/// User domain types
use crate::types::UserId;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Persisted user account
///
/// Field names on disk follow the long-standing file layout: the digest is
/// stored under `password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user identifier
    pub id: UserId,

    /// Login name, unique across the record set (exact, case-sensitive)
    pub username: String,

    /// Hex digest of the password
    #[serde(rename = "password")]
    pub password_digest: String,

    /// Contact address derived from the username
    pub email: String,

    /// Account creation timestamp (ISO string)
    pub created_at: String,
}

impl UserRecord {
    /// Create a fresh record with a generated ID and the current timestamp
    pub fn new(
        username: impl Into<String>,
        password_digest: impl Into<String>,
        email_domain: &str,
    ) -> Self {
        let username = username.into();
        let email = format!("{}@{}", username, email_domain);

        Self {
            id: UserId::generate(),
            username,
            password_digest: password_digest.into(),
            email,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Fields safe to hand back to the account holder
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }

    /// Fields shown in administrative listings
    pub fn to_summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

/// Public projection of a user; never carries the digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    /// Unique user identifier
    pub id: UserId,
    /// Login name
    pub username: String,
    /// Contact address
    pub email: String,
}

/// Administrative projection of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Unique user identifier
    pub id: UserId,
    /// Login name
    pub username: String,
    /// Contact address
    pub email: String,
    /// Account creation timestamp (ISO string)
    pub created_at: String,
}
