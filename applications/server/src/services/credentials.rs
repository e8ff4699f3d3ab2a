/// Credential hashing
use sha2::{Digest, Sha256};

/// Maps plaintext passwords to fixed-length digests
///
/// Unsalted SHA-256, hex encoded. Must stay byte-compatible with the
/// digests already stored in record files.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialHasher;

impl CredentialHasher {
    pub fn new() -> Self {
        Self
    }

    /// Lowercase hex SHA-256 of the UTF-8 bytes of `plaintext`
    pub fn digest(&self, plaintext: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(plaintext.as_bytes());
        hex::encode(hasher.finalize())
    }
}
