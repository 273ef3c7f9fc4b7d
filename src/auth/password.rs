use tracing::warn;

pub use bcrypt::DEFAULT_COST;

/// Compare a plaintext password against a stored bcrypt hash.
///
/// Fails closed: a malformed hash counts as a mismatch.
pub fn verify(plaintext: &str, stored_hash: &str) -> bool {
    match bcrypt::verify(plaintext, stored_hash) {
        Ok(matches) => matches,
        Err(e) => {
            warn!("Stored password hash could not be checked: {}", e);
            false
        }
    }
}

/// Hash a password for out-of-band user provisioning.
pub fn hash(plaintext: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plaintext, cost)
}
