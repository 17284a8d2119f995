//! Password hashing for visitor accounts.

use bcrypt::{hash, verify};

// Cost 8 keeps login and the seeded demo accounts fast enough for tests
// while still being a real bcrypt work factor.
const BCRYPT_COST: u32 = 8;

/// Hashes a plaintext password with bcrypt.
///
/// # Example
/// ```
/// use zoo_utils::hash::bcrypt_hash;
///
/// let hashed = bcrypt_hash("demo1234");
/// assert_ne!(hashed, "demo1234");
/// ```
pub fn bcrypt_hash(password: &str) -> String {
    // bcrypt only fails on invalid cost, and ours is a constant
    hash(password.as_bytes(), BCRYPT_COST).unwrap()
}

/// Checks a plaintext password against a stored bcrypt hash.
///
/// A malformed hash counts as a mismatch rather than an error, so a
/// corrupted row can never let a login through.
pub fn bcrypt_check(password: &str, hash: &str) -> bool {
    verify(password.as_bytes(), hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies_and_rejects() {
        let hash = bcrypt_hash("demo1234");

        assert!(bcrypt_check("demo1234", &hash));
        assert!(!bcrypt_check("Demo1234", &hash));
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch() {
        assert!(!bcrypt_check("demo1234", "not-a-bcrypt-hash"));
    }
}
