//! Password hashing with bcrypt (fresh random salt per hash).

use tracing::error;

/// Hash a plaintext password with the configured work factor.
///
/// # Errors
/// Returns an error if the cost is out of range or the primitive fails.
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

/// Constant-time check of a plaintext against a stored hash.
///
/// A malformed stored hash counts as a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match bcrypt::verify(password, stored_hash) {
        Ok(matches) => matches,
        Err(e) => {
            error!("Password verification failed: {e}");

            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // MIN_COST keeps the tests fast; production uses the configured cost.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("p1", TEST_COST).unwrap();

        assert!(verify_password("p1", &hash));
        assert!(!verify_password("p2", &hash));
    }

    #[test]
    fn test_hash_embeds_cost_and_salt() {
        let first = hash_password("p1", TEST_COST).unwrap();
        let second = hash_password("p1", TEST_COST).unwrap();

        assert!(first.contains("$04$"));
        // Fresh salt per hash
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_mismatch() {
        assert!(!verify_password("p1", "not-a-bcrypt-hash"));
    }

    #[test]
    fn test_out_of_range_cost_fails() {
        assert!(hash_password("p1", 2).is_err());
    }
}
