//! Password hashing functionality
//!
//! The users file format is consumed by Radicale's htpasswd backend with the
//! bcrypt method, so the hashing primitive here is fixed as bcrypt. The
//! `bcrypt` crate draws a fresh random salt on every call and emits the
//! complete modular-crypt string (prefix, cost, salt, digest), which is
//! stored verbatim in the hash segment of a record.

use bcrypt;
pub use bcrypt::DEFAULT_COST;

use errors::*;

/// Hashes `password` with a freshly generated salt at the given cost.
///
/// Two calls with identical inputs never share a salt, so the returned
/// strings differ while both verify. Errors from the primitive (for example
/// a cost outside the supported range) are propagated.
pub fn hash_with_cost(password: &str, cost: u32) -> Result<String> {
    let hash = bcrypt::hash(password, cost)?;
    debug!("hashed password at cost {}", cost);
    Ok(hash)
}

/// Verifies the provided password against a stored bcrypt hash string.
///
/// If there is any error in processing the hash or password, this
/// will simply return `false`.
pub fn verify(hash: &str, password: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod bcrypt_test {
    use super::*;

    // Tests hash at the minimum cost; the default takes ~100ms per call even
    // with the optimized test profile.
    const TEST_COST: u32 = 4;

    #[test]
    fn fresh_salt_per_call() {
        let password = "hunter2";
        let first = hash_with_cost(password, TEST_COST).unwrap();
        let second = hash_with_cost(password, TEST_COST).unwrap();
        assert_ne!(first, second);
        assert!(verify(&first, password));
        assert!(verify(&second, password));
    }

    #[test]
    fn rejects_wrong_password() {
        let hash = hash_with_cost("hunter2", TEST_COST).unwrap();
        assert!(!verify(&hash, "hunter3"));
    }

    #[test]
    fn encodes_cost_in_output() {
        let hash = hash_with_cost("hunter2", TEST_COST).unwrap();
        assert!(hash.starts_with("$2"));
        assert!(hash.contains("$04$"));
    }

    #[test]
    fn rejects_out_of_range_cost() {
        assert!(hash_with_cost("hunter2", 2).is_err());
    }

    #[test]
    fn handles_broken_hashes() {
        let password = "hunter2";

        // Not a bcrypt string at all
        assert!(!verify("not-a-hash", password));

        // Truncated hash
        assert!(!verify("$2a$10$ckjEeyTD6estWyoofn4ERO", password));

        // Unknown prefix
        assert!(!verify(
            "$9z$10$ckjEeyTD6estWyoofn4EROM9Ik2PqVcfcrepX.uGp6.aqRdCMN/Oe",
            password
        ));

        // Empty string
        assert!(!verify("", password));
    }
}
