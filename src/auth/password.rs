//! Password hashing.
//!
//! Thin wrapper around bcrypt: a fresh random salt per hash, a configurable
//! work factor (default 10), and constant-time verification courtesy of the
//! bcrypt crate. Both operations burn tens of milliseconds of CPU on
//! purpose, so the async variants push the work onto the blocking pool
//! instead of stalling the request executor.

use crate::error::ApiError;

/// Hash a plaintext password with a fresh salt at the given cost.
pub fn hash_password(plain: &str, cost: u32) -> Result<String, ApiError> {
    Ok(bcrypt::hash(plain, cost)?)
}

/// Verify a plaintext candidate against a stored hash.
///
/// Fails closed: a malformed stored hash verifies as `false` rather than
/// surfacing an error a caller could mistake for success.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    bcrypt::verify(plain, stored_hash).unwrap_or(false)
}

/// [`hash_password`] on the blocking pool.
pub async fn hash_password_blocking(plain: String, cost: u32) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || hash_password(&plain, cost)).await?
}

/// [`verify_password`] on the blocking pool.
pub async fn verify_password_blocking(plain: String, stored_hash: String) -> Result<bool, ApiError> {
    Ok(tokio::task::spawn_blocking(move || verify_password(&plain, &stored_hash)).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the test suite fast; production cost comes
    // from configuration.
    const TEST_COST: u32 = 4;

    #[test]
    fn round_trip_verifies() {
        let hash = hash_password("hunter2", TEST_COST).unwrap();
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn same_password_hashes_differently() {
        let a = hash_password("hunter2", TEST_COST).unwrap();
        let b = hash_password("hunter2", TEST_COST).unwrap();
        assert_ne!(a, b, "salts must differ per call");
        assert!(verify_password("hunter2", &a));
        assert!(verify_password("hunter2", &b));
    }

    #[test]
    fn malformed_stored_hash_fails_closed() {
        assert!(!verify_password("hunter2", "not-a-bcrypt-hash"));
        assert!(!verify_password("hunter2", ""));
    }

    #[tokio::test]
    async fn blocking_wrappers_agree_with_sync() {
        let hash = hash_password_blocking("hunter2".into(), TEST_COST)
            .await
            .unwrap();
        assert!(verify_password_blocking("hunter2".into(), hash)
            .await
            .unwrap());
    }
}
