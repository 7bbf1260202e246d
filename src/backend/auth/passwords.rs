/**
 * Password Hashing
 *
 * bcrypt wrappers used by the register and login handlers. bcrypt salts
 * per call, so hashing the same password twice yields different hashes
 * that both verify.
 */
use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a password for storage.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, BcryptError> {
    verify(password, password_hash)
}
