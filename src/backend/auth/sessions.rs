/**
 * Session Tokens
 *
 * JWT issue and verify. Tokens bind a user ID and email to a one-hour
 * expiry; validity is purely a function of signature and expiry, nothing
 * is persisted server-side.
 */
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime: one hour.
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Get JWT secret from environment
fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development default");
        "collab-notes-dev-secret-change-in-production".to_string()
    })
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Create a session token for a user.
///
/// # Arguments
/// * `user_id` - User ID (UUID)
/// * `email` - User email
///
/// # Returns
/// Signed JWT, expiring in one hour
pub fn create_token(user_id: Uuid, email: String) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user_id.to_string(),
        email,
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(jwt_secret().as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token.
///
/// Rejects tokens with an invalid signature or elapsed expiry.
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(jwt_secret().as_ref());
    let token_data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(token_data.claims)
}

/// Resolve a token to a user identity, or no identity at all.
///
/// Any failure (bad signature, elapsed expiry, unparseable subject) is
/// `None`, so callers treat an absent or invalid token as anonymous access
/// without special-casing errors.
pub fn token_identity(token: &str) -> Option<Uuid> {
    let claims = verify_token(token).ok()?;
    Uuid::parse_str(&claims.sub).ok()
}
