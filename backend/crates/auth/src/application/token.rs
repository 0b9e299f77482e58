//! Session Token Codec
//!
//! Stateless signed tokens: `base64url(claims JSON) "." base64url(HMAC)`.
//! The claims carry the full identity plus issued-at/expiry, so no session
//! storage is consulted on reads. Verification is total: any malformed,
//! tampered or expired token resolves to `None`, never to an error, so the
//! gate treats every bad token uniformly as "unauthenticated".

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::Duration;

use crate::domain::user::SessionUser;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Signed token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user: SessionUser,
    /// Issued-at, Unix seconds
    pub iat: i64,
    /// Expiry, Unix seconds
    pub exp: i64,
}

/// Issue a signed session token for `user`, valid for `ttl`.
pub fn issue_token(user: &SessionUser, secret: &[u8], ttl: Duration) -> AuthResult<String> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        user: user.clone(),
        iat: now,
        exp: now + ttl.as_secs() as i64,
    };

    let payload = serde_json::to_vec(&claims)
        .map_err(|e| AuthError::Internal(format!("Failed to encode claims: {e}")))?;
    let payload_b64 = URL_SAFE_NO_PAD.encode(&payload);

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload_b64.as_bytes());
    let signature_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{payload_b64}.{signature_b64}"))
}

/// Verify a token and return its identity, or `None` if the token is
/// malformed, carries a bad signature, or has expired.
pub fn verify_token(token: &str, secret: &[u8]) -> Option<SessionUser> {
    let (payload_b64, signature_b64) = token.split_once('.')?;

    // Signature first, before touching the payload.
    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload_b64.as_bytes());

    let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;
    mac.verify_slice(&signature).ok()?;

    let payload = URL_SAFE_NO_PAD.decode(payload_b64).ok()?;
    let claims: Claims = serde_json::from_slice(&payload).ok()?;

    if claims.exp <= Utc::now().timestamp() {
        return None;
    }

    Some(claims.user)
}
