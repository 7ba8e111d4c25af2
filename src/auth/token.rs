use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims carried by a session token. Stateless: nothing is persisted
/// server-side, expiry is enforced on decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Owning user id.
    pub sub: i64,
    pub iat: i64,
    pub exp: i64,
}

pub fn issue_token(user_id: i64, secret: &str, expiry_hours: i64) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let claims = TokenClaims {
        sub: user_id,
        iat: now.timestamp(),
        exp: (now + chrono::Duration::hours(expiry_hours)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token signing failed: {}", e)))
}

/// Decode and validate a token. Bad signature, garbage input and expired
/// tokens all collapse to `InvalidToken`.
pub fn verify_token(token: &str, secret: &str) -> Result<TokenClaims, AppError> {
    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret-0123456789-0123456789";

    #[test]
    fn test_issue_verify_roundtrip() {
        let token = issue_token(42, SECRET, 1).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_token(42, SECRET, 1).unwrap();

        assert!(verify_token(&token, "some-other-secret-0123456789-012345").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Two hours in the past, well beyond the decoder's default leeway.
        let token = issue_token(42, SECRET, -2).unwrap();

        assert!(verify_token(&token, SECRET).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(verify_token("not.a.token", SECRET).is_err());
    }
}
