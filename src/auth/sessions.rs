/**
 * Session Tokens
 *
 * Stateless HS256 JWTs carrying `{userId, iat, exp}`. A token issued at `t`
 * is valid for every instant strictly before `t + TOKEN_TTL_SECS` and never
 * afterwards. There is no refresh and no revocation.
 */

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime: 7 days
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("token rejected: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("token expired at {expired_at}")]
    Expired { expired_at: i64 },
}

/// Issues and verifies session tokens with one shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared in `verify_at` against an explicit clock with no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Create a token for `user_id`, issued now
    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    /// Create a token for `user_id` as if issued at `issued_at` (Unix seconds)
    pub fn issue_at(&self, user_id: i64, issued_at: i64) -> Result<String, TokenError> {
        let claims = Claims {
            user_id,
            iat: issued_at,
            exp: issued_at + TOKEN_TTL_SECS,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Verify a token against the current time
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify a token against `now` (Unix seconds)
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let data =
            decode::<Claims>(token, &self.decoding, &self.validation).map_err(TokenError::Invalid)?;

        if now >= data.claims.exp {
            return Err(TokenError::Expired {
                expired_at: data.claims.exp,
            });
        }

        Ok(data.claims)
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret")
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = issuer();
        let token = tokens.issue(7).unwrap();
        assert!(!token.is_empty());

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_payload_uses_user_id_field() {
        let claims = Claims {
            user_id: 1,
            iat: T0,
            exp: T0 + TOKEN_TTL_SECS,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["userId"], 1);
    }

    #[test]
    fn test_valid_until_just_before_expiry() {
        let tokens = issuer();
        let token = tokens.issue_at(1, T0).unwrap();

        assert!(tokens.verify_at(&token, T0).is_ok());
        assert!(tokens.verify_at(&token, T0 + TOKEN_TTL_SECS - 1).is_ok());
    }

    #[test]
    fn test_rejected_from_expiry_onwards() {
        let tokens = issuer();
        let token = tokens.issue_at(1, T0).unwrap();

        for now in [T0 + TOKEN_TTL_SECS, T0 + TOKEN_TTL_SECS + 1, T0 + 30 * TOKEN_TTL_SECS] {
            match tokens.verify_at(&token, now) {
                Err(TokenError::Expired { expired_at }) => {
                    assert_eq!(expired_at, T0 + TOKEN_TTL_SECS)
                }
                other => panic!("expected Expired at {now}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = TokenIssuer::new("other-secret").issue(1).unwrap();
        assert!(matches!(issuer().verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            issuer().verify("invalid.token.here"),
            Err(TokenError::Invalid(_))
        ));
        assert!(matches!(issuer().verify(""), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_token_without_expiry_rejected() {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "userId": 1 }),
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert!(matches!(issuer().verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let tokens = issuer();
        let token = tokens.issue(1).unwrap();
        let forged_claims = tokens.issue(2).unwrap();

        // Header and signature of one token around the payload of another.
        let parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged_claims.split('.').collect();
        let spliced = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

        assert!(matches!(tokens.verify(&spliced), Err(TokenError::Invalid(_))));
    }
}
