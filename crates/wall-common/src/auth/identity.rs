//! Anonymous identity tokens
//!
//! Mints device-scoped anonymous identities using the `jsonwebtoken`
//! crate. An identity carries no personal data; it only namespaces like
//! records and tags message authorship. A client that presents its token
//! again keeps the same identity.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use wall_core::Snowflake;

use crate::error::AppError;

/// JWT claims for an anonymous identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Subject (identity id)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Marker so other token kinds are never accepted here
    pub anon: bool,
}

impl IdentityClaims {
    /// Get the identity id as a Snowflake
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as a Snowflake
    pub fn identity_id(&self) -> Result<Snowflake, AppError> {
        self.sub
            .parse::<i64>()
            .map(Snowflake::new)
            .map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Issued identity token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityToken {
    pub identity_id: Snowflake,
    pub token: String,
    pub expires_in: i64,
}

/// Service for minting and verifying anonymous identity tokens
#[derive(Clone)]
pub struct IdentityService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl IdentityService {
    /// Create a new identity service with the given secret and expiry
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Mint a token for a freshly generated identity id
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, identity_id: Snowflake) -> Result<IdentityToken, AppError> {
        let now = Utc::now();
        let claims = IdentityClaims {
            sub: identity_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
            anon: true,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode identity token")))?;

        Ok(IdentityToken {
            identity_id,
            token,
            expires_in: self.token_expiry,
        })
    }

    /// Decode and validate an identity token
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or not anonymous
    pub fn verify(&self, token: &str) -> Result<IdentityClaims, AppError> {
        let validation = Validation::default();

        let token_data =
            decode::<IdentityClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        if !token_data.claims.anon {
            return Err(AppError::InvalidToken);
        }

        Ok(token_data.claims)
    }

    /// Keep a presented identity, or mint a fresh one.
    ///
    /// A valid token is reissued for the same identity id (the device keeps
    /// its like history); anything else yields a brand-new identity.
    pub fn adopt_or_issue(
        &self,
        presented: Option<&str>,
        fresh_id: Snowflake,
    ) -> Result<IdentityToken, AppError> {
        if let Some(token) = presented {
            if let Ok(claims) = self.verify(token) {
                let identity_id = claims.identity_id()?;
                return self.issue(identity_id);
            }
        }
        self.issue(fresh_id)
    }
}

impl std::fmt::Debug for IdentityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> IdentityService {
        IdentityService::new("test-secret-key-that-is-long-enough", 2_592_000)
    }

    #[test]
    fn test_issue_and_verify() {
        let service = create_test_service();
        let id = Snowflake::new(12345);

        let issued = service.issue(id).unwrap();
        assert_eq!(issued.identity_id, id);
        assert!(!issued.token.is_empty());

        let claims = service.verify(&issued.token).unwrap();
        assert_eq!(claims.identity_id().unwrap(), id);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();

        let result = service.verify("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_adopt_keeps_identity() {
        let service = create_test_service();
        let original = service.issue(Snowflake::new(777)).unwrap();

        let adopted = service
            .adopt_or_issue(Some(&original.token), Snowflake::new(888))
            .unwrap();
        assert_eq!(adopted.identity_id, Snowflake::new(777));
    }

    #[test]
    fn test_adopt_falls_back_to_fresh_identity() {
        let service = create_test_service();

        let minted = service
            .adopt_or_issue(Some("garbage"), Snowflake::new(888))
            .unwrap();
        assert_eq!(minted.identity_id, Snowflake::new(888));

        let minted = service.adopt_or_issue(None, Snowflake::new(999)).unwrap();
        assert_eq!(minted.identity_id, Snowflake::new(999));
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let service = create_test_service();
        let other = IdentityService::new("a-completely-different-secret", 60);

        let issued = other.issue(Snowflake::new(1)).unwrap();
        assert!(service.verify(&issued.token).is_err());
    }
}
