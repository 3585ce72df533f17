//! Access-token verification against the hosted auth service.
//!
//! The auth service signs its access tokens with a shared HS256 secret; this
//! provider verifies the signature and expiry and extracts the caller's
//! identity. Session issuance lives entirely in the auth service.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use nestegg_core::errors::{Error, Result, ValidationError};
use nestegg_core::identity::{AuthClaims, IdentityProviderTrait};

/// Claims the auth service embeds in its access tokens.
#[derive(Debug, Deserialize)]
struct TokenClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[allow(dead_code)]
    exp: usize,
}

/// Verifies HS256 access tokens issued by the hosted auth service.
pub struct JwtIdentityProvider {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityProvider {
    pub fn new(signing_secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            decoding_key: DecodingKey::from_secret(signing_secret),
            validation,
        }
    }
}

#[async_trait]
impl IdentityProviderTrait for JwtIdentityProvider {
    async fn verify_token(&self, token: &str) -> Result<AuthClaims> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(
            |err| match err.kind() {
                ErrorKind::ExpiredSignature => {
                    Error::Unauthorized("Access token expired".to_string())
                }
                ErrorKind::InvalidToken
                | ErrorKind::InvalidSignature
                | ErrorKind::MissingRequiredClaim(_) => {
                    Error::Unauthorized("Invalid access token".to_string())
                }
                other => Error::Unauthorized(format!("Token validation failed: {other:?}")),
            },
        )?;
        Ok(AuthClaims {
            sub: data.claims.sub,
            email: data.claims.email,
        })
    }
}

/// Decodes the configured signing secret.
///
/// Accepts either a base64-encoded value or a raw 32-byte ASCII string; the
/// decoded secret must be exactly 32 bytes.
pub fn decode_signing_secret(raw: &str) -> Result<Vec<u8>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Signing secret cannot be empty".to_string(),
        )));
    }
    let decoded = match BASE64.decode(trimmed) {
        Ok(bytes) => bytes,
        Err(_) if trimmed.len() == 32 => trimmed.as_bytes().to_vec(),
        Err(_) => {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Signing secret must be base64 encoded or a 32-byte ASCII string".to_string(),
            )))
        }
    };
    if decoded.len() != 32 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Signing secret must decode to exactly 32 bytes".to_string(),
        )));
    }
    Ok(decoded)
}
