//! Identity provider contract.
//!
//! Sign-up, sign-in, and token issuance are handled by an external identity
//! provider. The core only needs to turn a bearer token into a resolved user
//! identity; everything downstream filters on that user id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Claims resolved from a verified access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthClaims {
    /// The user id (`sub` claim).
    pub sub: String,
    pub email: Option<String>,
}

/// Trait defining the contract for token verification.
///
/// Implementations verify the token signature and expiry against the hosted
/// identity provider and return the resolved claims. Failures surface as
/// `Error::Unauthorized`.
#[async_trait]
pub trait IdentityProviderTrait: Send + Sync {
    async fn verify_token(&self, token: &str) -> Result<AuthClaims>;
}
