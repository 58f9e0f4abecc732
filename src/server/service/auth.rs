//! Bearer token verification.
//!
//! Tokens are issued by the external identity provider and signed with a shared HS256
//! secret. This service only verifies them and exposes their claims; it never issues
//! tokens outside of tests.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{error::auth::AuthError, model::user::UpsertUserParam};

/// Identity claims carried by tokens from the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Group names, mapped to roles when the request is authenticated.
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub institute: Option<String>,
    pub exp: usize,
}

impl Claims {
    /// Profile values used to refresh the local user projection.
    pub fn to_upsert_param(&self) -> UpsertUserParam {
        UpsertUserParam {
            id: self.user_id,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            state: self.state.clone(),
            institute: self.institute.clone(),
        }
    }
}

#[derive(Clone)]
pub struct TokenService {
    key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a verifier for tokens signed with `secret`.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// # Arguments
    /// - `token` - Raw token without the `Bearer ` prefix
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or malformed claims
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
