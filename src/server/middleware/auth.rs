use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::auth::AuthUser,
    service::auth::TokenService,
};

const BEARER_PREFIX: &str = "Bearer ";

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    token_service: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        token_service: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            token_service,
            headers,
        }
    }

    /// Authenticates the request from its bearer token.
    ///
    /// Verifies the token, refreshes the caller's local user record from the token claims,
    /// and resolves the caller's roles from the group claim. Role requirements are
    /// enforced by the services, not here.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - The authenticated caller
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    /// - `Err(AppError::DbErr)` - Failed to store the user record
    pub async fn authenticate(&self) -> Result<AuthUser, AppError> {
        let token = self.bearer_token()?;
        let claims = self.token_service.verify(token)?;

        let user = UserRepository::new(self.db)
            .upsert(claims.to_upsert_param())
            .await?;

        Ok(AuthUser::new(
            user.id,
            user.username,
            claims.groups.iter().map(String::as_str),
        ))
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let value = self
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let token = value
            .strip_prefix(BEARER_PREFIX)
            .or_else(|| value.strip_prefix("bearer "))
            .ok_or(AuthError::MissingToken)?
            .trim();

        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        Ok(token)
    }
}
