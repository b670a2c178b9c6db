use axum::{
    extract::{FromRequestParts, Query},
    http::{header::AUTHORIZATION, request::Parts},
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{identity::Identity, order::Channel},
};

/// Access token sent with a request, if any.
///
/// Read from `Authorization: Bearer <token>` first, then from the `token` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub Option<String>);

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

impl AccessToken {
    fn from_parts(parts: &Parts) -> Self {
        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        if bearer.is_some() {
            return Self(bearer);
        }

        let query = Query::<TokenQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.token)
            .filter(|token| !token.is_empty());

        Self(query)
    }
}

impl<S> FromRequestParts<S> for AccessToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    token: &'a AccessToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, token: &'a AccessToken) -> Self {
        Self { db, token }
    }

    /// Resolves the caller and checks it may use at least one of `channels`.
    ///
    /// An empty `channels` slice only requires a valid token.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Caller resolved and allowed
    /// - `Err(AuthError::InvalidToken)` - Token missing or unknown
    /// - `Err(AuthError::AccessDenied)` - Caller lacks every listed channel permission
    pub async fn require(&self, channels: &[Channel]) -> Result<Identity, AppError> {
        let Some(token) = self.token.0.as_deref() else {
            return Err(AuthError::InvalidToken.into());
        };

        let Some(identity) = UserRepository::new(self.db).find_by_token(token).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        if !channels.is_empty() && !channels.iter().any(|channel| identity.can_use(*channel)) {
            return Err(AuthError::AccessDenied(
                identity.user_id,
                format!("User lacks access to any of {:?}", channels),
            )
            .into());
        }

        Ok(identity)
    }
}
