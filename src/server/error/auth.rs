use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No token was supplied, or the token does not belong to any user.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing or unknown access token")]
    InvalidToken,

    /// The user exists but lacks the permission required by the request.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Reason logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidToken` → 401 Unauthorized with "Invalid token"
/// - `AccessDenied` → 403 Forbidden with "Access denied"
///
/// The detailed reason is logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid token".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
