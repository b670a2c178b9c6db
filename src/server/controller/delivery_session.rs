use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, order::DeliverySessionsDto},
    server::{
        error::AppError,
        middleware::auth::{AccessToken, AuthGuard},
        model::order::Channel,
        service::delivery_session::DeliverySessionService,
        state::AppState,
    },
};

/// Tag for grouping delivery session endpoints in OpenAPI documentation
pub static DELIVERY_SESSION_TAG: &str = "delivery_session";

/// Get the active delivery sessions.
///
/// Each session lists its orders, assembled exactly as the order lookups return them.
/// Sessions without orders are listed with an empty `orders` array.
///
/// # Access Control
/// - `Reception` or `Delivery` channel permission
///
/// # Returns
/// - `200 OK` - Active sessions, possibly none
/// - `401 Unauthorized` - Missing or unknown token
/// - `403 Forbidden` - Neither reception nor delivery permission
/// - `500 Internal Server Error` - Aggregation failure
#[utoipa::path(
    get,
    path = "/api/delivery-sessions/pending",
    tag = DELIVERY_SESSION_TAG,
    responses(
        (status = 200, description = "Active delivery sessions", body = DeliverySessionsDto),
        (status = 401, description = "Missing or unknown token", body = ErrorDto),
        (status = 403, description = "No reception or delivery permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_delivery_sessions(
    State(state): State<AppState>,
    token: AccessToken,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &token)
        .require(&[Channel::Reception, Channel::Delivery])
        .await?;

    let delivery_sessions =
        DeliverySessionService::new(&state.db, state.aggregation, state.shutdown.clone())
            .get_pending(identity.merchant_id)
            .await?;

    Ok(Json(DeliverySessionsDto { delivery_sessions }))
}
