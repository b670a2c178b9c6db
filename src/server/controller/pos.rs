use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        pos::{PosStatusEnvelopeDto, PosStatusUpdateDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AccessToken, AuthGuard},
        model::order::Channel,
        service::pos::PosService,
        state::AppState,
    },
};

/// Tag for grouping POS status endpoints in OpenAPI documentation
pub static POS_TAG: &str = "pos";

/// Get the POS status.
///
/// Reports the manual open switch, whether the opening hours cover the merchant's local
/// time, the next opening slot and the Uber Eats store state.
///
/// # Access Control
/// - Valid token
///
/// # Returns
/// - `200 OK` - Current status
/// - `401 Unauthorized` - Missing or unknown token
/// - `404 Not Found` - The caller's merchant has no parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/pos/status",
    tag = POS_TAG,
    responses(
        (status = 200, description = "Current POS status", body = PosStatusEnvelopeDto),
        (status = 401, description = "Missing or unknown token", body = ErrorDto),
        (status = 404, description = "Merchant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pos_status(
    State(state): State<AppState>,
    token: AccessToken,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let pos_status = PosService::new(&state.db, state.aggregation, state.shutdown.clone())
        .get_status(identity.merchant_id)
        .await?;

    Ok(Json(PosStatusEnvelopeDto { pos_status }))
}

/// Open or close the POS by hand.
///
/// # Access Control
/// - `Reception` channel permission
///
/// # Returns
/// - `200 OK` - Status after the change
/// - `401 Unauthorized` - Missing or unknown token
/// - `403 Forbidden` - No reception permission
/// - `404 Not Found` - The caller's merchant has no parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/pos/status",
    tag = POS_TAG,
    request_body = PosStatusUpdateDto,
    responses(
        (status = 200, description = "POS status after the change", body = PosStatusEnvelopeDto),
        (status = 401, description = "Missing or unknown token", body = ErrorDto),
        (status = 403, description = "No reception permission", body = ErrorDto),
        (status = 404, description = "Merchant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pos_status(
    State(state): State<AppState>,
    token: AccessToken,
    Json(update): Json<PosStatusUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &token)
        .require(&[Channel::Reception])
        .await?;

    let pos_status = PosService::new(&state.db, state.aggregation, state.shutdown.clone())
        .set_open(identity.merchant_id, update.status)
        .await?;

    Ok(Json(PosStatusEnvelopeDto { pos_status }))
}
