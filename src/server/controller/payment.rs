use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError,
        middleware::auth::{AccessToken, AuthGuard},
        model::order::Channel,
        service::order::OrderService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Disable a payment.
///
/// The payment row is kept with `enabled = 0`; disabling it again succeeds.
///
/// # Access Control
/// - `Reception` channel permission
///
/// # Returns
/// - `204 No Content` - Payment disabled
/// - `401 Unauthorized` - Missing or unknown token
/// - `403 Forbidden` - No reception permission
/// - `404 Not Found` - No such payment for the caller's merchant
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/payments/{payment_id}",
    tag = PAYMENT_TAG,
    params(
        ("payment_id" = String, Path, description = "Payment ID")
    ),
    responses(
        (status = 204, description = "Payment disabled"),
        (status = 401, description = "Missing or unknown token", body = ErrorDto),
        (status = 403, description = "No reception permission", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn disable_payment(
    State(state): State<AppState>,
    token: AccessToken,
    Path(payment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &token)
        .require(&[Channel::Reception])
        .await?;

    let payment_id = parse_id("Payment", &payment_id)?;

    OrderService::new(&state.db, state.aggregation, state.shutdown.clone())
        .disable_payment(identity.merchant_id, payment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
