use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        order::{OrderDto, PaymentsDto, PendingOrdersDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AccessToken, AuthGuard},
        model::order::Channel,
        service::order::OrderService,
        state::AppState,
        util::parse::{parse_datetime, parse_id, DayBound},
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

#[derive(Deserialize, IntoParams)]
pub struct PendingParams {
    /// Calling application: `0`/`WR_RECEPTION`, `1`/`WR_DELIVERY`, `2`/`WR_WAITER`
    pub app: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct HistoryParams {
    /// `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`
    pub date_from: String,
    /// `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`; a date-only value includes the whole day
    pub date_to: String,
}

/// Get the pending orders.
///
/// Returns the open orders of the caller's merchant together with the active delivery
/// sessions, all read from one snapshot. The `app` hint restricts the orders to what the
/// calling application handles; an unknown hint applies no restriction.
///
/// # Access Control
/// - Valid token; with a known `app` hint, the matching channel permission
///
/// # Returns
/// - `200 OK` - Pending orders and delivery sessions, possibly empty
/// - `401 Unauthorized` - Missing or unknown token
/// - `403 Forbidden` - No permission for the requested channel
/// - `500 Internal Server Error` - Aggregation failure
#[utoipa::path(
    get,
    path = "/api/orders/pending",
    tag = ORDER_TAG,
    params(PendingParams),
    responses(
        (status = 200, description = "Pending orders and active delivery sessions", body = PendingOrdersDto),
        (status = 401, description = "Missing or unknown token", body = ErrorDto),
        (status = 403, description = "No permission for the requested channel", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_orders(
    State(state): State<AppState>,
    token: AccessToken,
    Query(params): Query<PendingParams>,
) -> Result<impl IntoResponse, AppError> {
    let channel = params.app.as_deref().and_then(|hint| {
        let channel = Channel::from_hint(hint);
        if channel.is_none() {
            tracing::debug!(hint, "unknown app hint, no channel restriction");
        }
        channel
    });

    let required: Vec<Channel> = channel.into_iter().collect();
    let identity = AuthGuard::new(&state.db, &token).require(&required).await?;

    let pending = OrderService::new(&state.db, state.aggregation, state.shutdown.clone())
        .get_pending(identity.merchant_id, channel)
        .await?;

    Ok(Json(pending.into_dto()))
}

/// Get the orders created within a date range.
///
/// # Access Control
/// - `Reception` channel permission
///
/// # Returns
/// - `200 OK` - Orders created in the range, oldest first
/// - `400 Bad Request` - Unparseable dates or reversed range
/// - `401 Unauthorized` - Missing or unknown token
/// - `403 Forbidden` - No reception permission
/// - `500 Internal Server Error` - Aggregation failure
#[utoipa::path(
    get,
    path = "/api/orders/history",
    tag = ORDER_TAG,
    params(HistoryParams),
    responses(
        (status = 200, description = "Orders created in the range", body = Vec<OrderDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Missing or unknown token", body = ErrorDto),
        (status = 403, description = "No reception permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_history(
    State(state): State<AppState>,
    token: AccessToken,
    Query(params): Query<HistoryParams>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &token)
        .require(&[Channel::Reception])
        .await?;

    let from = parse_datetime("date_from", &params.date_from, DayBound::Start)?;
    let to = parse_datetime("date_to", &params.date_to, DayBound::End)?;

    let orders = OrderService::new(&state.db, state.aggregation, state.shutdown.clone())
        .get_history(identity.merchant_id, from, to)
        .await?;

    Ok(Json(orders))
}

/// Get a single order.
///
/// # Access Control
/// - Valid token
///
/// # Returns
/// - `200 OK` - The order aggregate
/// - `401 Unauthorized` - Missing or unknown token
/// - `404 Not Found` - No such order for the caller's merchant
/// - `500 Internal Server Error` - Aggregation failure
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "The order", body = OrderDto),
        (status = 401, description = "Missing or unknown token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    token: AccessToken,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let order_id = parse_id("Order", &order_id)?;

    let order = OrderService::new(&state.db, state.aggregation, state.shutdown.clone())
        .get_by_id(identity.merchant_id, order_id)
        .await?;

    Ok(Json(order))
}

/// Get the payments of an order.
///
/// Disabled payments are listed too, with `enabled = 0`.
///
/// # Access Control
/// - `Reception` or `Waiter` channel permission
///
/// # Returns
/// - `200 OK` - The order's payments, possibly empty
/// - `401 Unauthorized` - Missing or unknown token
/// - `403 Forbidden` - Neither reception nor waiter permission
/// - `404 Not Found` - No such order for the caller's merchant
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}/payments",
    tag = ORDER_TAG,
    params(
        ("order_id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Payments of the order", body = PaymentsDto),
        (status = 401, description = "Missing or unknown token", body = ErrorDto),
        (status = 403, description = "No reception or waiter permission", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_payments(
    State(state): State<AppState>,
    token: AccessToken,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &token)
        .require(&[Channel::Reception, Channel::Waiter])
        .await?;

    let order_id = parse_id("Order", &order_id)?;

    let payments = OrderService::new(&state.db, state.aggregation, state.shutdown.clone())
        .get_payments(identity.merchant_id, order_id)
        .await?;

    Ok(Json(PaymentsDto { payments }))
}
