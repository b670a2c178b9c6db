use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, floor_plan::FloorPlanDto},
    server::{
        error::AppError,
        middleware::auth::{AccessToken, AuthGuard},
        service::floor_plan::FloorPlanService,
        state::AppState,
    },
};

/// Tag for grouping floor plan endpoints in OpenAPI documentation
pub static FLOOR_PLAN_TAG: &str = "floor_plan";

/// Get the floor plan.
///
/// Lists the enabled tables in display order, each with the open order placed at it and
/// its accepted bookings, plus the floors and their drawn areas.
///
/// # Access Control
/// - Valid token
///
/// # Returns
/// - `200 OK` - The floor plan, possibly empty
/// - `401 Unauthorized` - Missing or unknown token
/// - `500 Internal Server Error` - Aggregation failure
#[utoipa::path(
    get,
    path = "/api/locations",
    tag = FLOOR_PLAN_TAG,
    responses(
        (status = 200, description = "Tables, floors, areas and bookings", body = FloorPlanDto),
        (status = 401, description = "Missing or unknown token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locations(
    State(state): State<AppState>,
    token: AccessToken,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let plan = FloorPlanService::new(&state.db, state.aggregation, state.shutdown.clone())
        .get(identity.merchant_id)
        .await?;

    Ok(Json(plan))
}
