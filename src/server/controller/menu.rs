use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, menu::MenuDto},
    server::{
        error::AppError,
        middleware::auth::{AccessToken, AuthGuard},
        service::menu::MenuService,
        state::AppState,
        util::parse::{parse_datetime, DayBound},
    },
};

/// Tag for grouping menu endpoints in OpenAPI documentation
pub static MENU_TAG: &str = "menu";

#[derive(Deserialize, IntoParams)]
pub struct MenuParams {
    /// Catalog version the caller holds, `YYYY-MM-DD HH:MM:SS`
    pub last_menu_update: Option<String>,
}

/// Get the merchant's menu.
///
/// When `last_menu_update` equals the stored catalog version (second resolution), only
/// `{"status": "no_update_required"}` and the version are returned.
///
/// # Access Control
/// - Valid token
///
/// # Returns
/// - `200 OK` - Full menu or the `no_update_required` envelope
/// - `400 Bad Request` - Unparseable `last_menu_update`
/// - `401 Unauthorized` - Missing or unknown token
/// - `500 Internal Server Error` - Aggregation failure
#[utoipa::path(
    get,
    path = "/api/menu",
    tag = MENU_TAG,
    params(MenuParams),
    responses(
        (status = 200, description = "Menu or no_update_required", body = MenuDto),
        (status = 400, description = "Invalid last_menu_update", body = ErrorDto),
        (status = 401, description = "Missing or unknown token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu(
    State(state): State<AppState>,
    token: AccessToken,
    Query(params): Query<MenuParams>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let last_known_version = params
        .last_menu_update
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .map(|value| parse_datetime("last_menu_update", value, DayBound::Start))
        .transpose()?;

    let outcome = MenuService::new(&state.db, state.aggregation, state.shutdown.clone())
        .get_menu(identity.merchant_id, last_known_version)
        .await?;

    Ok(Json(outcome.into_dto()))
}
