use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        delivery_session::{self, DELIVERY_SESSION_TAG},
        floor_plan::{self, FLOOR_PLAN_TAG},
        menu::{self, MENU_TAG},
        order::{self, ORDER_TAG},
        payment::{self, PAYMENT_TAG},
        pos::{self, POS_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "WelloResto API",
        description = "Order, delivery session, menu and floor plan aggregates"
    ),
    tags(
        (name = ORDER_TAG, description = "Order aggregates and payments"),
        (name = PAYMENT_TAG, description = "Payment write path"),
        (name = DELIVERY_SESSION_TAG, description = "Active delivery runs"),
        (name = MENU_TAG, description = "Merchant catalog"),
        (name = FLOOR_PLAN_TAG, description = "Tables, floors and bookings"),
        (name = POS_TAG, description = "Opening state of the point of sale")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(order::get_pending_orders))
        .routes(routes!(order::get_order_history))
        .routes(routes!(order::get_order))
        .routes(routes!(order::get_order_payments))
        .routes(routes!(payment::disable_payment))
        .routes(routes!(delivery_session::get_pending_delivery_sessions))
        .routes(routes!(menu::get_menu))
        .routes(routes!(floor_plan::get_locations))
        .routes(routes!(pos::get_pos_status, pos::update_pos_status))
        .split_for_parts();

    router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
}
