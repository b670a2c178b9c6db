//! Active delivery sessions and their drivers.

use entity::{delivery_session, user};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    model::order::{DeliveryManDto, DeliverySessionDto, OrderDto},
    server::{data::batch::BatchContext, error::aggregation::AggregationError},
};

/// `delivery_session.status` values of a run still in progress.
pub const ACTIVE_SESSION_STATUSES: [&str; 2] = ["1", "PENDING"];

/// Loads the merchant's active sessions with their driver, oldest first.
///
/// The returned sessions have no orders yet; see `attach_orders`.
pub async fn fetch_active(
    ctx: &BatchContext,
    merchant_id: i32,
) -> Result<Vec<DeliverySessionDto>, AggregationError> {
    let sessions = ctx
        .step(
            "delivery_sessions",
            delivery_session::Entity::find()
                .find_also_related(user::Entity)
                .filter(delivery_session::Column::MerchantId.eq(merchant_id))
                .filter(delivery_session::Column::Status.is_in(ACTIVE_SESSION_STATUSES))
                .order_by_asc(delivery_session::Column::Id)
                .all(ctx.conn()),
        )
        .await?;

    Ok(sessions
        .into_iter()
        .map(|(session, driver)| DeliverySessionDto {
            delivery_session_id: session.id,
            status: session.status,
            orders: Vec::new(),
            delivery_man: delivery_man(session.user_id, driver),
        })
        .collect())
}

/// Fills every session with clones of the assembled orders that belong to it.
///
/// The session's orders are the very objects the order views return, in the same order.
pub fn attach_orders(sessions: &mut [DeliverySessionDto], orders: &[OrderDto]) {
    for session in sessions.iter_mut() {
        session.orders = orders
            .iter()
            .filter(|order| order.delivery_session_id == Some(session.delivery_session_id))
            .cloned()
            .collect();
    }
}

fn delivery_man(user_id: i32, driver: Option<user::Model>) -> DeliveryManDto {
    match driver {
        Some(driver) => DeliveryManDto {
            user_id: driver.user_id,
            first_name: driver.first_name,
            last_name: driver.last_name,
            profile_picture: driver.profile_picture,
            lat: driver.lat,
            lng: driver.lng,
            planning_color: driver.planning_color,
        },
        None => DeliveryManDto {
            user_id,
            first_name: None,
            last_name: None,
            profile_picture: None,
            lat: None,
            lng: None,
            planning_color: None,
        },
    }
}
