//! Floor plan factories: tables, floors, drawn areas and bookings.

use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an enabled four-seat table, drawn nowhere, listed at `location_order`.
pub async fn create_location(
    db: &DatabaseConnection,
    merchant_id: i32,
    name: &str,
    location_order: i32,
) -> Result<entity::location::Model, DbErr> {
    entity::location::ActiveModel {
        merchant_id: ActiveValue::Set(merchant_id),
        location_name: ActiveValue::Set(name.to_string()),
        location_desc: ActiveValue::Set(None),
        seats: ActiveValue::Set(4),
        location_order: ActiveValue::Set(location_order),
        floor_id: ActiveValue::Set(None),
        shape: ActiveValue::Set(None),
        current_x: ActiveValue::Set(None),
        current_y: ActiveValue::Set(None),
        current_width: ActiveValue::Set(None),
        current_height: ActiveValue::Set(None),
        angle: ActiveValue::Set(None),
        enabled: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Places `order_id` at an existing table.
pub async fn place_order(
    db: &DatabaseConnection,
    order_id: i32,
    location_id: i32,
) -> Result<entity::order_location::Model, DbErr> {
    entity::order_location::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        location_id: ActiveValue::Set(location_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a floor.
pub async fn create_floor(
    db: &DatabaseConnection,
    merchant_id: i32,
    name: &str,
    enabled: bool,
) -> Result<entity::floor::Model, DbErr> {
    entity::floor::ActiveModel {
        merchant_id: ActiveValue::Set(merchant_id),
        name: ActiveValue::Set(name.to_string()),
        enabled: ActiveValue::Set(enabled),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an enabled area on `floor_id` with the raw `points` column.
pub async fn create_floor_area(
    db: &DatabaseConnection,
    floor_id: i32,
    points: Option<&str>,
) -> Result<entity::floor_area::Model, DbErr> {
    entity::floor_area::ActiveModel {
        floor_id: ActiveValue::Set(floor_id),
        name: ActiveValue::Set(Some("Terrace".to_string())),
        points: ActiveValue::Set(points.map(str::to_string)),
        x: ActiveValue::Set(Some(0.0)),
        y: ActiveValue::Set(Some(0.0)),
        angle: ActiveValue::Set(None),
        stroke_color: ActiveValue::Set(None),
        color: ActiveValue::Set(Some("#A0C4FF".to_string())),
        enabled: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a booking over `[from, to]` and books every table of `location_ids` for it.
pub async fn create_booking(
    db: &DatabaseConnection,
    merchant_id: i32,
    customer_id: i32,
    status: &str,
    from: NaiveDateTime,
    to: NaiveDateTime,
    location_ids: &[i32],
) -> Result<entity::booking::Model, DbErr> {
    let id = crate::factory::helpers::next_id();

    let booking = entity::booking::ActiveModel {
        merchant_id: ActiveValue::Set(merchant_id),
        customer_id: ActiveValue::Set(customer_id),
        booking_number: ActiveValue::Set(format!("B{id}")),
        comment: ActiveValue::Set(None),
        party_size: ActiveValue::Set(2),
        status: ActiveValue::Set(status.to_string()),
        booking_date_from: ActiveValue::Set(Some(from)),
        booking_date_to: ActiveValue::Set(Some(to)),
        booking_duration: ActiveValue::Set(Some((to - from).num_minutes() as i32)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for location_id in location_ids {
        entity::booked_location::ActiveModel {
            booking_id: ActiveValue::Set(booking.booking_id),
            location_id: ActiveValue::Set(*location_id),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(booking)
}
