//! Merchant-level factories: merchant rows, catalog version, delays, opening hours and the
//! Uber Eats integration.

use chrono::{NaiveDateTime, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a merchant in `timezone` with a closed POS and no catalog version.
pub async fn create_merchant(
    db: &DatabaseConnection,
    merchant_id: i32,
    timezone: &str,
) -> Result<entity::merchant::Model, DbErr> {
    let merchant = entity::merchant::ActiveModel {
        id: ActiveValue::Set(merchant_id),
        timezone: ActiveValue::Set(timezone.to_string()),
    }
    .insert(db)
    .await?;

    entity::merchant_parameters::ActiveModel {
        merchant_id: ActiveValue::Set(merchant_id),
        last_menu_update: ActiveValue::Set(None),
        is_open: ActiveValue::Set(false),
    }
    .insert(db)
    .await?;

    Ok(merchant)
}

/// Stores `version` as the merchant's `last_menu_update`.
pub async fn set_last_menu_update(
    db: &DatabaseConnection,
    merchant_id: i32,
    version: NaiveDateTime,
) -> Result<entity::merchant_parameters::Model, DbErr> {
    entity::merchant_parameters::ActiveModel {
        merchant_id: ActiveValue::Set(merchant_id),
        last_menu_update: ActiveValue::Set(Some(version)),
        is_open: ActiveValue::Set(false),
    }
    .insert(db)
    .await
}

/// Creates a delay entry.
pub async fn create_delay(
    db: &DatabaseConnection,
    short_description: &str,
    duration: i32,
    enabled: bool,
) -> Result<entity::delay::Model, DbErr> {
    entity::delay::ActiveModel {
        short_description: ActiveValue::Set(short_description.to_string()),
        duration: ActiveValue::Set(duration),
        enabled: ActiveValue::Set(enabled),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an enabled opening slot over the weekdays `day_from..=day_to` (1 = Monday).
pub async fn create_opening_slot(
    db: &DatabaseConnection,
    merchant_id: i32,
    day_from: i32,
    day_to: i32,
    hour_from: NaiveTime,
    hour_to: NaiveTime,
) -> Result<entity::hours_of_operation::Model, DbErr> {
    entity::hours_of_operation::ActiveModel {
        merchant_id: ActiveValue::Set(merchant_id),
        day_of_week_from: ActiveValue::Set(day_from),
        day_of_week_to: ActiveValue::Set(day_to),
        hour_from: ActiveValue::Set(hour_from),
        hour_to: ActiveValue::Set(hour_to),
        enabled: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an Uber Eats integration in busy mode until `delay_until`.
pub async fn create_uber_eats_integration(
    db: &DatabaseConnection,
    merchant_id: i32,
    enabled: bool,
    delay_until: Option<NaiveDateTime>,
) -> Result<entity::integration_uber_eats::Model, DbErr> {
    entity::integration_uber_eats::ActiveModel {
        merchant_id: ActiveValue::Set(merchant_id),
        enabled: ActiveValue::Set(enabled),
        estimated_preparation_time: ActiveValue::Set(Some("15".to_string())),
        delay_duration: ActiveValue::Set(delay_until.map(|_| "10".to_string())),
        delay_until: ActiveValue::Set(delay_until),
        closed_until: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
