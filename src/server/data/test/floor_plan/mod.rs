use crate::server::{
    data::{batch::CancelSignal, floor_plan::FloorPlanRepository},
    error::AppError,
    model::order::AggregationOptions,
};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod get;

const MERCHANT: i32 = 1;

fn repository(db: &DatabaseConnection) -> FloorPlanRepository<'_> {
    FloorPlanRepository::new(db, AggregationOptions::default(), CancelSignal::never())
}

/// Reference "now" of every floor plan test.
fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap()
}

fn hours(offset: i64) -> NaiveDateTime {
    now() + TimeDelta::hours(offset)
}
