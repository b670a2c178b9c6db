use crate::server::{
    data::{batch::CancelSignal, menu::MenuRepository},
    error::AppError,
    model::{menu::MenuOutcome, order::AggregationOptions},
};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod get_menu;

const MERCHANT: i32 = 1;

fn repository(db: &DatabaseConnection) -> MenuRepository<'_> {
    MenuRepository::new(db, AggregationOptions::default(), CancelSignal::never())
}

fn version() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(9, 26, 53)
        .unwrap()
}
