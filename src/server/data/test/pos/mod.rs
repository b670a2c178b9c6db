use crate::server::{
    data::{batch::CancelSignal, pos::PosRepository},
    error::AppError,
    model::order::AggregationOptions,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod get_status;
mod set_open;

const MERCHANT: i32 = 1;

fn repository(db: &DatabaseConnection) -> PosRepository<'_> {
    PosRepository::new(db, AggregationOptions::default(), CancelSignal::never())
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Friday 2025-03-14 at `hour:minute` UTC. Paris is one hour ahead on that date.
fn friday_utc(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, hour, minute, 0).unwrap()
}

/// Friday 2025-03-14 at `hour:minute`, wall clock.
fn friday_local(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_time(hm(hour, minute))
}
