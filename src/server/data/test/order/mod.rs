use crate::server::{
    data::{batch::CancelSignal, order::OrderRepository},
    error::AppError,
    model::order::{AggregationOptions, Channel, FetchStrategy},
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod cancellation;
mod failure;
mod get_by_id;
mod get_history;
mod get_pending;
mod get_pending_delivery_sessions;
mod strategy;

/// Merchant every order test seeds its rows under.
const MERCHANT: i32 = 1;

fn repository(db: &DatabaseConnection) -> OrderRepository<'_> {
    OrderRepository::new(db, AggregationOptions::default(), CancelSignal::never())
}
