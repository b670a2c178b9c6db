//! Service layer between the controllers and the repositories.
//!
//! Services turn repository results into the application's error vocabulary: a missing
//! aggregate becomes `AppError::NotFound`, aggregation failures are carried as
//! `AppError::AggregationErr`.

pub mod delivery_session;
pub mod floor_plan;
pub mod menu;
pub mod order;
pub mod pos;
