//! Wire DTOs shared by the HTTP layer.
//!
//! Field names follow the JSON consumed by the existing reception, waiter and delivery
//! apps, so several keys (`TTC`, `isPaid`, `callHour`, ...) are renamed explicitly.

pub mod api;
pub mod datetime;
pub mod floor_plan;
pub mod menu;
pub mod order;
pub mod pos;
