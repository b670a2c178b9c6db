pub mod delivery_session;
pub mod floor_plan;
pub mod menu;
pub mod order;
pub mod payment;
pub mod pos;
