mod floor_plan;
mod menu;
mod order;
mod payment;
mod pos;
mod user;
