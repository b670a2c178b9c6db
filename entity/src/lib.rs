//! SeaORM entities for the restaurant point-of-sale schema.
//!
//! Table and column names follow the legacy POS database so the aggregation engine can run
//! against an existing deployment. Each module holds one table; `prelude` re-exports the
//! entity types under their short names.

pub mod prelude;

pub mod booked_location;
pub mod booking;
pub mod component;
pub mod component_category;
pub mod configurable_attribute;
pub mod configurable_attribute_option;
pub mod customer;
pub mod delay;
pub mod delivery_session;
pub mod delivery_session_order;
pub mod discount;
pub mod extra;
pub mod floor;
pub mod floor_area;
pub mod hours_of_operation;
pub mod integration_uber_eats;
pub mod location;
pub mod merchant;
pub mod merchant_parameters;
pub mod order;
pub mod order_comment;
pub mod order_item;
pub mod order_item_configuration;
pub mod order_location;
pub mod payment;
pub mod product;
pub mod product_category;
pub mod product_configurable_attribute;
pub mod recipe;
pub mod requires;
pub mod scannorder_session;
pub mod session_order_item;
pub mod tva_category;
pub mod unit_of_measure_desc;
pub mod user;
pub mod without;
