//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test rows with sensible defaults,
//! reducing boilerplate in tests. Factories insert directly into the database, so the
//! referenced rows (product, order, user) must exist first; SQLite enforces the foreign keys.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let product = factory::helpers::create_product_with_dependencies(&db, 1).await?;
//!     let order = factory::order::create_order(&db, 1).await?;
//!     let item = factory::order_item::create_order_item(&db, &order, product.product_id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let order = factory::order::OrderFactory::new(&db, 1)
//!     .state("CLOSED")
//!     .order_type("DELIVERY")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Staff users with tokens and channel permissions
//! - `customer` - Customers with permanent and temporary addresses
//! - `order` - Order headers
//! - `order_item` - Order lines
//! - `product` - Products, product categories and VAT rates
//! - `component` - Components, their categories and recipe requirements
//! - `modifier` - Extras, withouts and discounts
//! - `configuration` - Configurable attributes, options and selections
//! - `order_detail` - Payments, comments, locations and scan-and-order attributions
//! - `delivery_session` - Delivery sessions and their order memberships
//! - `merchant` - Merchants, their parameters, delays, opening hours and Uber Eats integration
//! - `floor_plan` - Tables, floors, floor areas and bookings
//! - `helpers` - ID generation and multi-row helpers

pub mod component;
pub mod configuration;
pub mod customer;
pub mod delivery_session;
pub mod floor_plan;
pub mod helpers;
pub mod merchant;
pub mod modifier;
pub mod order;
pub mod order_detail;
pub mod order_item;
pub mod product;
pub mod user;

pub use order::create_order;
pub use order_item::create_order_item;
pub use user::create_user;
