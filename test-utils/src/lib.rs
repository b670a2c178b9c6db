//! WelloResto Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the aggregation
//! service. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for seeding merchant data (orders, catalog, delivery sessions).
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders and helpers inserting rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_pending_orders() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_order_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!     // Seed with factories, then call the repository under test...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
