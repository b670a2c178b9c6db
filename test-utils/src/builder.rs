use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, DeliverySession};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(DeliverySession)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including the foreign keys declared by its `belongs_to` relations.
    /// Tables should be added in dependency order.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the catalog tables used by the menu aggregation.
    ///
    /// Tables added in dependency order:
    /// - MerchantParameters, Delay
    /// - TvaCategory, ProductCategory, Product
    /// - ComponentCategory, Component, UnitOfMeasureDesc, Recipe, Requires
    /// - ConfigurableAttribute, ConfigurableAttributeOption, ProductConfigurableAttribute
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_menu_tables(self) -> Self {
        self.with_table(MerchantParameters)
            .with_table(Delay)
            .with_table(TvaCategory)
            .with_table(ProductCategory)
            .with_table(Product)
            .with_table(ComponentCategory)
            .with_table(Component)
            .with_table(UnitOfMeasureDesc)
            .with_table(Recipe)
            .with_table(Requires)
            .with_table(ConfigurableAttribute)
            .with_table(ConfigurableAttributeOption)
            .with_table(ProductConfigurableAttribute)
    }

    /// Adds every table read by the order aggregation.
    ///
    /// This is `with_menu_tables()` plus users, customers, orders and all their child
    /// tables, delivery sessions included.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_order_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_order_tables(self) -> Self {
        self.with_table(User)
            .with_table(Customer)
            .with_menu_tables()
            .with_table(Discount)
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(OrderComment)
            .with_table(Extra)
            .with_table(Without)
            .with_table(Payment)
            .with_table(ScannorderSession)
            .with_table(SessionOrderItem)
            .with_table(Location)
            .with_table(OrderLocation)
            .with_table(OrderItemConfiguration)
            .with_table(DeliverySession)
            .with_table(DeliverySessionOrder)
    }

    /// Adds every table read by the floor plan.
    ///
    /// Tables added in dependency order:
    /// - Customer, Order
    /// - Location, OrderLocation
    /// - Floor, FloorArea
    /// - Booking, BookedLocation
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_floor_plan_tables(self) -> Self {
        self.with_table(Customer)
            .with_table(Order)
            .with_table(Location)
            .with_table(OrderLocation)
            .with_table(Floor)
            .with_table(FloorArea)
            .with_table(Booking)
            .with_table(BookedLocation)
    }

    /// Adds the tables read and written by the POS status.
    ///
    /// Not combinable with `with_menu_tables()`, which already adds `MerchantParameters`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_pos_tables(self) -> Self {
        self.with_table(Merchant)
            .with_table(MerchantParameters)
            .with_table(HoursOfOperation)
            .with_table(IntegrationUberEats)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
