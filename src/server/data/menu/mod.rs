//! Catalog aggregation.

pub mod assemble;
pub mod fetch;

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::{
    model::datetime,
    server::{
        data::{
            batch::{BatchContext, CancelSignal},
            menu::fetch::{fetch_version, MenuBatch},
        },
        error::aggregation::AggregationError,
        model::{menu::MenuOutcome, order::AggregationOptions},
    },
};

/// Repository assembling the merchant's menu.
pub struct MenuRepository<'a> {
    db: &'a DatabaseConnection,
    options: AggregationOptions,
    cancel: CancelSignal,
}

impl<'a> MenuRepository<'a> {
    /// Creates a new MenuRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `options` - Step timeout of the batch
    /// - `cancel` - Cancellation signal every batch step is raced against
    ///
    /// # Returns
    /// - `MenuRepository` - New repository instance
    pub fn new(
        db: &'a DatabaseConnection,
        options: AggregationOptions,
        cancel: CancelSignal,
    ) -> Self {
        Self {
            db,
            options,
            cancel,
        }
    }

    /// Reads the catalog, or only its version when the caller is already current.
    ///
    /// Versions are compared at second resolution. When they match, no other query runs.
    ///
    /// # Arguments
    /// - `merchant_id` - Merchant whose catalog is read
    /// - `last_known_version` - Version the caller holds, if any
    ///
    /// # Returns
    /// - `Ok(MenuOutcome::NoUpdate)` - The caller's version is current
    /// - `Ok(MenuOutcome::Menu)` - The full catalog
    /// - `Err(AggregationError)` - A step failed, timed out or was cancelled
    pub async fn get_menu(
        &self,
        merchant_id: i32,
        last_known_version: Option<NaiveDateTime>,
    ) -> Result<MenuOutcome, AggregationError> {
        let ctx = BatchContext::begin(self.db, &self.options, self.cancel.clone()).await?;

        let version = fetch_version(&ctx, merchant_id).await?;

        if let (Some(known), Some(current)) = (last_known_version, version) {
            if datetime::format(&known) == datetime::format(&current) {
                ctx.commit(0).await?;
                return Ok(MenuOutcome::NoUpdate { version: current });
            }
        }

        let batch = MenuBatch::load(&ctx, merchant_id, version).await?;
        let menu = assemble::assemble(batch);

        let products = menu
            .products_types
            .iter()
            .map(|category| category.products.len())
            .sum();
        ctx.commit(products).await?;

        Ok(MenuOutcome::Menu(menu))
    }
}
