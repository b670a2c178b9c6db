//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::{data::batch::CancelSignal, model::order::AggregationOptions};

/// Application state containing shared resources.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle, the options are
/// `Copy` and `CancelSignal` wraps a watch receiver.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Fetch strategy and step timeout of every read batch.
    pub aggregation: AggregationOptions,

    /// Fires when the server shuts down; in-flight batches abort at their next step.
    pub shutdown: CancelSignal,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `aggregation` - Read batch settings
    /// - `shutdown` - Server shutdown signal
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        aggregation: AggregationOptions,
        shutdown: CancelSignal,
    ) -> Self {
        Self {
            db,
            aggregation,
            shutdown,
        }
    }
}
