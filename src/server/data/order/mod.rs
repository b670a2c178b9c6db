//! Order aggregation.
//!
//! `OrderRepository` drives one read batch per call: open a snapshot, resolve the view to a
//! filter (optionally narrowed to concrete order ids), run the fixed query sequence and
//! assemble the trees in memory. All views share that single routine.

pub mod assemble;
pub mod fetch;
pub mod predicate;
pub mod rows;

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::{
    model::order::{DeliverySessionDto, OrderDto},
    server::{
        data::{
            batch::{BatchContext, CancelSignal},
            delivery_session,
            order::{
                fetch::{resolve_order_ids, OrderBatch},
                predicate::OrderFilter,
            },
        },
        error::aggregation::AggregationError,
        model::order::{AggregationOptions, Channel, FetchStrategy, OrderView, PendingOrders},
    },
};

/// Most order ids one narrowed query binds. SQLite caps a statement at 32766 parameters.
pub const NARROWED_CHUNK_SIZE: usize = 500;

/// Repository assembling order aggregates.
pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
    options: AggregationOptions,
    cancel: CancelSignal,
}

impl<'a> OrderRepository<'a> {
    /// Creates a new OrderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `options` - Fetch strategy and step timeout
    /// - `cancel` - Cancellation signal every batch step is raced against
    ///
    /// # Returns
    /// - `OrderRepository` - New repository instance
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

    /// Pending orders and active delivery sessions, read from one snapshot.
    ///
    /// Each session's `orders` holds clones of the pending orders attached to it. With no
    /// pending order at all, no session query runs and both lists are empty.
    ///
    /// # Arguments
    /// - `merchant_id` - Merchant whose orders are read
    /// - `channel` - Optional channel restriction
    ///
    /// # Returns
    /// - `Ok(PendingOrders)` - Orders and sessions, possibly both empty
    /// - `Err(AggregationError)` - A step failed, timed out or was cancelled
    pub async fn get_pending(
        &self,
        merchant_id: i32,
        channel: Option<Channel>,
    ) -> Result<PendingOrders, AggregationError> {
        let ctx = self.begin().await?;

        let filter = OrderFilter::for_view(merchant_id, &OrderView::Pending, channel);
        let orders = self.aggregate(&ctx, filter).await?;

        if orders.is_empty() {
            ctx.commit(0).await?;
            return Ok(PendingOrders::empty());
        }

        let mut delivery_sessions = delivery_session::fetch_active(&ctx, merchant_id).await?;
        delivery_session::attach_orders(&mut delivery_sessions, &orders);

        ctx.commit(orders.len()).await?;

        Ok(PendingOrders {
            orders,
            delivery_sessions,
        })
    }

    /// Looks up a single order.
    ///
    /// # Returns
    /// - `Ok(Some(OrderDto))` - The order exists for this merchant
    /// - `Ok(None)` - No such order for this merchant
    /// - `Err(AggregationError)` - A step failed, timed out or was cancelled
    pub async fn get_by_id(
        &self,
        merchant_id: i32,
        order_id: i32,
    ) -> Result<Option<OrderDto>, AggregationError> {
        let orders = self
            .get_view(merchant_id, &OrderView::ById(order_id))
            .await?;

        Ok(orders.into_iter().next())
    }

    /// Orders created within `[from, to]`, whatever their state, oldest first.
    pub async fn get_history(
        &self,
        merchant_id: i32,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<OrderDto>, AggregationError> {
        self.get_view(merchant_id, &OrderView::History { from, to })
            .await
    }

    /// Runs the batch for any view and returns the assembled orders, oldest first.
    pub async fn get_view(
        &self,
        merchant_id: i32,
        view: &OrderView,
    ) -> Result<Vec<OrderDto>, AggregationError> {
        let ctx = self.begin().await?;

        let filter = OrderFilter::for_view(merchant_id, view, None);
        let orders = self.aggregate(&ctx, filter).await?;

        ctx.commit(orders.len()).await?;

        Ok(orders)
    }

    /// Active delivery sessions, each with its orders assembled through the session view.
    ///
    /// Sessions without orders are returned with an empty `orders` list.
    pub async fn get_pending_delivery_sessions(
        &self,
        merchant_id: i32,
    ) -> Result<Vec<DeliverySessionDto>, AggregationError> {
        let ctx = self.begin().await?;

        let mut sessions = delivery_session::fetch_active(&ctx, merchant_id).await?;
        if sessions.is_empty() {
            ctx.commit(0).await?;
            return Ok(sessions);
        }

        let session_ids = sessions
            .iter()
            .map(|session| session.delivery_session_id)
            .collect();
        let filter =
            OrderFilter::for_view(merchant_id, &OrderView::SessionScoped(session_ids), None);
        let orders = self.aggregate(&ctx, filter).await?;

        delivery_session::attach_orders(&mut sessions, &orders);

        ctx.commit(orders.len()).await?;

        Ok(sessions)
    }

    async fn begin(&self) -> Result<BatchContext, AggregationError> {
        BatchContext::begin(self.db, &self.options, self.cancel.clone()).await
    }

    /// The shared fetch-and-assemble routine behind every view.
    ///
    /// Narrowed runs load the resolved ids in chunks of `NARROWED_CHUNK_SIZE`. Ids come back
    /// in header order, so appending each chunk's orders keeps the result oldest first.
    async fn aggregate(
        &self,
        ctx: &BatchContext,
        filter: OrderFilter,
    ) -> Result<Vec<OrderDto>, AggregationError> {
        match self.options.strategy {
            FetchStrategy::Direct => {
                let batch = OrderBatch::load(ctx, &filter).await?;
                Ok(assemble::assemble(batch))
            }
            FetchStrategy::Narrowed => {
                let order_ids = resolve_order_ids(ctx, &filter).await?;

                let mut orders = Vec::with_capacity(order_ids.len());
                for chunk in order_ids.chunks(NARROWED_CHUNK_SIZE) {
                    let scope = OrderFilter::for_order_ids(filter.merchant_id(), chunk.to_vec());
                    let batch = OrderBatch::load(ctx, &scope).await?;
                    orders.extend(assemble::assemble(batch));
                }

                Ok(orders)
            }
        }
    }
}
