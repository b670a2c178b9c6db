//! Order predicate builder.
//!
//! Translates an `OrderView` (plus an optional channel) into one parameterized condition
//! over the `orders` table. Every query of an order batch joins `orders` under its own name,
//! so the same condition applies to all of them unchanged. Nothing here touches the database.

use entity::{delivery_session, delivery_session_order, order, order_item};
use sea_orm::{
    sea_query::SelectStatement, ColumnTrait, Condition, EntityTrait, QueryFilter, QuerySelect,
    QueryTrait,
};

use crate::server::{
    data::delivery_session::ACTIVE_SESSION_STATUSES,
    model::order::{Channel, OrderView},
};

/// `brand_status` of online orders whose payment has not been confirmed yet.
const ONLINE_PAYMENT_PENDING: &str = "ONLINE_PAYMENT_PENDING";

/// Filter on the `orders` table shared by every query of one batch.
#[derive(Debug, Clone)]
pub struct OrderFilter {
    merchant_id: i32,
    condition: Condition,
}

impl OrderFilter {
    /// Builds the filter of a view for one merchant.
    ///
    /// # Arguments
    /// - `merchant_id` - Merchant whose orders are visible
    /// - `view` - Which orders the batch covers
    /// - `channel` - Optional channel restriction; `None` leaves the view unrestricted
    pub fn for_view(merchant_id: i32, view: &OrderView, channel: Option<Channel>) -> Self {
        let mut condition = Condition::all().add(order::Column::MerchantId.eq(merchant_id));

        condition = match view {
            OrderView::Pending => condition.add(pending()),
            OrderView::ById(order_id) => condition.add(order::Column::OrderId.eq(*order_id)),
            OrderView::History { from, to } => {
                condition.add(order::Column::CreationDate.between(*from, *to))
            }
            OrderView::SessionScoped(session_ids) => {
                condition.add(order::Column::OrderId.in_subquery(session_orders(session_ids)))
            }
        };

        if let Some(restriction) = channel.and_then(channel_restriction) {
            condition = condition.add(restriction);
        }

        Self {
            merchant_id,
            condition,
        }
    }

    /// Builds the narrowed filter over an already resolved id set.
    ///
    /// Every id is bound as its own parameter, so callers keep `order_ids` below the backend's
    /// parameter limit (see `NARROWED_CHUNK_SIZE`).
    pub fn for_order_ids(merchant_id: i32, order_ids: Vec<i32>) -> Self {
        Self {
            merchant_id,
            condition: Condition::all()
                .add(order::Column::MerchantId.eq(merchant_id))
                .add(order::Column::OrderId.is_in(order_ids)),
        }
    }

    pub fn merchant_id(&self) -> i32 {
        self.merchant_id
    }

    pub fn condition(&self) -> Condition {
        self.condition.clone()
    }

    /// `SELECT product_id` of the non-empty order lines the filter covers.
    ///
    /// Bounds the per-product queries (recipes, attribute templates) to the products that
    /// actually appear in the batch.
    pub fn product_ids_query(&self) -> SelectStatement {
        order_item::Entity::find()
            .select_only()
            .column(order_item::Column::ProductId)
            .inner_join(order::Entity)
            .filter(self.condition())
            .filter(order_item::Column::Quantity.gt(0))
            .distinct()
            .into_query()
    }
}

/// Open orders not waiting on an online payment, or attached to an active delivery session.
fn pending() -> Condition {
    let open = Condition::all()
        .add(order::Column::State.eq("OPEN"))
        .add(
            Condition::any()
                .add(order::Column::BrandStatus.is_null())
                .add(order::Column::BrandStatus.ne(ONLINE_PAYMENT_PENDING)),
        );

    let in_active_session = delivery_session_order::Entity::find()
        .select_only()
        .column(delivery_session_order::Column::OrderId)
        .inner_join(delivery_session::Entity)
        .filter(delivery_session::Column::Status.is_in(ACTIVE_SESSION_STATUSES))
        .into_query();

    Condition::any()
        .add(open)
        .add(order::Column::OrderId.in_subquery(in_active_session))
}

fn session_orders(session_ids: &[i32]) -> SelectStatement {
    delivery_session_order::Entity::find()
        .select_only()
        .column(delivery_session_order::Column::OrderId)
        .filter(
            delivery_session_order::Column::DeliverySessionId.is_in(session_ids.iter().copied()),
        )
        .into_query()
}

/// Extra condition of a channel; reception sees everything.
fn channel_restriction(channel: Channel) -> Option<Condition> {
    match channel {
        Channel::Reception => None,
        Channel::Delivery => Some(
            Condition::all()
                .add(order::Column::OrderType.eq("DELIVERY"))
                .add(order::Column::FulfillmentType.eq("DELIVERY_BY_RESTAURANT")),
        ),
        Channel::Waiter => Some(
            Condition::all().add(order::Column::OrderType.is_not_in(["DELIVERY", "TAKE_AWAY"])),
        ),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::DbBackend;

    use super::*;

    fn sql(filter: &OrderFilter) -> String {
        order::Entity::find()
            .filter(filter.condition())
            .build(DbBackend::Sqlite)
            .to_string()
    }

    #[test]
    fn every_view_is_scoped_to_the_merchant() {
        let from = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let views = [
            OrderView::Pending,
            OrderView::ById(3),
            OrderView::History { from, to: from },
            OrderView::SessionScoped(vec![1, 2]),
        ];

        for view in &views {
            let sql = sql(&OrderFilter::for_view(7, view, None));
            assert!(sql.contains(r#""orders"."merchant_id" = 7"#), "{sql}");
        }
    }

    #[test]
    fn pending_includes_open_orders_and_active_sessions() {
        let sql = sql(&OrderFilter::for_view(1, &OrderView::Pending, None));

        assert!(sql.contains(r#""orders"."state" = 'OPEN'"#), "{sql}");
        assert!(sql.contains("ONLINE_PAYMENT_PENDING"), "{sql}");
        assert!(sql.contains(r#""orders"."brand_status" IS NULL"#), "{sql}");
        assert!(sql.contains(r#""delivery_session"."status" IN ('1', 'PENDING')"#), "{sql}");
    }

    #[test]
    fn by_id_filters_on_the_order_id() {
        let sql = sql(&OrderFilter::for_view(1, &OrderView::ById(42), None));

        assert!(sql.contains(r#""orders"."order_id" = 42"#), "{sql}");
        assert!(!sql.contains("OPEN"), "{sql}");
    }

    #[test]
    fn history_uses_an_inclusive_range() {
        let from = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 3, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();

        let sql = sql(&OrderFilter::for_view(1, &OrderView::History { from, to }, None));

        assert!(sql.contains(r#""orders"."creation_date" BETWEEN"#), "{sql}");
    }

    #[test]
    fn session_scope_selects_memberships() {
        let sql = sql(&OrderFilter::for_view(1, &OrderView::SessionScoped(vec![5, 6]), None));

        assert!(
            sql.contains(r#""delivery_session_order"."delivery_session_id" IN (5, 6)"#),
            "{sql}"
        );
    }

    #[test]
    fn delivery_channel_keeps_restaurant_deliveries() {
        let sql = sql(&OrderFilter::for_view(1, &OrderView::Pending, Some(Channel::Delivery)));

        assert!(sql.contains(r#""orders"."order_type" = 'DELIVERY'"#), "{sql}");
        assert!(
            sql.contains(r#""orders"."fulfillment_type" = 'DELIVERY_BY_RESTAURANT'"#),
            "{sql}"
        );
    }

    #[test]
    fn waiter_channel_excludes_delivery_and_take_away() {
        let sql = sql(&OrderFilter::for_view(1, &OrderView::Pending, Some(Channel::Waiter)));

        assert!(
            sql.contains(r#""orders"."order_type" NOT IN ('DELIVERY', 'TAKE_AWAY')"#),
            "{sql}"
        );
    }

    #[test]
    fn reception_and_unknown_channels_are_unrestricted() {
        let unrestricted = sql(&OrderFilter::for_view(1, &OrderView::Pending, None));
        let reception = sql(&OrderFilter::for_view(
            1,
            &OrderView::Pending,
            Some(Channel::Reception),
        ));
        let kiosk = sql(&OrderFilter::for_view(
            1,
            &OrderView::Pending,
            Channel::from_hint("WR_KIOSK"),
        ));

        assert_eq!(unrestricted, reception);
        assert_eq!(unrestricted, kiosk);

        let (_, predicate) = unrestricted
            .split_once(" WHERE ")
            .expect("filtered select has a WHERE clause");
        assert!(!predicate.contains(r#""order_type" ="#), "{predicate}");
        assert!(!predicate.contains(r#""order_type" NOT IN"#), "{predicate}");
    }

    #[test]
    fn narrowed_filter_lists_the_resolved_ids() {
        let sql = sql(&OrderFilter::for_order_ids(4, vec![8, 9]));

        assert!(sql.contains(r#""orders"."merchant_id" = 4"#), "{sql}");
        assert!(sql.contains(r#""orders"."order_id" IN (8, 9)"#), "{sql}");
    }

    #[test]
    fn values_are_bound_not_interpolated() {
        let filter = OrderFilter::for_view(1, &OrderView::ById(9), None);

        let statement = order::Entity::find()
            .filter(filter.condition())
            .build(DbBackend::Sqlite);

        assert!(statement.sql.contains('?'), "{}", statement.sql);
        assert!(statement.values.is_some());
    }
}
