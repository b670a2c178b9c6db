//! The order batch: a fixed sequence of flat queries sharing one `OrderFilter`.

use entity::{
    component, configurable_attribute, configurable_attribute_option, customer, delivery_session,
    delivery_session_order, discount, extra, location, order, order_comment, order_item,
    order_item_configuration, order_location, payment, product, product_category,
    product_configurable_attribute, recipe, requires, scannorder_session, session_order_item,
    tva_category, unit_of_measure_desc, user, without,
};
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
    RelationTrait,
};

use crate::server::{
    data::{
        batch::BatchContext,
        delivery_session::ACTIVE_SESSION_STATUSES,
        order::{
            predicate::OrderFilter,
            rows::{
                AttributeRow, CommentRow, ComponentUsageRow, ExtraRow, LocationRow,
                OrderItemRow, SessionMembershipRow, SnoClientRow, WithoutRow,
            },
        },
    },
    error::aggregation::AggregationError,
    model::order::ResponsibleRef,
};

/// Language of the unit of measure labels served to the apps.
pub const UNIT_OF_MEASURE_LANG: &str = "FR";

/// Every flat row set of one order batch.
#[derive(Debug, Default)]
pub struct OrderBatch {
    pub headers: Vec<(order::Model, Option<customer::Model>)>,
    pub memberships: Vec<SessionMembershipRow>,
    pub items: Vec<OrderItemRow>,
    pub comments: Vec<CommentRow>,
    pub components: Vec<ComponentUsageRow>,
    pub extras: Vec<ExtraRow>,
    pub withouts: Vec<WithoutRow>,
    pub payments: Vec<payment::Model>,
    pub sno_clients: Vec<SnoClientRow>,
    pub locations: Vec<LocationRow>,
    pub attributes: Vec<AttributeRow>,
    pub options: Vec<configurable_attribute_option::Model>,
    pub selections: Vec<order_item_configuration::Model>,
    pub responsibles: Vec<user::Model>,
    pub tva_rates: Vec<tva_category::Model>,
}

/// Resolves a filter to the ids of the orders it covers, in header order.
pub async fn resolve_order_ids(
    ctx: &BatchContext,
    filter: &OrderFilter,
) -> Result<Vec<i32>, AggregationError> {
    ctx.step(
        "order_ids",
        order::Entity::find()
            .select_only()
            .column(order::Column::OrderId)
            .filter(filter.condition())
            .order_by_asc(order::Column::CreationDate)
            .order_by_asc(order::Column::OrderId)
            .into_tuple::<i32>()
            .all(ctx.conn()),
    )
    .await
}

impl OrderBatch {
    /// Runs every query of the batch, in order, on the context's transaction.
    ///
    /// Stops at the first failing step; no further query runs once headers come back empty.
    pub async fn load(ctx: &BatchContext, scope: &OrderFilter) -> Result<Self, AggregationError> {
        let conn = ctx.conn();

        let headers = ctx
            .step(
                "headers",
                order::Entity::find()
                    .find_also_related(customer::Entity)
                    .filter(scope.condition())
                    .order_by_asc(order::Column::CreationDate)
                    .order_by_asc(order::Column::OrderId)
                    .all(conn),
            )
            .await?;

        if headers.is_empty() {
            return Ok(Self::default());
        }

        let memberships = ctx
            .step(
                "session_memberships",
                delivery_session_order::Entity::find()
                    .select_only()
                    .column(delivery_session_order::Column::DeliverySessionId)
                    .column(delivery_session_order::Column::OrderId)
                    .column(delivery_session_order::Column::Priority)
                    .join(
                        JoinType::InnerJoin,
                        delivery_session_order::Relation::DeliverySession.def(),
                    )
                    .join(
                        JoinType::InnerJoin,
                        delivery_session_order::Relation::Order.def(),
                    )
                    .filter(delivery_session::Column::Status.is_in(ACTIVE_SESSION_STATUSES))
                    .filter(scope.condition())
                    .order_by_asc(delivery_session_order::Column::Id)
                    .into_model::<SessionMembershipRow>()
                    .all(conn),
            )
            .await?;

        let items = ctx
            .step(
                "items",
                order_item::Entity::find()
                    .select_only()
                    .columns([
                        order_item::Column::OrderItemId,
                        order_item::Column::OrderId,
                        order_item::Column::ProductId,
                        order_item::Column::Quantity,
                        order_item::Column::PaidQuantity,
                        order_item::Column::DistributedQuantity,
                        order_item::Column::ReadyForDistributionQuantity,
                        order_item::Column::IsPaid,
                        order_item::Column::IsDistributed,
                        order_item::Column::Price,
                        order_item::Column::DiscountId,
                        order_item::Column::OrderedOn,
                        order_item::Column::ProductionStatus,
                        order_item::Column::ProductionStatusDoneQuantity,
                    ])
                    .column_as(product::Column::Name, "name")
                    .column_as(product::Column::ImageUrl, "image_url")
                    .column_as(product::Column::ProductDesc, "description")
                    .column_as(product::Column::PriceTakeAway, "price_take_away")
                    .column_as(product::Column::PriceDelivery, "price_delivery")
                    .column_as(product::Column::TvaInId, "tva_in_id")
                    .column_as(product::Column::TvaDeliveryId, "tva_delivery_id")
                    .column_as(product::Column::TvaTakeAwayId, "tva_take_away_id")
                    .column_as(product::Column::AvailableIn, "available_in")
                    .column_as(product::Column::AvailableTakeAway, "available_take_away")
                    .column_as(product::Column::AvailableDelivery, "available_delivery")
                    .column_as(product::Column::ProductionColor, "production_color")
                    .column_as(product_category::Column::CategName, "category_name")
                    .column_as(discount::Column::DiscountName, "discount_name")
                    .join(JoinType::InnerJoin, order_item::Relation::Order.def())
                    .join(JoinType::InnerJoin, order_item::Relation::Product.def())
                    .join(JoinType::LeftJoin, product::Relation::ProductCategory.def())
                    .join(JoinType::LeftJoin, order_item::Relation::Discount.def())
                    .filter(scope.condition())
                    .filter(order_item::Column::Quantity.gt(0))
                    .order_by_asc(order_item::Column::OrderId)
                    .order_by_asc(order_item::Column::OrderItemId)
                    .into_model::<OrderItemRow>()
                    .all(conn),
            )
            .await?;

        let comments = ctx
            .step(
                "comments",
                order_comment::Entity::find()
                    .select_only()
                    .columns([
                        order_comment::Column::OrderId,
                        order_comment::Column::OrderItemId,
                        order_comment::Column::Content,
                        order_comment::Column::CreationDate,
                    ])
                    .column_as(user::Column::UserName, "user_name")
                    .join(JoinType::InnerJoin, order_comment::Relation::Order.def())
                    .join(JoinType::LeftJoin, order_comment::Relation::User.def())
                    .filter(scope.condition())
                    .order_by_asc(order_comment::Column::CreationDate)
                    .order_by_asc(order_comment::Column::Id)
                    .into_model::<CommentRow>()
                    .all(conn),
            )
            .await?;

        let components = ctx
            .step(
                "components",
                requires::Entity::find()
                    .select_only()
                    .column_as(recipe::Column::ProductId, "product_id")
                    .column_as(component::Column::ComponentId, "component_id")
                    .column_as(component::Column::Name, "name")
                    .column_as(component::Column::ComponentPrice, "price")
                    .column_as(component::Column::Status, "status")
                    .column_as(requires::Column::Quantity, "quantity")
                    .column_as(unit_of_measure_desc::Column::UomDesc, "unit_of_measure")
                    .join(JoinType::InnerJoin, requires::Relation::Recipe.def())
                    .join(JoinType::InnerJoin, requires::Relation::Component.def())
                    .join(JoinType::InnerJoin, requires::Entity::unit_of_measure_desc())
                    .filter(unit_of_measure_desc::Column::Lang.eq(UNIT_OF_MEASURE_LANG))
                    .filter(requires::Column::Enabled.eq(true))
                    .filter(component::Column::Available.eq(true))
                    .filter(component::Column::MerchantId.eq(scope.merchant_id()))
                    .filter(recipe::Column::ProductId.in_subquery(scope.product_ids_query()))
                    .order_by_asc(recipe::Column::ProductId)
                    .order_by_asc(requires::Column::Id)
                    .into_model::<ComponentUsageRow>()
                    .all(conn),
            )
            .await?;

        let extras = ctx
            .step(
                "extras",
                extra::Entity::find()
                    .select_only()
                    .columns([
                        extra::Column::Id,
                        extra::Column::OrderItemId,
                        extra::Column::OrderId,
                        extra::Column::ProductId,
                        extra::Column::ComponentId,
                        extra::Column::Price,
                    ])
                    .column_as(component::Column::Name, "name")
                    .join(JoinType::InnerJoin, extra::Relation::OrderItem.def())
                    .join(JoinType::InnerJoin, order_item::Relation::Order.def())
                    .join(JoinType::InnerJoin, extra::Relation::Component.def())
                    .filter(scope.condition())
                    .order_by_asc(extra::Column::Id)
                    .into_model::<ExtraRow>()
                    .all(conn),
            )
            .await?;

        let withouts = ctx
            .step(
                "withouts",
                without::Entity::find()
                    .select_only()
                    .columns([
                        without::Column::Id,
                        without::Column::OrderItemId,
                        without::Column::OrderId,
                        without::Column::ProductId,
                        without::Column::ComponentId,
                    ])
                    .column_as(component::Column::ComponentPrice, "price")
                    .column_as(component::Column::Name, "name")
                    .join(JoinType::InnerJoin, without::Relation::OrderItem.def())
                    .join(JoinType::InnerJoin, order_item::Relation::Order.def())
                    .join(JoinType::InnerJoin, without::Relation::Component.def())
                    .filter(scope.condition())
                    .order_by_asc(without::Column::Id)
                    .into_model::<WithoutRow>()
                    .all(conn),
            )
            .await?;

        let payments = ctx
            .step(
                "payments",
                payment::Entity::find()
                    .join(JoinType::InnerJoin, payment::Relation::Order.def())
                    .filter(scope.condition())
                    .order_by_asc(payment::Column::PaymentId)
                    .all(conn),
            )
            .await?;

        let sno_clients = ctx
            .step(
                "sno_clients",
                session_order_item::Entity::find()
                    .select_only()
                    .column(session_order_item::Column::OrderItemId)
                    .column(session_order_item::Column::Quantity)
                    .column_as(scannorder_session::Column::UserCode, "user_code")
                    .column_as(scannorder_session::Column::UserName, "user_name")
                    .join(
                        JoinType::InnerJoin,
                        session_order_item::Relation::ScannorderSession.def(),
                    )
                    .join(
                        JoinType::InnerJoin,
                        session_order_item::Relation::OrderItem.def(),
                    )
                    .join(JoinType::InnerJoin, order_item::Relation::Order.def())
                    .filter(scope.condition())
                    .order_by_asc(session_order_item::Column::Id)
                    .into_model::<SnoClientRow>()
                    .all(conn),
            )
            .await?;

        let locations = ctx
            .step(
                "locations",
                order_location::Entity::find()
                    .select_only()
                    .column(order_location::Column::OrderId)
                    .column_as(location::Column::LocationId, "location_id")
                    .column_as(location::Column::LocationName, "location_name")
                    .column_as(location::Column::LocationDesc, "location_desc")
                    .join(JoinType::InnerJoin, order_location::Relation::Order.def())
                    .join(JoinType::InnerJoin, order_location::Relation::Location.def())
                    .filter(location::Column::MerchantId.eq(scope.merchant_id()))
                    .filter(scope.condition())
                    .order_by_asc(order_location::Column::Id)
                    .into_model::<LocationRow>()
                    .all(conn),
            )
            .await?;

        let attributes = ctx
            .step(
                "attributes",
                product_configurable_attribute::Entity::find()
                    .select_only()
                    .column(product_configurable_attribute::Column::ProductId)
                    .column(product_configurable_attribute::Column::NumOrder)
                    .column_as(configurable_attribute::Column::Id, "id")
                    .column_as(configurable_attribute::Column::Title, "title")
                    .column_as(configurable_attribute::Column::MaxOptions, "max_options")
                    .column_as(configurable_attribute::Column::MinOptions, "min_options")
                    .column_as(configurable_attribute::Column::AttributeType, "attribute_type")
                    .join(
                        JoinType::InnerJoin,
                        product_configurable_attribute::Relation::ConfigurableAttribute.def(),
                    )
                    .filter(
                        product_configurable_attribute::Column::ProductId
                            .in_subquery(scope.product_ids_query()),
                    )
                    .order_by_asc(product_configurable_attribute::Column::ProductId)
                    .order_by_asc(product_configurable_attribute::Column::NumOrder)
                    .order_by_asc(product_configurable_attribute::Column::Id)
                    .into_model::<AttributeRow>()
                    .all(conn),
            )
            .await?;

        let attribute_ids = product_configurable_attribute::Entity::find()
            .select_only()
            .column(product_configurable_attribute::Column::ConfigurableAttributeId)
            .filter(
                product_configurable_attribute::Column::ProductId
                    .in_subquery(scope.product_ids_query()),
            )
            .into_query();

        let options = ctx
            .step(
                "options",
                configurable_attribute_option::Entity::find()
                    .filter(
                        configurable_attribute_option::Column::ConfigurableAttributeId
                            .in_subquery(attribute_ids),
                    )
                    .order_by_asc(configurable_attribute_option::Column::ConfigurableAttributeId)
                    .order_by_asc(configurable_attribute_option::Column::Id)
                    .all(conn),
            )
            .await?;

        let selections = ctx
            .step(
                "selections",
                order_item_configuration::Entity::find()
                    .join(
                        JoinType::InnerJoin,
                        order_item_configuration::Relation::OrderItem.def(),
                    )
                    .join(JoinType::InnerJoin, order_item::Relation::Order.def())
                    .filter(scope.condition())
                    .order_by_asc(order_item_configuration::Column::Id)
                    .all(conn),
            )
            .await?;

        let mut responsible_ids: Vec<i32> = headers
            .iter()
            .filter_map(|(order, _)| ResponsibleRef::parse(order.responsible.as_deref()).user_id())
            .collect();
        responsible_ids.sort_unstable();
        responsible_ids.dedup();

        let responsibles = if responsible_ids.is_empty() {
            Vec::new()
        } else {
            ctx.step(
                "responsibles",
                user::Entity::find()
                    .filter(user::Column::UserId.is_in(responsible_ids))
                    .filter(user::Column::MerchantId.eq(scope.merchant_id()))
                    .all(conn),
            )
            .await?
        };

        let tva_rates = ctx
            .step("tva_rates", tva_category::Entity::find().all(conn))
            .await?;

        Ok(Self {
            headers,
            memberships,
            items,
            comments,
            components,
            extras,
            withouts,
            payments,
            sno_clients,
            locations,
            attributes,
            options,
            selections,
            responsibles,
            tva_rates,
        })
    }
}
