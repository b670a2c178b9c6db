//! The catalog batch: every flat row set a menu is built from.

use chrono::NaiveDateTime;
use entity::{
    component, component_category, configurable_attribute, configurable_attribute_option, delay,
    merchant_parameters, product, product_category, product_configurable_attribute, recipe,
    requires, tva_category, unit_of_measure_desc,
};
use sea_orm::{
    sea_query::{Expr, SelectStatement},
    ColumnTrait, Condition, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait, RelationTrait,
};

use crate::server::{
    data::{
        batch::BatchContext,
        order::{
            fetch::UNIT_OF_MEASURE_LANG,
            rows::{AttributeRow, ComponentUsageRow},
        },
    },
    error::aggregation::AggregationError,
};

#[derive(Debug, Default)]
pub struct MenuBatch {
    pub version: Option<NaiveDateTime>,
    pub categories: Vec<product_category::Model>,
    pub roots: Vec<product::Model>,
    pub sub_products: Vec<product::Model>,
    pub tva_rates: Vec<tva_category::Model>,
    pub components: Vec<ComponentUsageRow>,
    pub attributes: Vec<AttributeRow>,
    pub options: Vec<configurable_attribute_option::Model>,
    pub delays: Vec<delay::Model>,
    pub component_categories: Vec<component_category::Model>,
    pub all_components: Vec<component::Model>,
}

/// Reads the merchant's current catalog version, `None` when never set.
pub async fn fetch_version(
    ctx: &BatchContext,
    merchant_id: i32,
) -> Result<Option<NaiveDateTime>, AggregationError> {
    let parameters = ctx
        .step(
            "last_menu_update",
            merchant_parameters::Entity::find_by_id(merchant_id).one(ctx.conn()),
        )
        .await?;

    Ok(parameters.and_then(|parameters| parameters.last_menu_update))
}

/// Ids of every product the menu can show.
fn menu_product_ids(merchant_id: i32) -> SelectStatement {
    product::Entity::find()
        .select_only()
        .column(product::Column::ProductId)
        .filter(sellable(merchant_id))
        .into_query()
}

fn sellable(merchant_id: i32) -> Condition {
    Condition::all()
        .add(product::Column::MerchantId.eq(merchant_id))
        .add(product::Column::Available.eq(true))
        .add(product::Column::Enabled.eq(true))
}

/// `by_product_of = product_id`
fn names_itself_as_parent() -> Expr {
    use sea_orm::sea_query::ExprTrait;

    Expr::col((product::Entity, product::Column::ByProductOf))
        .eq(Expr::col((product::Entity, product::Column::ProductId)))
}

impl MenuBatch {
    /// Runs the catalog queries, in order, on the context's transaction.
    pub async fn load(
        ctx: &BatchContext,
        merchant_id: i32,
        version: Option<NaiveDateTime>,
    ) -> Result<Self, AggregationError> {
        let conn = ctx.conn();

        let categories = ctx
            .step(
                "categories",
                product_category::Entity::find()
                    .filter(product_category::Column::MerchantId.eq(merchant_id))
                    .filter(product_category::Column::Available.eq(true))
                    .filter(product_category::Column::Enabled.eq(true))
                    .order_by_asc(product_category::Column::CategOrder)
                    .order_by_asc(product_category::Column::MerchantCategId)
                    .all(conn),
            )
            .await?;

        // A product naming itself as parent is a root.
        let roots = ctx
            .step(
                "root_products",
                product::Entity::find()
                    .filter(sellable(merchant_id))
                    .filter(
                        Condition::any()
                            .add(product::Column::ByProductOf.is_null())
                            .add(names_itself_as_parent()),
                    )
                    .order_by_asc(product::Column::Name)
                    .order_by_asc(product::Column::ProductId)
                    .all(conn),
            )
            .await?;

        let sub_products = ctx
            .step(
                "sub_products",
                product::Entity::find()
                    .filter(sellable(merchant_id))
                    .filter(product::Column::ByProductOf.is_not_null())
                    .filter(Condition::all().add(names_itself_as_parent()).not())
                    .order_by_asc(product::Column::Name)
                    .order_by_asc(product::Column::ProductId)
                    .all(conn),
            )
            .await?;

        let tva_rates = ctx
            .step("tva_rates", tva_category::Entity::find().all(conn))
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
                    .filter(component::Column::MerchantId.eq(merchant_id))
                    .filter(recipe::Column::ProductId.in_subquery(menu_product_ids(merchant_id)))
                    .order_by_asc(recipe::Column::ProductId)
                    .order_by_asc(requires::Column::Id)
                    .into_model::<ComponentUsageRow>()
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
                    .filter(product_configurable_attribute::Column::Enabled.eq(true))
                    .filter(configurable_attribute::Column::Enabled.eq(true))
                    .filter(
                        product_configurable_attribute::Column::ProductId
                            .in_subquery(menu_product_ids(merchant_id)),
                    )
                    .order_by_asc(product_configurable_attribute::Column::ProductId)
                    .order_by_asc(product_configurable_attribute::Column::NumOrder)
                    .order_by_asc(product_configurable_attribute::Column::Id)
                    .into_model::<AttributeRow>()
                    .all(conn),
            )
            .await?;

        let attribute_ids = configurable_attribute::Entity::find()
            .select_only()
            .column(configurable_attribute::Column::Id)
            .filter(configurable_attribute::Column::MerchantId.eq(merchant_id))
            .filter(configurable_attribute::Column::Enabled.eq(true))
            .into_query();

        let options = ctx
            .step(
                "options",
                configurable_attribute_option::Entity::find()
                    .filter(configurable_attribute_option::Column::Enabled.eq(true))
                    .filter(
                        configurable_attribute_option::Column::ConfigurableAttributeId
                            .in_subquery(attribute_ids),
                    )
                    .order_by_asc(configurable_attribute_option::Column::ConfigurableAttributeId)
                    .order_by_asc(configurable_attribute_option::Column::Id)
                    .all(conn),
            )
            .await?;

        let delays = ctx
            .step(
                "delays",
                delay::Entity::find()
                    .filter(delay::Column::Enabled.eq(true))
                    .order_by_asc(delay::Column::Duration)
                    .order_by_asc(delay::Column::Id)
                    .all(conn),
            )
            .await?;

        let component_categories = ctx
            .step(
                "component_categories",
                component_category::Entity::find()
                    .filter(component_category::Column::MerchantId.eq(merchant_id))
                    .filter(component_category::Column::Available.eq(true))
                    .order_by_asc(component_category::Column::CategOrder)
                    .order_by_asc(component_category::Column::MerchantCategId)
                    .all(conn),
            )
            .await?;

        let all_components = ctx
            .step(
                "all_components",
                component::Entity::find()
                    .filter(component::Column::MerchantId.eq(merchant_id))
                    .order_by_asc(component::Column::Name)
                    .order_by_asc(component::Column::ComponentId)
                    .all(conn),
            )
            .await?;

        Ok(Self {
            version,
            categories,
            roots,
            sub_products,
            tva_rates,
            components,
            attributes,
            options,
            delays,
            component_categories,
            all_components,
        })
    }
}
