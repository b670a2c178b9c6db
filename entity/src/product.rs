use sea_orm::entity::prelude::*;

/// Catalog product.
///
/// A product with `by_product_of` set is a sub-product of that parent and never appears as a
/// root entry of its category.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub product_id: i32,
    pub merchant_id: i32,
    pub by_product_of: Option<i32>,
    pub category: Option<i32>,
    pub name: String,
    pub product_desc: Option<String>,
    pub price: i64,
    pub price_take_away: i64,
    pub price_delivery: i64,
    pub tva_in_id: i32,
    pub tva_delivery_id: i32,
    pub tva_take_away_id: i32,
    pub bg_color: Option<String>,
    pub is_product_group: bool,
    pub status: i32,
    pub is_available_on_sno: bool,
    pub is_popular: bool,
    pub image_url: Option<String>,
    pub production_color: Option<String>,
    pub available_in: bool,
    pub available_take_away: bool,
    pub available_delivery: bool,
    pub available: bool,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_category::Entity",
        from = "Column::Category",
        to = "super::product_category::Column::MerchantCategId"
    )]
    ProductCategory,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
    #[sea_orm(has_many = "super::recipe::Entity")]
    Recipe,
    #[sea_orm(has_many = "super::product_configurable_attribute::Entity")]
    ProductConfigurableAttribute,
}

impl Related<super::product_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductCategory.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
