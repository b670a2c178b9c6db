use sea_orm::entity::prelude::*;

/// One product line of an order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orderitems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_item_id: i32,
    pub order_id: i32,
    pub merchant_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub paid_quantity: i32,
    pub distributed_quantity: i32,
    pub ready_for_distribution_quantity: i32,
    pub is_paid: bool,
    pub is_distributed: bool,
    pub price: i64,
    pub discount_id: Option<i32>,
    pub ordered_on: Option<DateTime>,
    pub production_status: Option<String>,
    pub production_status_done_quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::OrderId",
        on_delete = "Cascade"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::ProductId"
    )]
    Product,
    #[sea_orm(
        belongs_to = "super::discount::Entity",
        from = "Column::DiscountId",
        to = "super::discount::Column::DiscountId"
    )]
    Discount,
    #[sea_orm(has_many = "super::extra::Entity")]
    Extra,
    #[sea_orm(has_many = "super::without::Entity")]
    Without,
    #[sea_orm(has_many = "super::order_item_configuration::Entity")]
    OrderItemConfiguration,
    #[sea_orm(has_many = "super::session_order_item::Entity")]
    SessionOrderItem,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::discount::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
