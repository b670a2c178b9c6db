use sea_orm::entity::prelude::*;

/// Order header.
///
/// `responsible` keeps the legacy string encoding: `"0"` or empty for no assignee, `"-1"`
/// for scan-and-order, otherwise a `users.user_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_id: i32,
    pub merchant_id: i32,
    pub customer_id: Option<i32>,
    pub order_num: Option<String>,
    pub order_type: Option<String>,
    pub state: Option<String>,
    pub scheduled: bool,
    pub brand: Option<String>,
    pub brand_status: Option<String>,
    pub brand_order_id: Option<String>,
    pub brand_order_num: Option<String>,
    pub estimated_ready: Option<String>,
    pub price: i64,
    pub tva: Option<i64>,
    pub ht: Option<i64>,
    pub cutlery_notes: Option<String>,
    pub is_paid: bool,
    pub is_distributed: bool,
    pub date_call: Option<String>,
    pub is_delivery: bool,
    pub merchant_approval: Option<String>,
    pub delivery_fees: Option<i64>,
    pub fulfillment_type: Option<String>,
    pub use_customer_temporary_address: bool,
    pub places_settings: Option<i32>,
    pub pager_number: Option<String>,
    pub responsible: Option<String>,
    pub creation_date: Option<DateTime>,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::CustomerId"
    )]
    Customer,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
    #[sea_orm(has_many = "super::order_comment::Entity")]
    OrderComment,
    #[sea_orm(has_many = "super::order_location::Entity")]
    OrderLocation,
    #[sea_orm(has_many = "super::delivery_session_order::Entity")]
    DeliverySessionOrder,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
