use sea_orm::entity::prelude::*;

/// Membership of an order in a delivery session, with its drop-off priority.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "delivery_session_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub delivery_session_id: i32,
    pub order_id: i32,
    pub priority: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::delivery_session::Entity",
        from = "Column::DeliverySessionId",
        to = "super::delivery_session::Column::Id",
        on_delete = "Cascade"
    )]
    DeliverySession,
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::OrderId",
        on_delete = "Cascade"
    )]
    Order,
}

impl Related<super::delivery_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliverySession.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
