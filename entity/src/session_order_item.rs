use sea_orm::entity::prelude::*;

/// Quantity of an order item attributed to one scan-and-order guest.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session_orderitem")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_item_id: i32,
    pub user_code: String,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order_item::Entity",
        from = "Column::OrderItemId",
        to = "super::order_item::Column::OrderItemId",
        on_delete = "Cascade"
    )]
    OrderItem,
    #[sea_orm(
        belongs_to = "super::scannorder_session::Entity",
        from = "Column::UserCode",
        to = "super::scannorder_session::Column::UserCode"
    )]
    ScannorderSession,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl Related<super::scannorder_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScannorderSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
