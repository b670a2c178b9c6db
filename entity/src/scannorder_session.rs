use sea_orm::entity::prelude::*;

/// Scan-and-order guest identified by the code scanned at the table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scannorder_session")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_code: String,
    pub merchant_id: i32,
    pub user_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session_order_item::Entity")]
    SessionOrderItem,
}

impl Related<super::session_order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionOrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
