use sea_orm::entity::prelude::*;

/// A driver's delivery run. Status `"1"` or `"PENDING"` marks an active session.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "delivery_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub merchant_id: i32,
    pub user_id: i32,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId"
    )]
    User,
    #[sea_orm(has_many = "super::delivery_session_order::Entity")]
    DeliverySessionOrder,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::delivery_session_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliverySessionOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
