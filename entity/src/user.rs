use sea_orm::entity::prelude::*;

/// Staff member of a merchant: receptionist, waiter or delivery driver.
///
/// `token` is the opaque bearer credential resolved by the auth guard.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub merchant_id: i32,
    pub user_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub tel: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub profile_picture: Option<String>,
    pub planning_color: Option<String>,
    #[sea_orm(unique)]
    pub token: String,
    pub access_reception: bool,
    pub access_delivery: bool,
    pub access_waiter: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::delivery_session::Entity")]
    DeliverySession,
    #[sea_orm(has_many = "super::order_comment::Entity")]
    OrderComment,
}

impl Related<super::delivery_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliverySession.def()
    }
}

impl Related<super::order_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderComment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
