use sea_orm::entity::prelude::*;

/// End customer of a merchant.
///
/// Carries two address blocks: the permanent one and a temporary one which an order may
/// select through `orders.use_customer_temporary_address`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub customer_id: i32,
    pub merchant_id: i32,
    pub customer_name: Option<String>,
    pub customer_tel: Option<String>,
    pub customer_temporary_phone: Option<String>,
    pub customer_temporary_phone_code: Option<String>,
    pub customer_nb_orders: Option<i32>,
    pub customer_additional_info: Option<String>,
    pub customer_zone_code: Option<String>,
    pub customer_address: Option<String>,
    pub customer_lat: Option<f64>,
    pub customer_lng: Option<f64>,
    pub customer_floor_number: Option<String>,
    pub customer_door_number: Option<String>,
    pub customer_additional_address: Option<String>,
    pub customer_temporary_address: Option<String>,
    pub customer_temporary_lat: Option<f64>,
    pub customer_temporary_lng: Option<f64>,
    pub customer_temporary_floor_number: Option<String>,
    pub customer_temporary_door_number: Option<String>,
    pub customer_temporary_additional_address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
