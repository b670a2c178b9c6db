use sea_orm::entity::prelude::*;

/// Table or zone of the restaurant an order can be placed at.
///
/// The `current_*` and `angle` columns position the table on its floor plan.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub location_id: i32,
    pub merchant_id: i32,
    pub location_name: String,
    pub location_desc: Option<String>,
    pub seats: i32,
    pub location_order: i32,
    pub floor_id: Option<i32>,
    pub shape: Option<String>,
    pub current_x: Option<f64>,
    pub current_y: Option<f64>,
    pub current_width: Option<f64>,
    pub current_height: Option<f64>,
    pub angle: Option<f64>,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_location::Entity")]
    OrderLocation,
    #[sea_orm(has_many = "super::booked_location::Entity")]
    BookedLocation,
}

impl Related<super::order_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLocation.def()
    }
}

impl Related<super::booked_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookedLocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
