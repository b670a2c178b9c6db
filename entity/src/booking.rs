use sea_orm::entity::prelude::*;

/// Table reservation. Only `ACCEPTED` bookings are shown on the floor plan.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub booking_id: i32,
    pub merchant_id: i32,
    pub customer_id: i32,
    pub booking_number: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub party_size: i32,
    pub status: String,
    pub booking_date_from: Option<DateTime>,
    pub booking_date_to: Option<DateTime>,
    pub booking_duration: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::CustomerId"
    )]
    Customer,
    #[sea_orm(has_many = "super::booked_location::Entity")]
    BookedLocation,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::booked_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookedLocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
