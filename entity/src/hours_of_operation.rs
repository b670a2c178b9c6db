use sea_orm::entity::prelude::*;

/// Opening slot repeated over a range of weekdays, `1` (Monday) to `7` (Sunday).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hours_of_operation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub merchant_id: i32,
    pub day_of_week_from: i32,
    pub day_of_week_to: i32,
    pub hour_from: Time,
    pub hour_to: Time,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
