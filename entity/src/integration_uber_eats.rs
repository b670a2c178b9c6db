use sea_orm::entity::prelude::*;

/// Uber Eats store settings mirrored by the POS (busy mode, pause).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "integration_uber_eats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub merchant_id: i32,
    pub enabled: bool,
    pub estimated_preparation_time: Option<String>,
    pub delay_duration: Option<String>,
    pub delay_until: Option<DateTime>,
    pub closed_until: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
