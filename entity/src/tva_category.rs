use sea_orm::entity::prelude::*;

/// VAT rate referenced three times by each product (dine-in, delivery, take-away).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tva_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub tva_id: i32,
    pub tva_rate: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
