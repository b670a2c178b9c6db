use sea_orm::entity::prelude::*;

/// Per-merchant settings. `last_menu_update` is the catalog version clients cache against;
/// `is_open` is the manual open/closed switch of the POS.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "merchant_parameters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub merchant_id: i32,
    pub last_menu_update: Option<DateTime>,
    pub is_open: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
