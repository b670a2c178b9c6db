use sea_orm::entity::prelude::*;

/// Ingredient or modifier used by recipes, extras and withouts.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "components")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub component_id: i32,
    pub merchant_id: i32,
    pub category_id: Option<i32>,
    pub name: String,
    pub component_price: i64,
    pub status: i32,
    pub available: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::component_category::Entity",
        from = "Column::CategoryId",
        to = "super::component_category::Column::MerchantCategId"
    )]
    ComponentCategory,
    #[sea_orm(has_many = "super::requires::Entity")]
    Requires,
    #[sea_orm(has_many = "super::extra::Entity")]
    Extra,
    #[sea_orm(has_many = "super::without::Entity")]
    Without,
}

impl Related<super::component_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComponentCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
