use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "productcateg")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub merchant_categ_id: i32,
    pub merchant_id: i32,
    pub categ_name: String,
    pub categ_order: i32,
    pub bg_color: Option<String>,
    pub available: bool,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
