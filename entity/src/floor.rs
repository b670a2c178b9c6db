use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "floors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub merchant_id: i32,
    pub name: String,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::floor_area::Entity")]
    FloorArea,
}

impl Related<super::floor_area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FloorArea.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
