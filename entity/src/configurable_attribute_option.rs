use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "configurable_attribute_options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub configurable_attribute_id: i32,
    pub title: String,
    pub extra_price: i64,
    pub max_quantity: i32,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::configurable_attribute::Entity",
        from = "Column::ConfigurableAttributeId",
        to = "super::configurable_attribute::Column::Id",
        on_delete = "Cascade"
    )]
    ConfigurableAttribute,
    #[sea_orm(has_many = "super::order_item_configuration::Entity")]
    OrderItemConfiguration,
}

impl Related<super::configurable_attribute::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConfigurableAttribute.def()
    }
}

impl Related<super::order_item_configuration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItemConfiguration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
