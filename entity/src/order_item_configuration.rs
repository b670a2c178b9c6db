use sea_orm::entity::prelude::*;

/// Option picked by the customer for one order item.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order_item_configuration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_item_id: i32,
    pub configuration_attribute_option_id: i32,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order_item::Entity",
        from = "Column::OrderItemId",
        to = "super::order_item::Column::OrderItemId",
        on_delete = "Cascade"
    )]
    OrderItem,
    #[sea_orm(
        belongs_to = "super::configurable_attribute_option::Entity",
        from = "Column::ConfigurationAttributeOptionId",
        to = "super::configurable_attribute_option::Column::Id"
    )]
    ConfigurableAttributeOption,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl Related<super::configurable_attribute_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConfigurableAttributeOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
