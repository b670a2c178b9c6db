use sea_orm::entity::prelude::*;

/// Attaches a configurable attribute to a product; `num_order` is its display position.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product_configurable_attribute")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: i32,
    pub configurable_attribute_id: i32,
    pub num_order: i32,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::ProductId",
        on_delete = "Cascade"
    )]
    Product,
    #[sea_orm(
        belongs_to = "super::configurable_attribute::Entity",
        from = "Column::ConfigurableAttributeId",
        to = "super::configurable_attribute::Column::Id",
        on_delete = "Cascade"
    )]
    ConfigurableAttribute,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::configurable_attribute::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConfigurableAttribute.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
