use sea_orm::entity::prelude::*;

/// Named choice group (e.g. "Cooking", "Sauce") with min/max selectable options.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "configurable_attributes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub merchant_id: i32,
    pub title: String,
    pub max_options: i32,
    pub min_options: i32,
    pub attribute_type: String,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::configurable_attribute_option::Entity")]
    ConfigurableAttributeOption,
    #[sea_orm(has_many = "super::product_configurable_attribute::Entity")]
    ProductConfigurableAttribute,
}

impl Related<super::configurable_attribute_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConfigurableAttributeOption.def()
    }
}

impl Related<super::product_configurable_attribute::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductConfigurableAttribute.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
