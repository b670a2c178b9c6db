use sea_orm::entity::prelude::*;

/// Component requirement of a recipe, with quantity and unit of measure.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "requires")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub recipe_id: i32,
    pub component_id: i32,
    pub quantity: f64,
    pub unit_of_measure: i32,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recipe::Entity",
        from = "Column::RecipeId",
        to = "super::recipe::Column::RecipeId",
        on_delete = "Cascade"
    )]
    Recipe,
    #[sea_orm(
        belongs_to = "super::component::Entity",
        from = "Column::ComponentId",
        to = "super::component::Column::ComponentId"
    )]
    Component,
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl Related<super::component::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Component.def()
    }
}

impl Entity {
    /// Join onto the unit of measure labels.
    ///
    /// Not part of `Relation`: the label table is keyed by `(id, lang)`, so `unit_of_measure`
    /// alone cannot carry a foreign key. Callers filter on `lang` themselves.
    pub fn unit_of_measure_desc() -> RelationDef {
        Entity::belongs_to(super::unit_of_measure_desc::Entity)
            .from(Column::UnitOfMeasure)
            .to(super::unit_of_measure_desc::Column::Id)
            .into()
    }
}

impl ActiveModelBehavior for ActiveModel {}
