use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000011_create_components_table::Components,
    m20260101_000012_create_recipes_table::Recipes,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Requires::Table)
                    .if_not_exists()
                    .col(pk_auto(Requires::Id))
                    .col(integer(Requires::RecipeId))
                    .col(integer(Requires::ComponentId))
                    .col(double(Requires::Quantity).default(0.0))
                    .col(integer(Requires::UnitOfMeasure))
                    .col(boolean(Requires::Enabled).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_requires_recipe_id")
                            .from(Requires::Table, Requires::RecipeId)
                            .to(Recipes::Table, Recipes::RecipeId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_requires_component_id")
                            .from(Requires::Table, Requires::ComponentId)
                            .to(Components::Table, Components::ComponentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Requires::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Requires {
    Table,
    Id,
    RecipeId,
    ComponentId,
    Quantity,
    UnitOfMeasure,
    Enabled,
}
