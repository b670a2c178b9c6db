use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000010_create_component_category_table::ComponentCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Components::Table)
                    .if_not_exists()
                    .col(pk_auto(Components::ComponentId))
                    .col(integer(Components::MerchantId))
                    .col(integer_null(Components::CategoryId))
                    .col(string(Components::Name))
                    .col(big_integer(Components::ComponentPrice).default(0))
                    .col(integer(Components::Status).default(1))
                    .col(boolean(Components::Available).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_components_category_id")
                            .from(Components::Table, Components::CategoryId)
                            .to(ComponentCategory::Table, ComponentCategory::MerchantCategId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Components::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Components {
    Table,
    ComponentId,
    MerchantId,
    CategoryId,
    Name,
    ComponentPrice,
    Status,
    Available,
}
