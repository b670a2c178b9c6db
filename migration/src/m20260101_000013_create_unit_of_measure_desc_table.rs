use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UnitOfMeasureDesc::Table)
                    .if_not_exists()
                    .col(integer(UnitOfMeasureDesc::Id))
                    .col(string(UnitOfMeasureDesc::Lang))
                    .col(string(UnitOfMeasureDesc::UomDesc))
                    .primary_key(
                        Index::create()
                            .col(UnitOfMeasureDesc::Id)
                            .col(UnitOfMeasureDesc::Lang),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UnitOfMeasureDesc::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UnitOfMeasureDesc {
    Table,
    Id,
    Lang,
    UomDesc,
}
