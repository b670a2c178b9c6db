use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000030_create_floors_table::Floors;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FloorAreas::Table)
                    .if_not_exists()
                    .col(pk_auto(FloorAreas::Id))
                    .col(integer(FloorAreas::FloorId))
                    .col(string_null(FloorAreas::Name))
                    .col(text_null(FloorAreas::Points))
                    .col(double_null(FloorAreas::X))
                    .col(double_null(FloorAreas::Y))
                    .col(double_null(FloorAreas::Angle))
                    .col(string_null(FloorAreas::StrokeColor))
                    .col(string_null(FloorAreas::Color))
                    .col(boolean(FloorAreas::Enabled).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_floor_areas_floor_id")
                            .from(FloorAreas::Table, FloorAreas::FloorId)
                            .to(Floors::Table, Floors::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FloorAreas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FloorAreas {
    Table,
    Id,
    FloorId,
    Name,
    Points,
    X,
    Y,
    Angle,
    StrokeColor,
    Color,
    Enabled,
}
